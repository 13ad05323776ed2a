use config::ConfigError;
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::config::loader::ConfigLoader;
use crate::config::types::ApplicationConfig;
use crate::config::validation::{ValidationError, Validator};

// 全局配置實例
static CONFIG: OnceCell<ApplicationConfig> = OnceCell::new();

/// 初始化配置（在應用程序啟動時調用）
pub fn init_config() -> Result<&'static ApplicationConfig, ConfigError> {
    CONFIG.get_or_try_init(|| {
        let app_config = ApplicationConfig::load()?;
        debug!(path = %ConfigLoader::config_path().display(), "配置初始化成功");
        Ok(app_config)
    })
}

/// ApplicationConfig 加載方法實現
impl ApplicationConfig {
    /// 從預設位置加載配置
    pub fn load() -> Result<Self, ConfigError> {
        let config_source = ConfigLoader::load()?;

        // 使用 serde 反序列化配置
        let app_config: ApplicationConfig = config_source.try_deserialize()?;

        // 驗證配置
        app_config.validate().map_err(|err: ValidationError| {
            warn!("配置驗證失敗: {}", err);
            ConfigError::Message(err.to_string())
        })?;

        Ok(app_config)
    }
}
