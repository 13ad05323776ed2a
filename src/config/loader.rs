use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use crate::converter::DEFAULT_SELECTOR;

/// 指定配置檔路徑的環境變數
pub const CONFIG_PATH_ENV: &str = "TSCONVERT_CONFIG";

/// 預設配置檔路徑
const DEFAULT_CONFIG_PATH: &str = "config/tsconvert.toml";

/// 配置加載器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 取得配置檔路徑
    pub fn config_path() -> PathBuf {
        env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// 從指定路徑載入配置，檔案不存在時只使用預設值與環境變數
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let mut config_builder = Config::builder()
            .set_default("log.level", "warn")?
            .set_default("log.format", "compact")?
            .set_default("defaults.precision", DEFAULT_SELECTOR)?;

        // 加載配置文件（可選）
        config_builder = config_builder.add_source(File::from(path).required(false));

        // 從環境變數加載配置（優先級高於文件配置）
        config_builder = config_builder.add_source(
            Environment::with_prefix("TSCONVERT")
                .separator("__")
                .try_parsing(true),
        );

        // 構建最終配置
        config_builder.build()
    }

    /// 從預設位置載入配置
    pub fn load() -> Result<Config, ConfigError> {
        Self::load_from(&Self::config_path())
    }
}

/// 配置獲取輔助特性
pub trait ConfigExt {
    /// 從配置中獲取並反序列化指定部分
    fn get_section<'a, T: Deserialize<'a>>(&'a self, section: &str) -> Result<T, ConfigError>;
}

impl ConfigExt for Config {
    fn get_section<'a, T: Deserialize<'a>>(&'a self, section: &str) -> Result<T, ConfigError> {
        self.get(section)
    }
}
