use serde::Deserialize;

use crate::config::validation::{ValidationError, ValidationUtils, Validator};
use crate::converter::SELECTOR_KEYS;

/// 應用程序配置結構
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub log: LogConfig,
    pub defaults: DefaultsConfig,
}

impl Validator for ApplicationConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證各個部分的配置
        self.log.validate()?;
        self.defaults.validate()?;

        Ok(())
    }
}

/// 日誌配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub format: String,
}

impl Validator for LogConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證日誌級別
        ValidationUtils::one_of(
            &self.level.to_lowercase().as_str(),
            &["trace", "debug", "info", "warn", "error"],
            "log.level",
        )?;

        // 驗證日誌格式
        ValidationUtils::one_of(
            &self.format.to_lowercase().as_str(),
            &["compact", "full"],
            "log.format",
        )?;

        Ok(())
    }
}

/// 命令行預設值
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    /// 未指定 `-p` 時使用的精度選擇器
    pub precision: String,
}

impl Validator for DefaultsConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        ValidationUtils::not_empty(&self.precision, "defaults.precision")?;
        ValidationUtils::one_of(&self.precision.as_str(), &SELECTOR_KEYS, "defaults.precision")?;

        Ok(())
    }
}
