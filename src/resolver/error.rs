use thiserror::Error;

use crate::converter::TimestampRangeError;

/// 用法錯誤，在任何轉換開始前偵測
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("Unknown precision: {0}")]
    InvalidPrecisionKey(String),

    #[error("Invalid date/time: {0}.")]
    InvalidDateLiteral(String),

    #[error("Date/time and timestamp are mutually exclusive")]
    ConflictingInput,
}

/// 解析請求時可能發生的錯誤
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    TimestampRange(#[from] TimestampRangeError),
}

impl ResolveError {
    /// 行程結束代碼：用法錯誤為 2，範圍錯誤為 1
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 2,
            Self::TimestampRange(_) => 1,
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

pub type ResolveResult<T> = Result<T, ResolveError>;
