use thiserror::Error;

use crate::converter::Timestamp;
use crate::domain_types::Precision;

/// 時間戳超出該精度下可表示的日期範圍
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Timestamp: {timestamp} too large for precision: {precision}")]
pub struct TimestampRangeError {
    pub timestamp: Timestamp,
    pub precision: Precision,
}

impl TimestampRangeError {
    pub fn new(timestamp: Timestamp, precision: Precision) -> Self {
        Self {
            timestamp,
            precision,
        }
    }
}

pub type ConversionResult<T> = Result<T, TimestampRangeError>;
