//! 時間戳轉換模組
//!
//! `Converter` 封裝一組 (起算點, 精度, 名稱)，負責 UTC 時間與整數時間戳之間的雙向轉換。
//! 所有換算都以微秒為中介：
//!
//! - `from_dt`：`floor(微秒差 * scale / 1_000_000)`
//! - `to_dt`：`起算點 + (時間戳 * 1_000_000 / scale) 微秒`，除法向零截斷
//!
//! 微秒以下的精度（奈秒、.NET ticks）在往返轉換時只保留到微秒。

pub mod error;
pub mod registry;

pub use error::{ConversionResult, TimestampRangeError};
pub use registry::{ConverterRegistry, DEFAULT_SELECTOR, REGISTRY, SELECTOR_KEYS};

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use once_cell::sync::Lazy;
use std::borrow::Cow;
use tracing::warn;

use crate::domain_types::{Epoch, Precision, EPOCH_AD, EPOCH_UNIX};
use crate::utils::time_utils::{is_supported_year, now_utc, total_microseconds, MICROS_PER_SECOND};

/// 整數時間戳
///
/// 採用 i128，任何 chrono 可表示的時間換算成奈秒都不會溢位。
pub type Timestamp = i128;

/// 自 1970-01-01 起的秒數
pub static UNIX_SECONDS: Lazy<Converter> =
    Lazy::new(|| Converter::named(*EPOCH_UNIX, Precision::Seconds, "UNIX Seconds"));

/// JavaScript 時間戳使用 UNIX 紀元與毫秒精度
pub static JAVASCRIPT: Lazy<Converter> =
    Lazy::new(|| Converter::named(*EPOCH_UNIX, Precision::Milliseconds, "Javascript"));

/// Cassandra 時間戳預設使用 UNIX 紀元與微秒精度
pub static CASSANDRA: Lazy<Converter> =
    Lazy::new(|| Converter::named(*EPOCH_UNIX, Precision::Microseconds, "Cassandra"));

/// .NET ticks 為自 0001-01-01 起的千萬分之一秒
pub static DOT_NET_TICKS: Lazy<Converter> =
    Lazy::new(|| Converter::named(*EPOCH_AD, Precision::DotNetTicks, ".NET Ticks"));

/// 時間戳轉換器，建立後不可變
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converter {
    epoch: Epoch,
    precision: Precision,
    name: Cow<'static, str>,
}

impl Converter {
    /// 建立轉換器，名稱預設為精度的顯示名稱
    pub fn new(epoch: Epoch, precision: Precision) -> Self {
        Self::named(epoch, precision, precision.display_name())
    }

    /// 建立具名轉換器
    pub fn named(epoch: Epoch, precision: Precision, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            epoch,
            precision,
            name: name.into(),
        }
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 將任意時區的時間轉換為時間戳
    ///
    /// 先向負無窮取整到微秒，再依 scale 換算並向負無窮取整，
    /// 因此紀元之前的時間同樣朝較早的方向截斷。
    pub fn from_dt<Tz: TimeZone>(&self, date_time: &DateTime<Tz>) -> Timestamp {
        let diff = date_time.with_timezone(&Utc) - self.epoch.date_time();
        let micros = total_microseconds(&diff);
        (micros * i128::from(self.precision.scale())).div_euclid(MICROS_PER_SECOND)
    }

    /// 將時間戳轉換為 UTC 時間
    ///
    /// 奈秒與 ticks 不在微秒邊界上的部分向零截斷。
    /// 任何一步溢位（換算、微秒時間差、日期相加），或結果不在
    /// 0001-01-01 至 9999-12-31 之間，都回傳 `TimestampRangeError`。
    pub fn to_dt(&self, timestamp: Timestamp) -> ConversionResult<DateTime<Utc>> {
        let out_of_range = || {
            warn!(
                timestamp = %timestamp,
                precision = %self.precision,
                "時間戳超出可表示的日期範圍"
            );
            TimestampRangeError::new(timestamp, self.precision)
        };

        let micros = timestamp
            .checked_mul(MICROS_PER_SECOND)
            .ok_or_else(out_of_range)?
            / i128::from(self.precision.scale());
        let micros = i64::try_from(micros).map_err(|_| out_of_range())?;

        self.epoch
            .date_time()
            .checked_add_signed(TimeDelta::microseconds(micros))
            .filter(is_supported_year)
            .ok_or_else(out_of_range)
    }
}

/// 以 `UNIX_SECONDS` 將時間轉換為時間戳
pub fn from_date_time<Tz: TimeZone>(date_time: &DateTime<Tz>) -> Timestamp {
    from_date_time_with(date_time, &UNIX_SECONDS)
}

pub fn from_date_time_with<Tz: TimeZone>(
    date_time: &DateTime<Tz>,
    converter: &Converter,
) -> Timestamp {
    converter.from_dt(date_time)
}

/// 以 `UNIX_SECONDS` 將時間戳轉換為時間
pub fn to_date_time(timestamp: Timestamp) -> ConversionResult<DateTime<Utc>> {
    to_date_time_with(timestamp, &UNIX_SECONDS)
}

pub fn to_date_time_with(
    timestamp: Timestamp,
    converter: &Converter,
) -> ConversionResult<DateTime<Utc>> {
    converter.to_dt(timestamp)
}

/// 當前時間的 UNIX 秒數
pub fn current() -> Timestamp {
    current_with(&UNIX_SECONDS)
}

/// 當前時間在指定轉換器下的時間戳
pub fn current_with(converter: &Converter) -> Timestamp {
    converter.from_dt(&now_utc())
}
