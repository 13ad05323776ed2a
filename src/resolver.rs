//! 請求解析模組
//!
//! 將使用者輸入（精度選擇器、時間戳、日期時間、詳細模式）整合為
//! 單一的 `ResolvedRequest`：一個錨定時間與要輸出的轉換器列表。
//!
//! 錨定時間的優先順序：明確日期 > 明確時間戳 > 當前時間。
//! 非詳細模式下錨定時間會截斷到所選精度的邊界。

pub mod error;

pub use error::{ResolveError, ResolveResult, UsageError};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::converter::{Converter, ConverterRegistry, Timestamp, DEFAULT_SELECTOR, REGISTRY};
use crate::utils::time_utils::{now_utc, render_date_time};

/// 未經整合的使用者輸入
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRequest {
    /// 精度選擇器，缺省時使用解析器的預設值
    pub precision: Option<String>,
    pub timestamp: Option<Timestamp>,
    pub date_time: Option<DateTime<Utc>>,
    pub verbose: bool,
}

/// 解析結果，交由輸出端使用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub date_time: DateTime<Utc>,
    pub converters: Vec<Converter>,
}

/// 請求解析器
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    registry: &'a ConverterRegistry,
    default_selector: String,
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::new(&REGISTRY)
    }
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a ConverterRegistry) -> Self {
        Self {
            registry,
            default_selector: DEFAULT_SELECTOR.to_string(),
        }
    }

    /// 覆寫未指定 `-p` 時的預設選擇器
    pub fn with_default_selector(mut self, selector: impl Into<String>) -> Self {
        self.default_selector = selector.into();
        self
    }

    /// 以系統當前時間解析請求
    pub fn resolve(&self, request: &RawRequest) -> ResolveResult<ResolvedRequest> {
        self.resolve_at(request, now_utc())
    }

    /// 以指定的「當前時間」解析請求
    pub fn resolve_at(
        &self,
        request: &RawRequest,
        now: DateTime<Utc>,
    ) -> ResolveResult<ResolvedRequest> {
        if request.date_time.is_some() && request.timestamp.is_some() {
            return Err(UsageError::ConflictingInput.into());
        }

        let selector = request.precision.as_deref().unwrap_or(&self.default_selector);
        let converter = self.select(selector)?;

        let date_time = match (request.date_time, request.timestamp) {
            (Some(date_time), _) => date_time,
            (None, Some(timestamp)) => converter.to_dt(timestamp)?,
            (None, None) => now,
        };

        if request.verbose {
            debug!(date_time = %render_date_time(&date_time), "詳細模式，輸出所有精度");
            return Ok(ResolvedRequest {
                date_time,
                converters: self.registry.verbose_fan_out(),
            });
        }

        let date_time = converter.precision().truncate(date_time);
        debug!(
            date_time = %render_date_time(&date_time),
            converter = converter.name(),
            "已截斷到所選精度"
        );

        Ok(ResolvedRequest {
            date_time,
            converters: vec![converter.clone()],
        })
    }

    fn select(&self, selector: &str) -> Result<&'a Converter, UsageError> {
        let converter = self
            .registry
            .lookup(selector)
            .ok_or_else(|| UsageError::InvalidPrecisionKey(selector.to_string()))?;
        debug!(selector, converter = converter.name(), "已選擇轉換器");
        Ok(converter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_types::Precision;
    use assert_matches::assert_matches;
    use chrono::{TimeDelta, TimeZone, Timelike};
    use rstest::rstest;

    fn sample_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2018, 3, 3, 12, 1, 2).unwrap() + TimeDelta::microseconds(345_678)
    }

    fn request(precision: &str) -> RawRequest {
        RawRequest {
            precision: Some(precision.to_string()),
            ..Default::default()
        }
    }

    #[rstest]
    #[case("s", 0)]
    #[case("unix", 0)]
    #[case("ms", 345_000_000)]
    #[case("javascript", 345_000_000)]
    #[case("us", 345_678_000)]
    #[case("cassandra", 345_678_000)]
    #[case("ns", 345_678_000)]
    #[case("dotnet", 345_678_000)]
    fn test_now_truncated_to_precision(#[case] selector: &str, #[case] nanos: u32) {
        let resolved = Resolver::default().resolve_at(&request(selector), sample_now()).unwrap();
        assert_eq!(resolved.date_time.nanosecond(), nanos);
        assert_eq!(resolved.date_time.second(), 2);
        assert_eq!(resolved.converters.len(), 1);
    }

    #[test]
    fn test_default_selector_is_microseconds() {
        let resolved = Resolver::default()
            .resolve_at(&RawRequest::default(), sample_now())
            .unwrap();
        assert_eq!(resolved.date_time, sample_now());
        assert_eq!(resolved.converters[0].precision(), Precision::Microseconds);
        assert_eq!(resolved.converters[0].name(), "Microseconds");
    }

    #[test]
    fn test_configured_default_selector() {
        let resolver = Resolver::default().with_default_selector("javascript");
        let resolved = resolver.resolve_at(&RawRequest::default(), sample_now()).unwrap();
        assert_eq!(resolved.converters[0].name(), "Javascript");

        // 明確指定的 -p 優先
        let resolved = resolver.resolve_at(&request("s"), sample_now()).unwrap();
        assert_eq!(resolved.converters[0].name(), "Seconds");
    }

    #[rstest]
    #[case("s")]
    #[case("ms")]
    #[case("dotnet")]
    fn test_verbose_fan_out(#[case] selector: &str) {
        let raw = RawRequest {
            verbose: true,
            ..request(selector)
        };
        let resolved = Resolver::default().resolve_at(&raw, sample_now()).unwrap();

        // 詳細模式不截斷
        assert_eq!(resolved.date_time, sample_now());
        let names: Vec<_> = resolved.converters.iter().map(Converter::name).collect();
        assert_eq!(
            names,
            ["Seconds", "Milliseconds", "Microseconds", "Nanoseconds", ".NET Ticks"]
        );
    }

    #[test]
    fn test_explicit_date_wins_over_now() {
        let date = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
            + TimeDelta::microseconds(999_999);
        let raw = RawRequest {
            date_time: Some(date),
            ..request("ms")
        };
        let resolved = Resolver::default().resolve_at(&raw, sample_now()).unwrap();
        assert_eq!(resolved.date_time, date - TimeDelta::microseconds(999));
    }

    #[test]
    fn test_explicit_timestamp_uses_selected_converter() {
        let raw = RawRequest {
            timestamp: Some(1_520_078_400_000),
            ..request("javascript")
        };
        let resolved = Resolver::default().resolve_at(&raw, sample_now()).unwrap();
        assert_eq!(resolved.date_time, Utc.with_ymd_and_hms(2018, 3, 3, 12, 0, 0).unwrap());

        let raw = RawRequest {
            timestamp: Some(636_556_752_000_000_000),
            ..request("dotnet")
        };
        let resolved = Resolver::default().resolve_at(&raw, sample_now()).unwrap();
        assert_eq!(resolved.date_time, Utc.with_ymd_and_hms(2018, 3, 3, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_zero_timestamp_is_explicit() {
        let raw = RawRequest {
            timestamp: Some(0),
            ..request("s")
        };
        let resolved = Resolver::default().resolve_at(&raw, sample_now()).unwrap();
        assert_eq!(resolved.date_time.timestamp(), 0);
    }

    #[test]
    fn test_conflicting_inputs_rejected() {
        let raw = RawRequest {
            precision: Some("bogus".to_string()),
            timestamp: Some(1_520_078_400),
            date_time: Some(sample_now()),
            verbose: false,
        };
        let err = Resolver::default().resolve_at(&raw, sample_now()).unwrap_err();
        assert_matches!(err, ResolveError::Usage(UsageError::ConflictingInput));
        assert!(err.is_usage());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unknown_selector_rejected() {
        let err = Resolver::default()
            .resolve_at(&request("minutes"), sample_now())
            .unwrap_err();
        assert_matches!(
            err,
            ResolveError::Usage(UsageError::InvalidPrecisionKey(ref key)) if key == "minutes"
        );
    }

    #[test]
    fn test_timestamp_before_year_one_rejected_in_verbose_mode() {
        let raw = RawRequest {
            timestamp: Some(-100_000_000_000),
            verbose: true,
            ..request("s")
        };
        let err = Resolver::default().resolve_at(&raw, sample_now()).unwrap_err();
        assert_matches!(
            err,
            ResolveError::TimestampRange(ref range) if range.timestamp == -100_000_000_000
        );
    }

    #[test]
    fn test_timestamp_out_of_range() {
        let raw = RawRequest {
            timestamp: Some(1_520_078_462_345_678_000),
            ..request("s")
        };
        let err = Resolver::default().resolve_at(&raw, sample_now()).unwrap_err();
        assert_matches!(err, ResolveError::TimestampRange(_));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.to_string(),
            "Timestamp: 1520078462345678000 too large for precision: Seconds"
        );
    }
}
