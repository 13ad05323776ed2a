//! 命令行參數定義
//!
//! clap 負責在解析階段拒絕無效的精度鍵、無效的日期字面值以及同時指定 `-d` 與 `-t`，
//! 這些情況都以非零狀態結束，不會進入轉換流程。

use chrono::{DateTime, NaiveDateTime, Utc};
use clap::builder::PossibleValuesParser;
use clap::Parser;

use crate::converter::{Timestamp, SELECTOR_KEYS};
use crate::resolver::{RawRequest, UsageError};
use crate::utils::time_utils::is_supported_year;

/// `-d` 接受的日期格式
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

const YEAR_DIGITS: usize = 4;
const MAX_FRACTION_DIGITS: usize = 6;

#[derive(Debug, Parser)]
#[command(name = "tsconvert", about = "Timestamp Converter")]
pub struct Cli {
    /// Output all precisions.
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Timestamp precision. [default: us]
    #[arg(
        short = 'p',
        value_name = "PRECISION",
        value_parser = PossibleValuesParser::new(SELECTOR_KEYS)
    )]
    pub precision: Option<String>,

    /// The date and time. Example: 2018-03-03T12:00:00.000
    #[arg(
        short = 'd',
        value_name = "DATE_TIME",
        value_parser = parse_date_literal,
        conflicts_with = "timestamp"
    )]
    pub date_time: Option<DateTime<Utc>>,

    /// The timestamp value.
    #[arg(short = 't', value_name = "TIMESTAMP", allow_negative_numbers = true)]
    pub timestamp: Option<Timestamp>,
}

impl From<Cli> for RawRequest {
    fn from(cli: Cli) -> Self {
        Self {
            precision: cli.precision,
            timestamp: cli.timestamp,
            date_time: cli.date_time,
            verbose: cli.verbose,
        }
    }
}

/// 解析 `YYYY-MM-DDTHH:MM:SS.ffffff` 格式的 UTC 時間
///
/// 年份必須是不帶正負號的四位數字，且不早於 0001 年。
/// 小數部分必須有 1 到 6 位，不足 6 位時視為右側補零。
pub fn parse_date_literal(value: &str) -> Result<DateTime<Utc>, UsageError> {
    let invalid = || UsageError::InvalidDateLiteral(value.to_string());

    // chrono 的 %Y 接受任意位數與正負號
    let year = value.split('-').next().unwrap_or_default();
    if year.len() != YEAR_DIGITS || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let fraction_digits = value
        .rsplit_once('.')
        .map(|(_, fraction)| fraction.len())
        .ok_or_else(invalid)?;
    if !(1..=MAX_FRACTION_DIGITS).contains(&fraction_digits) {
        return Err(invalid());
    }

    NaiveDateTime::parse_from_str(value, DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .ok()
        .filter(is_supported_year)
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::{TimeDelta, TimeZone};
    use rstest::rstest;

    #[rstest]
    #[case("2018-03-03T12:00:00.000", 0)]
    #[case("2018-03-03T12:00:00.5", 500_000)]
    #[case("2018-03-03T12:00:00.345678", 345_678)]
    fn test_parse_date_literal(#[case] literal: &str, #[case] micros: i64) {
        let expected = Utc.with_ymd_and_hms(2018, 3, 3, 12, 0, 0).unwrap()
            + TimeDelta::microseconds(micros);
        assert_eq!(parse_date_literal(literal).unwrap(), expected);
    }

    #[test]
    fn test_parse_date_literal_year_bounds() {
        let first = parse_date_literal("0001-01-01T00:00:00.0").unwrap();
        assert_eq!(first, Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap());

        let last = parse_date_literal("9999-12-31T23:59:59.999999").unwrap();
        assert_eq!(
            last,
            Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap()
                + TimeDelta::microseconds(999_999)
        );
    }

    #[rstest]
    #[case("2018-03-03T12:00:00")]
    #[case("2018-03-03T12:00:00.")]
    #[case("2018-03-03T12:00:00.1234567")]
    #[case("2018-03-03 12:00:00.000")]
    #[case("2018-02-30T12:00:00.000")]
    #[case("yesterday")]
    #[case("18-03-03T12:00:00.000")]
    #[case("+2018-03-03T12:00:00.000")]
    #[case("-2018-03-03T12:00:00.000")]
    #[case("20180-03-03T12:00:00.000")]
    #[case("0000-01-01T00:00:00.000")]
    #[case("２０１８-03-03T12:00:00.000")]
    fn test_parse_date_literal_rejects(#[case] literal: &str) {
        assert_matches!(
            parse_date_literal(literal),
            Err(UsageError::InvalidDateLiteral(ref value)) if value == literal
        );
    }

    #[test]
    fn test_cli_into_raw_request() {
        let cli = Cli::try_parse_from(["tsconvert", "-v", "-p", "dotnet", "-t", "-5"]).unwrap();
        let raw = RawRequest::from(cli);
        assert!(raw.verbose);
        assert_eq!(raw.precision.as_deref(), Some("dotnet"));
        assert_eq!(raw.timestamp, Some(-5));
        assert_eq!(raw.date_time, None);
    }
}
