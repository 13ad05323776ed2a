use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

/// 時間戳的起算點，一律正規化為 UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Epoch(DateTime<Utc>);

/// UNIX 紀元 1970-01-01T00:00:00Z
pub static EPOCH_UNIX: Lazy<Epoch> = Lazy::new(|| Epoch::from_ymd(1970));

/// 西元元年 0001-01-01T00:00:00Z，.NET ticks 使用
pub static EPOCH_AD: Lazy<Epoch> = Lazy::new(|| Epoch::from_ymd(1));

impl Epoch {
    /// 以任意時區的時間建立起算點
    pub fn new<Tz: TimeZone>(date_time: DateTime<Tz>) -> Self {
        Self(date_time.with_timezone(&Utc))
    }

    fn from_ymd(year: i32) -> Self {
        Self(
            Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
                .single()
                .expect("年初午夜必定是有效的 UTC 時間"),
        )
    }

    pub fn date_time(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_well_known_epochs() {
        assert_eq!(EPOCH_UNIX.date_time().timestamp(), 0);
        assert_eq!(EPOCH_AD.date_time().timestamp(), -62_135_596_800);
    }

    #[test]
    fn test_epoch_normalized_to_utc() {
        let offset = FixedOffset::east_opt(8 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(1970, 1, 1, 8, 0, 0).unwrap();
        assert_eq!(Epoch::new(local), *EPOCH_UNIX);
    }
}
