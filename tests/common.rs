use chrono::{DateTime, TimeDelta, TimeZone, Utc};

/// 建立帶微秒的 UTC 時間
#[allow(dead_code)]
pub fn utc(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    micros: i64,
) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .expect("測試時間必須有效")
        + TimeDelta::microseconds(micros)
}
