// time_utils.rs
//
// 提供時間轉換相關的工具函數。
// 主要功能：
// 1. 以微秒解析度讀取當前 UTC 時間
// 2. 將時間差轉換為不會溢位的微秒數
// 3. 以固定格式輸出 UTC 時間
// 4. 限制可輸出的年份範圍（四位數年份）

use chrono::{DateTime, Datelike, SubsecRound, TimeDelta, Timelike, Utc};

/// 每秒的微秒數
pub const MICROS_PER_SECOND: i128 = 1_000_000;

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_MICRO: i128 = 1_000;

/// 可表示的最早年份
pub const MIN_YEAR: i32 = 1;
/// 可表示的最晚年份
pub const MAX_YEAR: i32 = 9999;

/// 時間是否落在 0001-01-01 至 9999-12-31 之間
pub fn is_supported_year<Tz: chrono::TimeZone>(date_time: &DateTime<Tz>) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&date_time.year())
}

/// 獲取當前 UTC 時間，捨去微秒以下的部分
pub fn now_utc() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// 將時間差轉換為微秒數，向負無窮取整
///
/// 使用 i128 計算，chrono 可表示的任意兩個時間點之差都不會溢位。
pub fn total_microseconds(delta: &TimeDelta) -> i128 {
    let nanos = i128::from(delta.num_seconds()) * NANOS_PER_SECOND
        + i128::from(delta.subsec_nanos());
    nanos.div_euclid(NANOS_PER_MICRO)
}

/// 輸出 `YYYY-MM-DD HH:MM:SS[.ffffff]+00:00`，微秒為零時省略小數部分
pub fn render_date_time(date_time: &DateTime<Utc>) -> String {
    if date_time.nanosecond() == 0 {
        date_time.format("%Y-%m-%d %H:%M:%S+00:00").to_string()
    } else {
        date_time.format("%Y-%m-%d %H:%M:%S%.6f+00:00").to_string()
    }
}
