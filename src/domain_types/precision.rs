//! 精度定義模組 - 從 config/precisions.toml 編譯時生成
//!
//! 每個精度只攜帶一個 scale（每秒的子單位數量），
//! 截斷位數與換算全部由 scale 推導，不針對個別精度分支。

use chrono::{DateTime, SubsecRound, Utc};
use std::fmt;

// 包含由 build.rs 生成的精度宏定義
include!(concat!(env!("OUT_DIR"), "/precisions_generated.rs"));

/// 生成精度枚舉的內部宏
macro_rules! generate_precision_enum {
    ($(($variant:ident, $name:literal, $display:literal, $scale:literal)),*) => {
        /// 時間戳精度定義
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Precision {
            $(
                $variant,
            )*
        }

        impl Precision {
            /// 每秒包含的子單位數量
            pub const fn scale(&self) -> i64 {
                match self {
                    $(
                        Precision::$variant => $scale,
                    )*
                }
            }

            /// 原始名稱，例如 `DOT_NET_TICKS`
            pub fn name(&self) -> &'static str {
                match self {
                    $(
                        Precision::$variant => $name,
                    )*
                }
            }

            /// 顯示名稱（首字母大寫的原始名稱）
            pub fn display_name(&self) -> &'static str {
                match self {
                    $(
                        Precision::$variant => $display,
                    )*
                }
            }

            /// 獲取所有精度列表
            pub fn all() -> Vec<Precision> {
                vec![
                    $(
                        Precision::$variant,
                    )*
                ]
            }
        }
    };
}

precisions!(generate_precision_enum);

impl Precision {
    /// 該精度可表示的小數秒位數：1 -> 0、1_000 -> 3、10_000_000 -> 7
    pub fn subsec_digits(&self) -> u16 {
        self.scale().ilog10() as u16
    }

    /// 將時間截斷到該精度的邊界
    ///
    /// 秒與毫秒會丟棄多餘的小數位；微秒以下的精度不會改變
    /// 微秒解析度的輸入。
    pub fn truncate(&self, date_time: DateTime<Utc>) -> DateTime<Utc> {
        date_time.trunc_subsecs(self.subsec_digits())
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
