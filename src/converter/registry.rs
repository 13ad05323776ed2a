//! 精度選擇器註冊表
//!
//! 兩個命名空間：
//! - 標準精度鍵 `s`、`ms`、`us`、`ns`，皆以 UNIX 紀元起算
//! - 系統別名 `unix`、`javascript`、`cassandra`、`dotnet`，各自預先配置好的轉換器

use once_cell::sync::Lazy;

use crate::converter::{Converter, CASSANDRA, DOT_NET_TICKS, JAVASCRIPT, UNIX_SECONDS};
use crate::domain_types::{Precision, EPOCH_UNIX};

/// 未指定精度時使用的選擇器
pub const DEFAULT_SELECTOR: &str = "us";

/// 所有可接受的選擇器，順序與命令行說明一致
pub const SELECTOR_KEYS: [&str; 8] = [
    "s",
    "ms",
    "us",
    "ns",
    "unix",
    "javascript",
    "cassandra",
    "dotnet",
];

/// 全局註冊表
pub static REGISTRY: Lazy<ConverterRegistry> = Lazy::new(ConverterRegistry::standard);

#[derive(Debug, Clone)]
pub struct ConverterRegistry {
    precisions: Vec<(&'static str, Converter)>,
    aliases: Vec<(&'static str, Converter)>,
}

impl ConverterRegistry {
    pub fn standard() -> Self {
        let precisions = [
            ("s", Precision::Seconds),
            ("ms", Precision::Milliseconds),
            ("us", Precision::Microseconds),
            ("ns", Precision::Nanoseconds),
        ]
        .into_iter()
        .map(|(key, precision)| (key, Converter::new(*EPOCH_UNIX, precision)))
        .collect();

        let aliases = vec![
            ("unix", UNIX_SECONDS.clone()),
            ("javascript", JAVASCRIPT.clone()),
            ("cassandra", CASSANDRA.clone()),
            ("dotnet", DOT_NET_TICKS.clone()),
        ];

        Self { precisions, aliases }
    }

    /// 依選擇器查找轉換器，標準精度鍵優先於別名
    pub fn lookup(&self, key: &str) -> Option<&Converter> {
        self.precisions
            .iter()
            .chain(self.aliases.iter())
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, converter)| converter)
    }

    /// 所有已註冊的選擇器
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.precisions
            .iter()
            .chain(self.aliases.iter())
            .map(|(key, _)| *key)
    }

    /// 詳細模式輸出的轉換器：秒、毫秒、微秒、奈秒、.NET Ticks
    pub fn verbose_fan_out(&self) -> Vec<Converter> {
        self.precisions
            .iter()
            .map(|(_, converter)| converter.clone())
            .chain(std::iter::once(DOT_NET_TICKS.clone()))
            .collect()
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
