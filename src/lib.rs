// 模組定義
pub mod cli;
pub mod config;
pub mod converter;
pub mod domain_types;
pub mod report;
pub mod resolver;
pub mod utils;

pub use converter::{
    current, current_with, from_date_time, from_date_time_with, to_date_time, to_date_time_with,
    Converter, Timestamp, TimestampRangeError, CASSANDRA, DOT_NET_TICKS, JAVASCRIPT, UNIX_SECONDS,
};
pub use domain_types::{Epoch, Precision, EPOCH_AD, EPOCH_UNIX};
pub use resolver::{RawRequest, ResolveError, ResolvedRequest, Resolver, UsageError};
