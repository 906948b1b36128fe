//! Field codecs shared by every API payload.

pub mod money;
pub mod timestamp;

pub use money::{format_money, parse_money, MoneyParseError};
pub use timestamp::{ParseTimestampError, Timestamp, TIMESTAMP_FORMAT};
