//! Timestamp codec for the API's fixed date-time format.
//!
//! Lending Club sends every date as `YYYY-MM-DDTHH:MM:SS.sss±HHMM`
//! (e.g. `2015-01-22T00:00:00.000-0800`): always three fractional digits,
//! never a `Z`, always a signed four-digit offset. This is close to but not
//! RFC 3339, so `chrono`'s RFC parsers cannot be used directly.
//!
//! Parsing is strict: anything that deviates from the fixed shape fails
//! instead of being coerced. Formatting reproduces the same shape, keeping
//! the original offset, so text accepted by [`Timestamp::parse`] formats back
//! byte-for-byte.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// `chrono` format string matching the wire format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Character template of the wire format: `0` is any ASCII digit, `+` is
/// either sign, everything else must match literally.
const WIRE_TEMPLATE: &[u8; 28] = b"0000-00-00T00:00:00.000+0000";

/// Errors produced while decoding a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTimestampError {
    #[error("timestamp must be a quoted JSON string")]
    Unquoted,

    #[error("timestamp '{0}' does not match YYYY-MM-DDTHH:MM:SS.sss±HHMM")]
    Shape(String),

    #[error("timestamp '{input}' is not a valid date-time: {reason}")]
    OutOfRange { input: String, reason: String },
}

/// An instant as exchanged with the API, with its original UTC offset.
///
/// Equality and ordering compare the instant only, so two timestamps with
/// different offsets for the same moment are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    pub fn new(datetime: DateTime<FixedOffset>) -> Self {
        Self(datetime)
    }

    /// Parse the bare (unquoted) wire text.
    pub fn parse(s: &str) -> Result<Self, ParseTimestampError> {
        if !has_wire_shape(s) {
            return Err(ParseTimestampError::Shape(s.to_string()));
        }
        DateTime::parse_from_str(s, TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|e| ParseTimestampError::OutOfRange {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }

    /// Parse a raw JSON token, which must be a double-quoted string.
    pub fn parse_json(raw: &[u8]) -> Result<Self, ParseTimestampError> {
        let inner = raw
            .strip_prefix(b"\"")
            .and_then(|rest| rest.strip_suffix(b"\""))
            .ok_or(ParseTimestampError::Unquoted)?;
        let text = std::str::from_utf8(inner)
            .map_err(|_| ParseTimestampError::Shape(String::from_utf8_lossy(raw).into_owned()))?;
        Self::parse(text)
    }

    /// Render as a quoted JSON string token.
    pub fn to_json(&self) -> String {
        format!("\"{}\"", self)
    }

    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    pub fn into_inner(self) -> DateTime<FixedOffset> {
        self.0
    }

    pub fn offset(&self) -> FixedOffset {
        *self.0.offset()
    }

    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }
}

fn has_wire_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == WIRE_TEMPLATE.len()
        && bytes
            .iter()
            .zip(WIRE_TEMPLATE.iter())
            .all(|(&b, &t)| match t {
                b'0' => b.is_ascii_digit(),
                b'+' => b == b'+' || b == b'-',
                _ => b == t,
            })
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = ParseTimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Self(datetime)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(datetime.fixed_offset())
    }
}

impl From<Timestamp> for DateTime<FixedOffset> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Timestamp::parse(&s).map_err(serde::de::Error::custom)
    }
}
