//! Exact decimal codec for monetary amounts.
//!
//! Amounts travel as `rust_decimal::Decimal` and are never converted through
//! `f64`. Use as `#[serde(with = "crate::shared::money")]` on a `Decimal`
//! field, or `money::option` on an `Option<Decimal>` field.
//!
//! Decoding accepts either a JSON string (`"100.76"`) or a JSON number
//! (`100.76`). Numbers reach this module as their literal text because the
//! crate enables serde_json's `arbitrary_precision` feature. Encoding always
//! writes the canonical string form (`"100.76"`, `"100"`).

use std::fmt;

use rust_decimal::Decimal;
use serde::de::{self, MapAccess, Unexpected, Visitor};
use serde::{Deserializer, Serializer};
use thiserror::Error;

/// Map key serde_json uses to hand over a number's literal text when
/// `arbitrary_precision` is enabled.
const JSON_NUMBER_TOKEN: &str = "$serde_json::private::Number";

/// Error returned when text is not an exact decimal amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid money amount '{input}': {reason}")]
pub struct MoneyParseError {
    pub input: String,
    pub reason: String,
}

/// Parse a decimal amount without rounding.
///
/// Fails when the text is not a decimal literal or carries more precision
/// than `Decimal` can hold exactly.
pub fn parse_money(s: &str) -> Result<Decimal, MoneyParseError> {
    let fail = |reason: String| MoneyParseError {
        input: s.to_string(),
        reason,
    };

    if s.is_empty() {
        return Err(fail("empty input".to_string()));
    }
    if s.trim() != s {
        return Err(fail("surrounding whitespace".to_string()));
    }

    if s.contains(['e', 'E']) {
        Decimal::from_scientific(s).map_err(|e| fail(e.to_string()))
    } else {
        Decimal::from_str_exact(s).map_err(|e| fail(e.to_string()))
    }
}

/// Render an amount in its minimal-digit canonical form.
///
/// Trailing fractional zeros are dropped and negative zero prints as `0`.
pub fn format_money(value: &Decimal) -> String {
    value.normalize().to_string()
}

pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_money(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(MoneyVisitor)
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal amount as a JSON string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
        parse_money(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Decimal, E> {
        Decimal::try_from_i128_with_scale(v, 0).map_err(E::custom)
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Decimal, E> {
        let signed = i128::try_from(v).map_err(E::custom)?;
        self.visit_i128(signed)
    }

    // Refuse binary floats outright; only a deserializer without exact
    // number support would ever hand one over.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
        Err(E::invalid_type(Unexpected::Float(v), &self))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Decimal, A::Error>
    where
        A: MapAccess<'de>,
    {
        let key: String = map
            .next_key()?
            .ok_or_else(|| de::Error::invalid_type(Unexpected::Map, &self))?;
        if key != JSON_NUMBER_TOKEN {
            return Err(de::Error::invalid_type(Unexpected::Map, &self));
        }
        let literal: String = map.next_value()?;
        parse_money(&literal).map_err(de::Error::custom)
    }
}

/// Codec for `Option<Decimal>` fields.
///
/// Pair with `#[serde(default)]` so an absent key decodes to `None`.
pub mod option {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};

    struct Wrapped(Decimal);

    impl<'de> Deserialize<'de> for Wrapped {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            super::deserialize(deserializer).map(Wrapped)
        }
    }

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => super::serialize(v, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|w| w.0))
    }
}
