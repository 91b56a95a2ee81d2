//! Price value object
//!
//! A non-negative monetary amount stored as integer cents and always rendered
//! with exactly two decimal digits. Parsing rounds half-up on the third
//! fractional digit, so `"4.999"` becomes `5.00`.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Non-negative price in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Price(i64);

/// Errors returned when parsing a price from its textual form
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceParseError {
    #[error("Price must be a number")]
    Invalid,

    #[error("Price must be at least 0")]
    Negative,

    #[error("Price is out of range")]
    Overflow,
}

impl Price {
    pub const ZERO: Self = Self(0);

    /// Create a price from a whole number of cents.
    ///
    /// # Errors
    /// Returns `PriceParseError::Negative` for negative amounts.
    pub fn from_cents(cents: i64) -> Result<Self, PriceParseError> {
        if cents < 0 {
            return Err(PriceParseError::Negative);
        }
        Ok(Self(cents))
    }

    /// The amount in cents.
    #[must_use]
    pub fn cents(self) -> i64 {
        self.0
    }

    /// Parse a decimal string such as `"12"`, `"12.5"`, or `"12.345"`.
    ///
    /// Fractional digits past the second are rounded half-up. Scientific
    /// notation, signs other than a single leading minus, and empty input are
    /// rejected.
    ///
    /// # Errors
    /// Returns a `PriceParseError` describing the failure.
    pub fn parse(input: &str) -> Result<Self, PriceParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PriceParseError::Invalid);
        }
        if let Some(rest) = trimmed.strip_prefix('-') {
            // "-0", "-0.00" are harmless; anything else is a negative amount
            if rest.chars().any(|c| c.is_ascii_digit() && c != '0') {
                return Err(PriceParseError::Negative);
            }
            return Self::parse_unsigned(rest);
        }
        Self::parse_unsigned(trimmed)
    }

    fn parse_unsigned(text: &str) -> Result<Self, PriceParseError> {
        let (whole, frac) = match text.split_once('.') {
            Some((w, f)) => (w, f),
            None => (text, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(PriceParseError::Invalid);
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(PriceParseError::Invalid);
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| PriceParseError::Overflow)?
        };

        let mut digits = frac.chars().map(|c| i64::from(c as u8 - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let round_up = digits.next().is_some_and(|d| d >= 5);

        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths))
            .and_then(|c| c.checked_add(i64::from(round_up)))
            .ok_or(PriceParseError::Overflow)?;

        Ok(Self(cents))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = PriceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PriceVisitor;

        impl de::Visitor<'_> for PriceVisitor {
            type Value = Price;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative decimal number or numeric string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
                Price::parse(v).map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
                Price::parse(&v.to_string()).map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
                Price::parse(&v.to_string()).map_err(E::custom)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
                if !v.is_finite() {
                    return Err(E::custom(PriceParseError::Invalid));
                }
                // Shortest round-trip formatting; never scientific for JSON-range values
                Price::parse(&v.to_string()).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(PriceVisitor)
    }
}
