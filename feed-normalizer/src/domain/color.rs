//! Display colour type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid colour code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour code: {reason}")]
pub struct InvalidColorCode {
    reason: &'static str,
}

/// A 6-digit RGB hex colour, as carried by GTFS `route_color`.
///
/// Stored upper-case and without a leading `#`. This type guarantees that
/// any `ColorCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use feed_normalizer::domain::ColorCode;
///
/// let red = ColorCode::parse("b80000").unwrap();
/// assert_eq!(red.as_str(), "B80000");
///
/// // Wrong length is rejected
/// assert!(ColorCode::parse("B800").is_err());
///
/// // Non-hex characters are rejected
/// assert!(ColorCode::parse("GG0000").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorCode([u8; 6]);

impl ColorCode {
    /// Parse a colour code from a string.
    ///
    /// The input must be exactly 6 ASCII hex digits, in either case.
    pub fn parse(s: &str) -> Result<Self, InvalidColorCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 6 {
            return Err(InvalidColorCode {
                reason: "must be exactly 6 characters",
            });
        }

        let mut digits = [0u8; 6];
        for (slot, &b) in digits.iter_mut().zip(bytes) {
            if !b.is_ascii_hexdigit() {
                return Err(InvalidColorCode {
                    reason: "must be hex digits 0-9, A-F",
                });
            }
            *slot = b.to_ascii_uppercase();
        }

        Ok(ColorCode(digits))
    }

    /// Build a colour code from a literal at compile time.
    ///
    /// Panics (at compile time, when used in a `const`) if the literal is
    /// not 6 hex digits.
    pub const fn from_static(s: &'static str) -> Self {
        let bytes = s.as_bytes();
        assert!(bytes.len() == 6, "colour code must be 6 characters");

        let mut digits = [0u8; 6];
        let mut i = 0;
        while i < 6 {
            assert!(bytes[i].is_ascii_hexdigit(), "colour code must be hex");
            digits[i] = bytes[i].to_ascii_uppercase();
            i += 1;
        }
        ColorCode(digits)
    }

    /// Returns the colour code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII hex digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl TryFrom<String> for ColorCode {
    type Error = InvalidColorCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ColorCode::parse(&value)
    }
}

impl From<ColorCode> for String {
    fn from(color: ColorCode) -> Self {
        color.as_str().to_string()
    }
}

impl fmt::Debug for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColorCode({})", self.as_str())
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any 6 hex digits parse, and come back upper-cased
        #[test]
        fn hex_always_parses(s in "[0-9a-fA-F]{6}") {
            let color = ColorCode::parse(&s).unwrap();
            prop_assert_eq!(color.as_str(), s.to_ascii_uppercase());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[0-9A-F]{0,5}|[0-9A-F]{7,12}") {
            prop_assert!(ColorCode::parse(&s).is_err());
        }
    }
}
