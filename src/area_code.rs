//! Area code validation.
//!
//! An area code is validated once, before generation starts, and is
//! immutable for the rest of the run. Only the shape is checked: exactly
//! three ASCII decimal digits. No attempt is made to match real NANP
//! assignments, so `000` is as valid as `212`.

use crate::error::{Result, WordlistError};
use std::fmt;
use std::str::FromStr;

const INVALID_AREA_CODE: &str = "Area code must be a 3-digit number.";

/// A validated 3-digit area code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AreaCode([u8; 3]);

impl AreaCode {
    /// Parse an area code, ignoring surrounding whitespace.
    ///
    /// # Example
    ///
    /// ```
    /// use phonesmith::AreaCode;
    ///
    /// let ac = AreaCode::parse(" 555\n").unwrap();
    /// assert_eq!(ac.as_str(), "555");
    /// assert!(AreaCode::parse("55a").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let bytes = s.trim().as_bytes();
        match bytes {
            [a, b, c] if bytes.iter().all(u8::is_ascii_digit) => Ok(Self([*a, *b, *c])),
            _ => Err(WordlistError::InvalidAreaCode(INVALID_AREA_CODE.to_string())),
        }
    }

    /// The three digits as raw ASCII bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for AreaCode {
    type Err = WordlistError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for AreaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(AreaCode::parse("555").unwrap().as_str(), "555");
        assert_eq!(AreaCode::parse("000").unwrap().as_str(), "000");
        assert_eq!(AreaCode::parse("  721 ").unwrap().as_str(), "721");
        assert_eq!(AreaCode::parse("212\n").unwrap().as_bytes(), b"212");
    }

    #[test]
    fn test_parse_wrong_length() {
        for input in ["", "5", "55", "5555", "   "] {
            assert!(
                matches!(
                    AreaCode::parse(input),
                    Err(WordlistError::InvalidAreaCode(_))
                ),
                "expected rejection for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_non_digit() {
        for input in ["55a", "-55", "5 5", "+12", "٣٣٣"] {
            assert!(AreaCode::parse(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_error_message() {
        let err = AreaCode::parse("12").unwrap_err();
        assert_eq!(err.to_string(), "Area code must be a 3-digit number.");
    }

    #[test]
    fn test_from_str_and_display() {
        let ac: AreaCode = "305".parse().unwrap();
        assert_eq!(ac.to_string(), "305");
        assert_eq!(format!("({})", ac), "(305)");
    }
}
