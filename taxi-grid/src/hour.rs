//! The hour-of-day query parameter.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::HourError;

/// An hour of the day in `0..=23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Hour(u8);

impl Hour {
    /// The hour loaded at startup.
    pub const MIDNIGHT: Hour = Hour(0);

    /// Last valid hour
    pub const LAST: u8 = 23;

    pub fn new(value: i64) -> Result<Self, HourError> {
        if (0..=i64::from(Self::LAST)).contains(&value) {
            Ok(Hour(value as u8))
        } else {
            Err(HourError::OutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Parses user input: surrounding whitespace is ignored, anything else must
/// be a plain integer.
impl FromStr for Hour {
    type Err = HourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| HourError::NotANumber(s.to_string()))?;
        Hour::new(value)
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_hours() {
        assert_eq!("0".parse::<Hour>(), Ok(Hour::MIDNIGHT));
        assert_eq!(" 23 ".parse::<Hour>().map(Hour::get), Ok(23));
        assert_eq!("5".parse::<Hour>().map(Hour::get), Ok(5));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!("-1".parse::<Hour>(), Err(HourError::OutOfRange(-1)));
        assert_eq!("24".parse::<Hour>(), Err(HourError::OutOfRange(24)));
    }

    #[test]
    fn test_parse_non_numeric() {
        for input in ["", "abc", "3.5", "5pm"] {
            assert_eq!(
                input.parse::<Hour>(),
                Err(HourError::NotANumber(input.to_string()))
            );
        }
    }
}
