//! Error type for parsing `"R,G,B"` color keys.

use std::fmt;
use std::num::ParseIntError;

/// Error returned when a color key does not parse.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Key did not contain exactly three comma-separated channels
    ChannelCount(usize),
    /// A channel was not an integer in 0..=255
    InvalidChannel(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidChannel(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::ChannelCount(n) => {
                write!(f, "expected 3 comma-separated channels, found {}", n)
            }
            ParseColorError::InvalidChannel(err) => {
                write!(f, "invalid channel value: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidChannel(err) => Some(err),
            _ => None,
        }
    }
}
