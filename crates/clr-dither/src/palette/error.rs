//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use std::fmt;

/// Error type for parsing hex color strings.
///
/// Both variants carry the full input string so diagnostics can quote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// The hex digits after any skipped prefix are not 3 or 6 long
    InvalidLength(String),
    /// A non-hex character follows the first hex digit
    InvalidHex(String),
}

impl ParseColorError {
    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            ParseColorError::InvalidLength(input) | ParseColorError::InvalidHex(input) => input,
        }
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength(input) => {
                write!(
                    f,
                    "'{}' is not a valid hex colour (expected 3 or 6 hex digits)",
                    input
                )
            }
            ParseColorError::InvalidHex(input) => {
                write!(
                    f,
                    "'{}' is not a valid hex colour (invalid hex character)",
                    input
                )
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for palette validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No colors provided in palette
    EmptyPalette,
    /// More colors than the palette can hold
    TooManyColors {
        /// Number of colors supplied
        len: usize,
        /// Maximum accepted
        max: usize,
    },
    /// Invalid hex color string
    ParseColor(ParseColorError),
}

impl From<ParseColorError> for PaletteError {
    fn from(err: ParseColorError) -> Self {
        PaletteError::ParseColor(err)
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::TooManyColors { len, max } => {
                write!(f, "palette has {} colours, at most {} are supported", len, max)
            }
            PaletteError::ParseColor(err) => {
                write!(f, "{}", err)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}
