//! Unified error type for the clr-dither public API.
//!
//! [`DitherError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use std::fmt;

use crate::dither::KernelError;
use crate::output::ImageError;
use crate::palette::{PaletteError, ParseColorError};

/// Unified error type for the clr-dither public API.
///
/// # Example
///
/// ```
/// use clr_dither::{DitherAlgorithm, DitherError, Palette};
///
/// fn setup(hex: &[&str], algo: &str) -> Result<(Palette, DitherAlgorithm), DitherError> {
///     Ok((Palette::from_hex(hex)?, algo.parse()?))
/// }
///
/// assert!(setup(&["000", "fff"], "atkinson").is_ok());
/// assert!(setup(&["000", "fff"], "fake").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DitherError {
    /// Palette validation error (empty, too large, or parse error)
    Palette(PaletteError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
    /// Unknown dither algorithm name
    Kernel(KernelError),
    /// Raw bytes do not form a valid image
    Image(ImageError),
}

impl fmt::Display for DitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherError::Palette(err) => write!(f, "palette error: {}", err),
            DitherError::ParseColor(err) => write!(f, "color parse error: {}", err),
            DitherError::Kernel(err) => write!(f, "kernel error: {}", err),
            DitherError::Image(err) => write!(f, "image error: {}", err),
        }
    }
}

impl std::error::Error for DitherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DitherError::Palette(err) => Some(err),
            DitherError::ParseColor(err) => Some(err),
            DitherError::Kernel(err) => Some(err),
            DitherError::Image(err) => Some(err),
        }
    }
}

impl From<PaletteError> for DitherError {
    fn from(err: PaletteError) -> Self {
        DitherError::Palette(err)
    }
}

impl From<ParseColorError> for DitherError {
    fn from(err: ParseColorError) -> Self {
        DitherError::ParseColor(err)
    }
}

impl From<KernelError> for DitherError {
    fn from(err: KernelError) -> Self {
        DitherError::Kernel(err)
    }
}

impl From<ImageError> for DitherError {
    fn from(err: ImageError) -> Self {
        DitherError::Image(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_prefixes() {
        let err: DitherError = KernelError::Unknown("fake".to_string()).into();
        assert_eq!(err.to_string(), "kernel error: unknown dither algorithm 'fake'");

        let err: DitherError = PaletteError::EmptyPalette.into();
        assert!(err.to_string().starts_with("palette error: "));
    }

    #[test]
    fn test_source_is_inner_error() {
        let err: DitherError = ParseColorError::InvalidHex("#12g".to_string()).into();
        let source = err.source().unwrap();
        assert!(source.to_string().contains("#12g"));
    }
}
