//! Palette types and utilities
//!
//! This module provides the [`Palette`] type used by the quantiser along
//! with error types for hex parsing and palette validation.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, MAX_PALETTE_LEN};
