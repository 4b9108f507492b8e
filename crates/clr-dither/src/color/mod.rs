//! Color types
//!
//! The crate works in 8-bit sRGB byte space throughout. [`Rgb`] is both the
//! palette entry type and the pixel type of [`RgbImage`](crate::RgbImage).
//!
//! # Example
//!
//! ```
//! use clr_dither::Rgb;
//!
//! let teal: Rgb = "#008080".parse().unwrap();
//! assert_eq!(teal.to_bytes(), [0, 128, 128]);
//! assert_eq!(teal.to_string(), "#008080");
//! ```

mod rgb;

pub use rgb::Rgb;
