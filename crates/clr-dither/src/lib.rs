#![allow(clippy::module_inception)]

//! clr-dither: palette quantisation with error-diffusion dithering
//!
//! Maps every pixel of an 8-bit RGB image onto a user-supplied palette,
//! diffusing the quantisation error to neighbouring pixels so that areas of
//! intermediate colour are approximated by a mix of palette entries.
//!
//! # Quick Start
//!
//! ```
//! use clr_dither::{Colouriser, DitherAlgorithm, Palette, Rgb, RgbImage};
//!
//! let palette = Palette::from_hex(&["1d1f21", "cc6666", "c5c8c6"]).unwrap();
//! let algorithm: DitherAlgorithm = "atkinson".parse().unwrap();
//!
//! let mut image = RgbImage::filled(8, 8, Rgb::new(180, 90, 90));
//! Colouriser::new(palette.clone()).algorithm(algorithm).apply(&mut image);
//!
//! assert!(image.pixels().all(|p| palette.contains(p)));
//! ```
//!
//! # Model
//!
//! - Colours are compared as raw sRGB bytes with Manhattan (L¹) distance.
//!   Ties go to the earlier palette entry.
//! - Pixels are visited in raster order. Error is written straight into the
//!   buffer, clamped to a byte on every write.
//! - Kernels only reach pixels that have not been visited yet. Error that
//!   would land outside the image is dropped.
//!
//! # Dithering Algorithms
//!
//! Six kernels are available via [`DitherAlgorithm`]: Floyd-Steinberg
//! (default), none, Atkinson, Jarvis-Judice-Ninke, Burkes and Sierra Lite.

pub mod api;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;
pub mod preprocess;


pub use api::{Colouriser, DitherError};
pub use color::Rgb;
pub use dither::{dither_with_kernel, DitherAlgorithm, Kernel, KernelError};
pub use output::{ImageError, RgbImage};
pub use palette::{Palette, PaletteError, ParseColorError, MAX_PALETTE_LEN};
pub use preprocess::invert_luminance;
