//! imgclr - image colouriser
//!
//! Maps an image onto a user-supplied palette with error-diffusion
//! dithering. The algorithms live in the `clr-dither` crate; this crate adds
//! configuration, the image file boundary and the command-line driver.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
