//! Image buffer type.
//!
//! [`RgbImage`] is the one mutable piece of state in the pipeline: the
//! inverter and the quantiser both rewrite its bytes in place.

mod rgb_image;

pub use rgb_image::{ImageError, RgbImage};
