//! In-place adjustments applied before quantisation.

mod invert;

pub use invert::invert_luminance;
