//! Public high-level API.
//!
//! - [`Colouriser`]: builder that runs inversion and quantisation together
//! - [`DitherError`]: unified error type for `?` propagation

mod builder;
mod error;

pub use builder::Colouriser;
pub use error::DitherError;
