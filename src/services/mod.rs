pub mod codec;
pub mod pipeline;

pub use codec::{decode, encode};
pub use pipeline::{run, Processed};
