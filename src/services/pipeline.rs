use clr_dither::Colouriser;

use super::codec;
use crate::error::ClrError;
use crate::models::Settings;

/// What was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Processed {
    pub width: usize,
    pub height: usize,
}

/// Decode, optionally invert, quantise and encode.
///
/// The output file is only created once quantisation has finished.
pub fn run(settings: &Settings) -> Result<Processed, ClrError> {
    let mut image = codec::decode(&settings.input)?;

    let colouriser = Colouriser::new(settings.palette.clone())
        .algorithm(settings.algorithm)
        .invert(settings.invert);

    tracing::debug!(
        width = image.width(),
        height = image.height(),
        algorithm = %settings.algorithm,
        "Quantising"
    );
    colouriser.apply(&mut image);

    codec::encode(
        &image,
        &settings.output,
        settings.format,
        settings.jpeg_quality,
    )?;

    Ok(Processed {
        width: image.width(),
        height: image.height(),
    })
}
