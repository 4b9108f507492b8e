//! Luminance inversion.

use crate::color::Rgb;
use crate::output::RgbImage;

/// Invert the brightness of every pixel in place.
///
/// Each pixel is replaced by [`Rgb::luminance_inverted`]:
/// dark becomes light while each channel keeps its offset from the pixel's
/// mean, so hues survive the flip.
pub fn invert_luminance(image: &mut RgbImage) {
    for px in image.as_bytes_mut().chunks_exact_mut(3) {
        let inverted = Rgb::new(px[0], px[1], px[2]).luminance_inverted();
        px.copy_from_slice(&inverted.to_bytes());
    }
}
