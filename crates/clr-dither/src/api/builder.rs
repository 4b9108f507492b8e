//! Colouriser builder, the primary entry point for the crate.
//!
//! [`Colouriser`] ties the optional luminance inversion and the quantiser
//! together behind a fluent builder.

use crate::dither::{dither_with_kernel, DitherAlgorithm};
use crate::output::RgbImage;
use crate::palette::Palette;
use crate::preprocess::invert_luminance;

/// Palette quantiser with error-diffusion dithering.
///
/// - Constructor requires a [`Palette`], so there is no unconfigured state
/// - Configuration methods consume and return `self`
/// - [`apply()`](Self::apply) takes `&self`, so one colouriser can process
///   any number of images
///
/// # Example
///
/// ```
/// use clr_dither::{Colouriser, DitherAlgorithm, Palette, Rgb, RgbImage};
///
/// let palette = Palette::from_hex(&["#000", "#fff"]).unwrap();
/// let colouriser = Colouriser::new(palette).algorithm(DitherAlgorithm::Atkinson);
///
/// let mut image = RgbImage::filled(4, 4, Rgb::new(128, 128, 128));
/// colouriser.apply(&mut image);
///
/// assert!(image
///     .pixels()
///     .all(|p| p == Rgb::new(0, 0, 0) || p == Rgb::new(255, 255, 255)));
/// ```
#[derive(Debug, Clone)]
pub struct Colouriser {
    palette: Palette,
    algorithm: DitherAlgorithm,
    invert: bool,
}

impl Colouriser {
    /// Create a colouriser for the given palette.
    ///
    /// Defaults to Floyd-Steinberg without inversion.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            algorithm: DitherAlgorithm::default(),
            invert: false,
        }
    }

    /// Select the diffusion algorithm.
    pub fn algorithm(mut self, algorithm: DitherAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Invert luminance before quantising.
    pub fn invert(mut self, enabled: bool) -> Self {
        self.invert = enabled;
        self
    }

    /// The palette every pixel will be mapped onto.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The configured algorithm.
    pub fn selected_algorithm(&self) -> DitherAlgorithm {
        self.algorithm
    }

    /// Whether inversion is enabled.
    pub fn inverts(&self) -> bool {
        self.invert
    }

    /// Process `image` in place.
    ///
    /// Runs [`invert_luminance`] first if enabled, then
    /// [`dither_with_kernel`] with the selected algorithm's kernel.
    pub fn apply(&self, image: &mut RgbImage) {
        if self.invert {
            invert_luminance(image);
        }
        dither_with_kernel(image, &self.palette, self.algorithm.kernel());
    }
}
