//! Error diffusion quantisation.
//!
//! [`dither_with_kernel`] walks the image in raster order, replaces each
//! pixel with its nearest palette entry and pushes the quantisation error
//! forward into the buffer itself. Which neighbours receive error is decided
//! by a [`Kernel`]; [`DitherAlgorithm`] names the built-in ones.

mod error;
mod kernel;

use std::fmt;
use std::str::FromStr;

use crate::color::Rgb;
use crate::output::RgbImage;
use crate::palette::Palette;

pub use error::KernelError;
pub use kernel::*;

/// Dither algorithm selection.
///
/// Names are matched case-insensitively and must match exactly.
///
/// # Example
///
/// ```
/// use clr_dither::DitherAlgorithm;
///
/// let algo: DitherAlgorithm = "Sierra-Lite".parse().unwrap();
/// assert_eq!(algo, DitherAlgorithm::SierraLite);
/// assert_eq!(algo.name(), "sierra-lite");
///
/// assert!("floyd".parse::<DitherAlgorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DitherAlgorithm {
    /// Floyd-Steinberg error diffusion (100% propagation, 4 neighbours).
    #[default]
    FloydSteinberg,

    /// Nearest-colour mapping with no diffusion.
    None,

    /// Atkinson error diffusion (75% propagation, 6 neighbours).
    Atkinson,

    /// Jarvis-Judice-Ninke error diffusion (100% propagation, 12 neighbours).
    JarvisJudiceNinke,

    /// Burkes error diffusion (100% propagation, 7 neighbours).
    Burkes,

    /// Sierra Lite error diffusion (100% propagation, 3 neighbours).
    SierraLite,
}

impl DitherAlgorithm {
    /// Every built-in algorithm, default first.
    pub const ALL: [DitherAlgorithm; 6] = [
        DitherAlgorithm::FloydSteinberg,
        DitherAlgorithm::None,
        DitherAlgorithm::Atkinson,
        DitherAlgorithm::JarvisJudiceNinke,
        DitherAlgorithm::Burkes,
        DitherAlgorithm::SierraLite,
    ];

    /// The name used on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            DitherAlgorithm::FloydSteinberg => "floyd-steinberg",
            DitherAlgorithm::None => "none",
            DitherAlgorithm::Atkinson => "atkinson",
            DitherAlgorithm::JarvisJudiceNinke => "jjn",
            DitherAlgorithm::Burkes => "burkes",
            DitherAlgorithm::SierraLite => "sierra-lite",
        }
    }

    /// The diffusion kernel behind this algorithm.
    pub fn kernel(self) -> &'static Kernel {
        match self {
            DitherAlgorithm::FloydSteinberg => &FLOYD_STEINBERG,
            DitherAlgorithm::None => &NONE,
            DitherAlgorithm::Atkinson => &ATKINSON,
            DitherAlgorithm::JarvisJudiceNinke => &JARVIS_JUDICE_NINKE,
            DitherAlgorithm::Burkes => &BURKES,
            DitherAlgorithm::SierraLite => &SIERRA_LITE,
        }
    }
}

impl fmt::Display for DitherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DitherAlgorithm {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algo| algo.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| KernelError::Unknown(s.to_string()))
    }
}

/// Quantise `image` to `palette`, diffusing error with `kernel`.
///
/// Pixels are visited with `y` outer and `x` inner. Each pixel is read as it
/// currently stands in the buffer (so it already carries error from earlier
/// pixels), replaced by its nearest palette entry, and the signed per-channel
/// error is added to every in-bounds kernel neighbour:
///
/// ```text
/// neighbour = clamp(neighbour + floor(error * weight / divisor), 0, 255)
/// ```
///
/// Offsets that fall outside the image, on any side, are skipped and their
/// share is lost.
/// Clamping happens on every write, so error that pushes a neighbour past
/// the byte range is discarded rather than carried.
///
/// On return every pixel equals some palette entry.
pub fn dither_with_kernel(image: &mut RgbImage, palette: &Palette, kernel: &Kernel) {
    let width = image.width();
    let height = image.height();
    let divisor = kernel.divisor() as i32;
    let data = image.as_bytes_mut();

    for y in 0..height {
        for x in 0..width {
            let idx = (y * width + x) * 3;
            let current = Rgb::new(data[idx], data[idx + 1], data[idx + 2]);

            let (best, _) = palette.find_nearest(current);
            let chosen = palette.get(best);
            let error = current.error_to(chosen);

            data[idx..idx + 3].copy_from_slice(&chosen.to_bytes());

            if error == [0, 0, 0] || kernel.is_empty() {
                continue;
            }

            for &(dx, dy, weight) in kernel.entries() {
                let nx = x as i64 + dx as i64;
                let ny = y as i64 + dy as i64;
                if nx < 0 || nx >= width as i64 || ny < 0 || ny >= height as i64 {
                    continue;
                }

                let nidx = (ny as usize * width + nx as usize) * 3;
                for (c, &err) in error.iter().enumerate() {
                    let share = (err as i32 * weight as i32).div_euclid(divisor);
                    let value = data[nidx + c] as i32 + share;
                    data[nidx + c] = value.clamp(0, 255) as u8;
                }
            }
        }
    }
}
