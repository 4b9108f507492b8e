//! Palette struct with nearest-color matching.
//!
//! A [`Palette`] is an ordered, immutable list of target colors. Matching
//! uses Manhattan (L¹) distance over sRGB bytes; on ties the entry with the
//! lowest index wins, so palette order is significant.

use super::error::PaletteError;
use crate::color::Rgb;

/// Maximum number of entries in a [`Palette`].
pub const MAX_PALETTE_LEN: usize = 256;

/// Initial "best distance" for the nearest search. Any value above the
/// largest possible L¹ distance (765) makes the first entry the seed.
const NO_MATCH_DISTANCE: u16 = 999;

/// An ordered set of target colors.
///
/// Built once from user input and never modified. The palette is passed by
/// reference into the quantiser; its length travels with it.
///
/// # Example
///
/// ```
/// use clr_dither::{Palette, Rgb};
///
/// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// assert_eq!(palette.len(), 2);
///
/// let (idx, dist) = palette.find_nearest(Rgb::new(128, 128, 128));
/// assert_eq!(idx, 1);
/// assert_eq!(dist, 381);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from a list of colors.
    ///
    /// Duplicates are accepted; only the first of a set of equal entries can
    /// ever be selected.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `colors` is empty
    /// - [`PaletteError::TooManyColors`] if `colors` has more than
    ///   [`MAX_PALETTE_LEN`] entries
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if colors.len() > MAX_PALETTE_LEN {
            return Err(PaletteError::TooManyColors {
                len: colors.len(),
                max: MAX_PALETTE_LEN,
            });
        }

        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// Create a palette from hex strings.
    ///
    /// Each string is parsed with [`Rgb::from_str`](std::str::FromStr); the
    /// first string that fails aborts construction.
    ///
    /// # Example
    ///
    /// ```
    /// use clr_dither::{Palette, Rgb};
    ///
    /// let palette = Palette::from_hex(&["#000", "ffffff"]).unwrap();
    /// assert_eq!(palette.get(1), Rgb::new(255, 255, 255));
    ///
    /// assert!(Palette::from_hex(&["000000", "zzz"]).is_err());
    /// ```
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Result<Self, PaletteError> {
        let colors = hex
            .iter()
            .map(|s| s.as_ref().parse::<Rgb>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&colors)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Always `false`: empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    #[inline]
    pub fn get(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// All colors in palette order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Returns true if `color` is exactly one of the palette entries.
    #[inline]
    pub fn contains(&self, color: Rgb) -> bool {
        self.colors.contains(&color)
    }

    /// Find the palette entry nearest to `color`.
    ///
    /// Distance is Manhattan distance over the three channels. The first
    /// entry with the strictly smallest distance wins.
    ///
    /// Returns `(index, distance)`.
    #[inline]
    pub fn find_nearest(&self, color: Rgb) -> (usize, u16) {
        let mut best_idx = 0;
        let mut best_dist = NO_MATCH_DISTANCE;

        for (i, &entry) in self.colors.iter().enumerate() {
            let dist = color.manhattan(entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }
}
