//! 8-bit RGB color type
//!
//! All quantisation happens directly on sRGB bytes. There is no gamma
//! decoding and no perceptual color space: the channel values stored in the
//! image are the values compared against the palette.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A color as three unsigned 8-bit channels.
///
/// This is the element type of palettes and the unit the quantiser reads
/// from and writes to an [`RgbImage`](crate::RgbImage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    ///
    /// # Example
    /// ```
    /// use clr_dither::Rgb;
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(red.r, 255);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Manhattan (L¹) distance to another color.
    ///
    /// The result is at most `3 * 255 = 765`.
    ///
    /// # Example
    /// ```
    /// use clr_dither::Rgb;
    /// let grey = Rgb::new(128, 128, 128);
    /// assert_eq!(grey.manhattan(Rgb::new(255, 255, 255)), 381);
    /// assert_eq!(grey.manhattan(Rgb::new(0, 0, 0)), 384);
    /// ```
    #[inline]
    pub fn manhattan(self, other: Rgb) -> u16 {
        self.r.abs_diff(other.r) as u16
            + self.g.abs_diff(other.g) as u16
            + self.b.abs_diff(other.b) as u16
    }

    /// Signed per-channel difference `self - other`.
    ///
    /// Each component lies in `[-255, 255]`.
    #[inline]
    pub fn error_to(self, other: Rgb) -> [i16; 3] {
        [
            self.r as i16 - other.r as i16,
            self.g as i16 - other.g as i16,
            self.b as i16 - other.b as i16,
        ]
    }

    /// Invert brightness while keeping each channel's offset from the mean.
    ///
    /// With `L = (r + g + b) / 3` (integer division), every channel `c`
    /// becomes `clamp((255 - L) + (c - L), 0, 255)`. Greys map to their
    /// complement; chromatic colors keep their hue and roughly their
    /// saturation.
    ///
    /// # Example
    /// ```
    /// use clr_dither::Rgb;
    /// assert_eq!(Rgb::new(10, 20, 30).luminance_inverted(), Rgb::new(225, 235, 245));
    /// assert_eq!(Rgb::new(0, 0, 0).luminance_inverted(), Rgb::new(255, 255, 255));
    /// ```
    #[inline]
    pub fn luminance_inverted(self) -> Rgb {
        let luma = (self.r as i16 + self.g as i16 + self.b as i16) / 3;
        let flip = |c: u8| ((255 - luma) + (c as i16 - luma)).clamp(0, 255) as u8;
        Rgb::new(flip(self.r), flip(self.g), flip(self.b))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_bytes()
    }
}

impl fmt::Display for Rgb {
    /// Formats as lowercase `#rrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Leading characters that are not hex digits are skipped, so `fff`,
    /// `#fff` and `##ffffff` all parse. From the first hex digit on, the rest
    /// of the string must be exactly 3 or 6 hex digits.
    ///
    /// - 3 digits: each digit `d` expands to `d * 16 + d` (`f` -> 255)
    /// - 6 digits: successive pairs form the red, green and blue bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use clr_dither::Rgb;
    ///
    /// let white: Rgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Rgb::new(255, 255, 255));
    ///
    /// let red: Rgb = "f00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    ///
    /// assert!("zzz".parse::<Rgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let start = s
            .char_indices()
            .find(|(_, c)| c.is_ascii_hexdigit())
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        let digits = &s[start..];

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHex(s.to_string()));
        }

        // All remaining bytes are ASCII hex digits, so byte slicing is safe.
        let nibble = |i: usize| hex_value(digits.as_bytes()[i]);
        match digits.len() {
            3 => Ok(Self::new(
                nibble(0) * 17,
                nibble(1) * 17,
                nibble(2) * 17,
            )),
            6 => Ok(Self::new(
                nibble(0) * 16 + nibble(1),
                nibble(2) * 16 + nibble(3),
                nibble(4) * 16 + nibble(5),
            )),
            _ => Err(ParseColorError::InvalidLength(s.to_string())),
        }
    }
}

#[inline]
fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}
