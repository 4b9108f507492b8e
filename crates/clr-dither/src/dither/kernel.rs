//! Error diffusion kernel definitions.
//!
//! Each kernel lists the not-yet-visited neighbours that receive a share of
//! a pixel's quantisation error. Traversal is plain raster order, so every
//! offset has `dy > 0`, or `dy == 0` and `dx > 0`.

use super::KernelError;

/// An error diffusion kernel.
///
/// Each entry is `(dx, dy, weight)`; the neighbour at `(x + dx, y + dy)`
/// receives `error * weight / divisor` per channel.
///
/// # Error Propagation
///
/// The total error propagated is `sum(weights) / divisor`. All built-in
/// kernels propagate 100% except Atkinson, which propagates 6/8 and drops
/// the rest.
///
/// Custom kernels go through [`Kernel::new`], which rejects anything the
/// raster walk cannot honour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    ///
    /// - `dx`: horizontal offset (positive = right)
    /// - `dy`: vertical offset (never negative)
    /// - `weight`: numerator of the share, the denominator is `divisor`
    entries: &'static [(i32, i32, u8)],

    /// Common denominator of all weights.
    divisor: u8,
}

impl Kernel {
    /// Build a kernel from `(dx, dy, weight)` entries and a common divisor.
    ///
    /// # Errors
    ///
    /// - [`KernelError::ZeroDivisor`] if `divisor` is 0
    /// - [`KernelError::VisitedOffset`] if an entry points at a pixel the
    ///   raster walk has already passed (`dy < 0`, or `dy == 0` with `dx <= 0`)
    /// - [`KernelError::ExcessWeight`] if the weights add up to more than
    ///   `divisor`, which would amplify error instead of diffusing it
    ///
    /// # Example
    ///
    /// ```
    /// use clr_dither::{Kernel, KernelError};
    ///
    /// let right = Kernel::new(&[(1, 0, 1), (0, 1, 1)], 2).unwrap();
    /// assert_eq!(right.weight_sum(), 2);
    ///
    /// assert_eq!(
    ///     Kernel::new(&[(0, -1, 1)], 2),
    ///     Err(KernelError::VisitedOffset { dx: 0, dy: -1 })
    /// );
    /// ```
    pub fn new(entries: &'static [(i32, i32, u8)], divisor: u8) -> Result<Self, KernelError> {
        if divisor == 0 {
            return Err(KernelError::ZeroDivisor);
        }
        let behind = entries
            .iter()
            .find(|&&(dx, dy, _)| dy < 0 || (dy == 0 && dx <= 0));
        if let Some(&(dx, dy, _)) = behind {
            return Err(KernelError::VisitedOffset { dx, dy });
        }

        let kernel = Kernel { entries, divisor };
        let sum = kernel.weight_sum();
        if sum > divisor as u32 {
            return Err(KernelError::ExcessWeight { sum, divisor });
        }
        Ok(kernel)
    }

    /// The `(dx, dy, weight)` entries.
    #[inline]
    pub fn entries(&self) -> &'static [(i32, i32, u8)] {
        self.entries
    }

    /// Common denominator of all weights.
    #[inline]
    pub fn divisor(&self) -> u8 {
        self.divisor
    }

    /// Returns true if the kernel diffuses nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all weights, the numerator of the propagated fraction.
    pub fn weight_sum(&self) -> u32 {
        self.entries.iter().map(|&(_, _, w)| w as u32).sum()
    }
}

/// No diffusion: every pixel snaps to its nearest palette entry.
pub const NONE: Kernel = Kernel {
    entries: &[],
    divisor: 1,
};

/// Floyd-Steinberg dithering kernel.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

/// Atkinson dithering kernel.
///
/// Six neighbours at 1/8 each; the remaining 2/8 of the error is discarded.
/// The third row entry sits one column to the right of the pixel.
///
/// ```text
///        X   1   1
///    1   1   1
///            1
/// ```
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1),
        (2, 0, 1),
        (-1, 1, 1),
        (0, 1, 1),
        (1, 1, 1),
        (1, 2, 1),
    ],
    divisor: 8,
};

/// Jarvis-Judice-Ninke dithering kernel.
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
pub const JARVIS_JUDICE_NINKE: Kernel = Kernel {
    entries: &[
        (1, 0, 7),
        (2, 0, 5),
        (-2, 1, 3),
        (-1, 1, 5),
        (0, 1, 7),
        (1, 1, 5),
        (2, 1, 3),
        (-2, 2, 1),
        (-1, 2, 3),
        (0, 2, 5),
        (1, 2, 3),
        (2, 2, 1),
    ],
    divisor: 48,
};

/// Burkes dithering kernel.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
/// ```
pub const BURKES: Kernel = Kernel {
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
    ],
    divisor: 32,
};

/// Sierra Lite dithering kernel.
///
/// ```text
///    X   2
///    1   1
/// ```
pub const SIERRA_LITE: Kernel = Kernel {
    entries: &[(1, 0, 2), (-1, 1, 1), (0, 1, 1)],
    divisor: 4,
};
