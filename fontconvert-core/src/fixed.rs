//! 26.6 fixed-point values as used by font rasterizers.

use std::fmt;

/// Signed fixed-point number with 6 fractional bits (1/64 pixel).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct F26Dot6(pub i32);

impl F26Dot6 {
    pub const ZERO: Self = Self(0);

    /// Number of fractional bits.
    pub const SHIFT: u32 = 6;

    /// One whole pixel.
    pub const ONE: Self = Self(1 << Self::SHIFT);

    /// Whole pixels to 26.6.
    #[must_use]
    pub const fn from_pixels(px: i32) -> Self {
        Self(px << Self::SHIFT)
    }

    /// Fractional pixels to the nearest 1/64.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "glyph metrics are far below 2^25 pixels"
    )]
    pub fn from_pixels_f64(px: f64) -> Self {
        Self((px * f64::from(Self::ONE.0)).round() as i32)
    }

    /// Integer pixels, truncating toward negative infinity.
    ///
    /// This is an arithmetic shift, so `-1/64` becomes `-1`, not `0`.
    #[must_use]
    pub const fn to_pixels(self) -> i32 {
        self.0 >> Self::SHIFT
    }

    /// Round to the nearest whole pixel, staying in 26.6 units.
    #[must_use]
    pub const fn round_to_pixel(self) -> Self {
        Self((self.0 + 32) & !63)
    }
}

impl fmt::Display for F26Dot6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", f64::from(self.0) / f64::from(Self::ONE.0))
    }
}
