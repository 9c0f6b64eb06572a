//! Glyph metrics and the finished conversion result.

use crate::range::CodeRange;

// ---------------------------------------------------------------------------
// Glyph metrics
// ---------------------------------------------------------------------------

/// Placement and bitmap location of one glyph.
///
/// Coordinates follow the GFX convention: the cursor sits on the
/// baseline and +Y points down, so `y_offset` is usually negative.
/// A glyph that failed to render is all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GlyphMetrics {
    /// Byte offset of the glyph's first pixel in the packed bitmap.
    pub bitmap_offset: usize,
    pub width: u32,
    pub height: u32,
    /// Cursor advance after drawing, in pixels.
    pub x_advance: i32,
    /// Cursor to bitmap left column.
    pub x_offset: i32,
    /// Cursor to bitmap top row.
    pub y_offset: i32,
}

impl GlyphMetrics {
    /// Number of bits this glyph occupies in the packed bitmap.
    #[must_use]
    pub const fn bit_len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether this is the all-zero record of a missing glyph.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

// ---------------------------------------------------------------------------
// Conversion result
// ---------------------------------------------------------------------------

/// Everything needed to emit a bitmap font table.
///
/// Holds one [`GlyphMetrics`] per code in `range`, in ascending code
/// order, plus the packed bitmap they point into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFont {
    pub range: CodeRange,
    pub glyphs: Vec<GlyphMetrics>,
    pub bitmap: Vec<u8>,
    /// Face line height in pixels, zero if the font did not report one.
    pub face_height: u32,
}

impl ConvertedFont {
    /// Metrics for a character code, if it is in range.
    #[must_use]
    pub fn glyph(&self, code: u32) -> Option<&GlyphMetrics> {
        self.range.index_of(code).and_then(|i| self.glyphs.get(i))
    }

    /// Line advance to emit for the font.
    ///
    /// Without a face height the font is assumed to be fixed height and
    /// the first glyph's height is used instead.
    #[must_use]
    pub fn y_advance(&self) -> u32 {
        if self.face_height != 0 {
            return self.face_height;
        }
        self.glyphs.first().map_or(0, |g| g.height)
    }

    /// Size of the packed bitmap in bytes.
    #[must_use]
    pub fn bitmap_len(&self) -> usize {
        self.bitmap.len()
    }

    /// The packed bits of one glyph: its byte-aligned slice of the bitmap.
    #[must_use]
    pub fn glyph_bytes(&self, code: u32) -> Option<&[u8]> {
        let g = self.glyph(code)?;
        let end = g.bitmap_offset + g.bit_len().div_ceil(8);
        self.bitmap.get(g.bitmap_offset..end)
    }
}
