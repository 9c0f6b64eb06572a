//! Owned font file contents, queried through `ttf-parser`.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use kurbo::BezPath;
use ttf_parser::{Face, GlyphId};

use crate::error::FontError;
use crate::outline::PathBuilder;

/// A validated font file.
///
/// Only the bytes and a few face-wide metrics are kept. A borrowed
/// `ttf_parser::Face` is rebuilt per query since parsing only reads
/// the table directory.
#[derive(Clone)]
pub struct FontData {
    bytes: Arc<[u8]>,
    units_per_em: u16,
    /// Ascender minus descender plus line gap, in font units.
    line_height: i32,
}

impl FontData {
    /// Validate `bytes` as the first face of an OpenType/TrueType font.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if `ttf-parser` rejects the data.
    pub fn from_bytes(bytes: Arc<[u8]>) -> Result<Self, FontError> {
        let (units_per_em, line_height) = {
            let face = Face::parse(&bytes, 0).map_err(|e| FontError::Parse(e.to_string()))?;
            let line_height = i32::from(face.ascender()) - i32::from(face.descender())
                + i32::from(face.line_gap());
            (face.units_per_em(), line_height)
        };
        Ok(Self {
            bytes,
            units_per_em,
            line_height,
        })
    }

    /// Load a font from disk.
    ///
    /// # Errors
    ///
    /// [`FontError::Io`] when the file cannot be read, [`FontError::Parse`]
    /// when it is not a font.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FontError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| FontError::Io(path.display().to_string(), e))?;
        Self::from_bytes(bytes.into())
    }

    fn face(&self) -> Face<'_> {
        #[expect(clippy::expect_used, reason = "parsed successfully in from_bytes")]
        Face::parse(&self.bytes, 0).expect("font was validated on load")
    }

    #[must_use]
    pub const fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Pixels per font unit at `ppem` pixels per em.
    #[must_use]
    pub fn scale(&self, ppem: f64) -> f64 {
        ppem / f64::from(self.units_per_em)
    }

    /// Baseline-to-baseline distance in font units.
    #[must_use]
    pub const fn line_height(&self) -> i32 {
        self.line_height
    }

    /// Glyph for `ch` through the cmap. Unmapped characters, and ones
    /// mapped to `.notdef`, give `None`.
    #[must_use]
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        match self.face().glyph_index(ch) {
            Some(GlyphId(0)) | None => None,
            Some(GlyphId(id)) => Some(id),
        }
    }

    /// Advance width in font units.
    #[must_use]
    pub fn advance_width(&self, glyph_id: u16) -> Option<u16> {
        self.face().glyph_hor_advance(GlyphId(glyph_id))
    }

    #[must_use]
    pub fn glyph_count(&self) -> u16 {
        self.face().number_of_glyphs()
    }

    /// The glyph outline in pixels at `ppem`, Y up.
    ///
    /// `None` for glyphs without contours such as the space.
    #[must_use]
    pub fn outline(&self, glyph_id: u16, ppem: f64) -> Option<BezPath> {
        let mut builder = PathBuilder::new(self.scale(ppem));
        self.face().outline_glyph(GlyphId(glyph_id), &mut builder)?;
        Some(builder.finish())
    }
}

impl fmt::Debug for FontData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontData")
            .field("len", &self.bytes.len())
            .field("units_per_em", &self.units_per_em)
            .field("line_height", &self.line_height)
            .finish_non_exhaustive()
    }
}
