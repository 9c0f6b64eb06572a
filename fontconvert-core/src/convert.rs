//! Glyph table builder.
//!
//! Walks a character range, asks the rasterizer for each glyph, packs the
//! pixels into one shared bitstream and records where each glyph landed.
//! A glyph that fails to load, render or extract is logged and left as an
//! all-zero record; the rest of the table is still built.

use log::{debug, warn};

use crate::bitstream::BitPacker;
use crate::error::{ConvertError, ConvertResult};
use crate::range::{CodeRange, printable};
use crate::raster::{EngineError, RenderStage, RenderedGlyph, Rasterizer};
use crate::types::{ConvertedFont, GlyphMetrics};

// ---------------------------------------------------------------------------
// Converter
// ---------------------------------------------------------------------------

/// Converts one face at one size over one character range.
///
/// Holding a `FontConverter` means the rasterizer is ready. The table is
/// built by [`Self::convert`]; until then [`Self::output`] reports
/// [`ConvertError::NotConverted`].
pub struct FontConverter<R> {
    rasterizer: R,
    range: CodeRange,
    output: Option<ConvertedFont>,
}

impl<R: Rasterizer> FontConverter<R> {
    #[must_use]
    pub const fn new(rasterizer: R, range: CodeRange) -> Self {
        Self {
            rasterizer,
            range,
            output: None,
        }
    }

    #[must_use]
    pub const fn is_converted(&self) -> bool {
        self.output.is_some()
    }

    /// Rasterize and pack the whole range.
    ///
    /// Runs at most once; later calls return the same result.
    pub fn convert(&mut self) -> &ConvertedFont {
        let Self {
            rasterizer,
            range,
            output,
        } = self;
        output.get_or_insert_with(|| build_table(rasterizer, *range))
    }

    /// The finished table.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::NotConverted`] if [`Self::convert`] has not
    /// run yet.
    pub fn output(&self) -> ConvertResult<&ConvertedFont> {
        self.output.as_ref().ok_or(ConvertError::NotConverted)
    }

    /// Release the rasterizer and hand over the finished table.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::NotConverted`] if [`Self::convert`] has not
    /// run yet.
    pub fn finish(self) -> ConvertResult<ConvertedFont> {
        self.output.ok_or(ConvertError::NotConverted)
    }
}

// ---------------------------------------------------------------------------
// Table construction
// ---------------------------------------------------------------------------

/// Build the metrics table and packed bitmap for `range`.
pub fn build_table<R: Rasterizer>(rasterizer: &mut R, range: CodeRange) -> ConvertedFont {
    let mut packer = BitPacker::new();
    let mut glyphs = Vec::with_capacity(range.len());
    let mut failed = 0usize;

    for code in range {
        match render_glyph(rasterizer, code) {
            Ok(glyph) => glyphs.push(pack_glyph(&mut packer, &glyph)),
            Err((stage, err)) => {
                warn!(
                    "Error {} {stage} char 0x{code:02X} '{}': {err}",
                    err.code(),
                    printable(code).unwrap_or('?')
                );
                failed += 1;
                glyphs.push(GlyphMetrics::default());
            }
        }
    }
    packer.align();

    let face_height = u32::try_from(rasterizer.line_height().to_pixels()).unwrap_or(0);
    let bitmap = packer.into_bytes();
    debug!(
        "packed {} glyphs into {} bytes, {failed} failed, face height {face_height}",
        glyphs.len(),
        bitmap.len()
    );

    ConvertedFont {
        range,
        glyphs,
        bitmap,
        face_height,
    }
}

fn render_glyph<R: Rasterizer>(
    rasterizer: &mut R,
    code: u32,
) -> Result<RenderedGlyph, (RenderStage, R::Error)> {
    let outline = rasterizer
        .load_glyph(code)
        .map_err(|e| (RenderStage::Load, e))?;
    let rendered = rasterizer
        .render_mono(outline)
        .map_err(|e| (RenderStage::Render, e))?;
    rasterizer
        .extract(rendered)
        .map_err(|e| (RenderStage::Extract, e))
}

/// Append one glyph's pixels, starting on a fresh byte.
fn pack_glyph(packer: &mut BitPacker, glyph: &RenderedGlyph) -> GlyphMetrics {
    packer.align();
    let metrics = GlyphMetrics {
        bitmap_offset: packer.offset(),
        width: glyph.bitmap.width(),
        height: glyph.bitmap.rows(),
        x_advance: glyph.advance_x.to_pixels(),
        x_offset: glyph.left,
        y_offset: 1 - glyph.top,
    };
    for on in glyph.bitmap.pixels() {
        packer.push_bit(on);
    }
    metrics
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
