//! Monochrome glyph rasterizer for one face at one size.

use kurbo::BezPath;
use log::debug;

use fontconvert_core::{F26Dot6, MonoBitmap, Rasterizer, RenderedGlyph};

use crate::data::FontData;
use crate::error::{FontError, RasterError};
use crate::scan::{EdgeList, FLATTEN_TOLERANCE, PixelBounds};

/// Resolution of the Adafruit 2.8" TFT, the traditional default.
pub const DEFAULT_DPI: u32 = 141;

/// Points per inch.
const POINTS_PER_INCH: f64 = 72.0;

/// Largest bitmap edge accepted from the scan converter.
pub const MAX_BITMAP_EDGE: u32 = 4096;

/// A glyph outline scaled to pixels, before scan conversion.
#[derive(Debug, Clone)]
pub struct LoadedGlyph {
    path: BezPath,
    advance: F26Dot6,
}

/// A scan-converted glyph in engine row layout.
#[derive(Debug, Clone)]
pub struct RenderedBitmap {
    bounds: Option<PixelBounds>,
    pitch: usize,
    buffer: Vec<u8>,
    advance: F26Dot6,
}

/// Rasterizes glyphs of one font at a fixed point size and resolution.
#[derive(Debug, Clone)]
pub struct MonoRasterizer {
    font: FontData,
    ppem: f64,
}

impl MonoRasterizer {
    /// Bind `font` to a point size at `dpi` dots per inch.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::InvalidSize`] if the size or resolution is zero.
    pub fn new(font: FontData, point_size: u32, dpi: u32) -> Result<Self, FontError> {
        if point_size == 0 {
            return Err(FontError::InvalidSize("point size must be positive".into()));
        }
        if dpi == 0 {
            return Err(FontError::InvalidSize("dpi must be positive".into()));
        }
        let ppem = f64::from(point_size) * f64::from(dpi) / POINTS_PER_INCH;
        debug!(
            "{point_size}pt at {dpi} dpi = {ppem:.2} px/em, {} glyphs, {} units/em",
            font.glyph_count(),
            font.units_per_em()
        );
        Ok(Self { font, ppem })
    }

    /// Pixels per em.
    #[must_use]
    pub const fn ppem(&self) -> f64 {
        self.ppem
    }

    #[must_use]
    pub const fn font(&self) -> &FontData {
        &self.font
    }
}

impl Rasterizer for MonoRasterizer {
    type Outline = LoadedGlyph;
    type Rendered = RenderedBitmap;
    type Error = RasterError;

    fn load_glyph(&mut self, code: u32) -> Result<LoadedGlyph, RasterError> {
        let ch = char::from_u32(code).ok_or(RasterError::InvalidCodePoint(code))?;
        let gid = self
            .font
            .glyph_id(ch)
            .ok_or(RasterError::MissingGlyph(code))?;

        // No outline (e.g. space) leaves the path empty.
        let path = self.font.outline(gid, self.ppem).unwrap_or_default();

        // Hinted advances land on whole pixels.
        let advance = self.font.advance_width(gid).map_or(F26Dot6::ZERO, |adv| {
            F26Dot6::from_pixels_f64(f64::from(adv) * self.font.scale(self.ppem)).round_to_pixel()
        });

        Ok(LoadedGlyph { path, advance })
    }

    fn render_mono(&mut self, glyph: LoadedGlyph) -> Result<RenderedBitmap, RasterError> {
        let edges = EdgeList::from_path(&glyph.path, FLATTEN_TOLERANCE);
        let Some(bounds) = edges.bounds() else {
            return Ok(RenderedBitmap {
                bounds: None,
                pitch: 0,
                buffer: Vec::new(),
                advance: glyph.advance,
            });
        };

        let (width, rows) = (bounds.width(), bounds.rows());
        if width > MAX_BITMAP_EDGE || rows > MAX_BITMAP_EDGE {
            return Err(RasterError::BitmapTooLarge { width, rows });
        }

        let (pitch, buffer) = edges.fill(bounds);
        Ok(RenderedBitmap {
            bounds: Some(bounds),
            pitch,
            buffer,
            advance: glyph.advance,
        })
    }

    fn extract(&mut self, rendered: RenderedBitmap) -> Result<RenderedGlyph, RasterError> {
        let Some(bounds) = rendered.bounds else {
            return Ok(RenderedGlyph {
                bitmap: MonoBitmap::empty(),
                left: 0,
                top: 0,
                advance_x: rendered.advance,
            });
        };

        let bitmap = MonoBitmap::new(
            bounds.width(),
            bounds.rows(),
            rendered.pitch,
            rendered.buffer,
        )
        .map_err(|e| RasterError::BadBitmap(e.to_string()))?;

        Ok(RenderedGlyph {
            bitmap,
            left: bounds.x_min,
            top: bounds.y_max,
            advance_x: rendered.advance,
        })
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "line heights are small pixel values"
    )]
    fn line_height(&self) -> F26Dot6 {
        let units = self.font.line_height();
        if units <= 0 {
            return F26Dot6::ZERO;
        }
        let px = (f64::from(units) * self.font.scale(self.ppem)).round();
        F26Dot6::from_pixels(px as i32)
    }
}
