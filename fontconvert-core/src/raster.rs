//! Interface to the glyph rasterization engine.
//!
//! The converter does not rasterize anything itself. It drives a
//! [`Rasterizer`] through three steps per character (load, render,
//! extract) and consumes the resulting [`MonoBitmap`].

use std::fmt;

use crate::error::ConvertError;
use crate::fixed::F26Dot6;

// ---------------------------------------------------------------------------
// Monochrome bitmap
// ---------------------------------------------------------------------------

/// A 1-bit-per-pixel bitmap in the engine's row layout.
///
/// Pixels are MSB-first within each byte. Row `y` starts at byte
/// `y * pitch`; pixel `x` of that row lives in byte `x / 8`, bit
/// `7 - x % 8`. Bytes past `width` pixels in a row are padding and are
/// never read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonoBitmap {
    width: u32,
    rows: u32,
    pitch: usize,
    buffer: Vec<u8>,
}

impl MonoBitmap {
    /// Wrap an engine buffer, checking that the layout can hold
    /// `width * rows` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::BitmapLayout`] if `pitch` is shorter than
    /// a row of `width` pixels or the buffer is shorter than
    /// `pitch * rows` bytes.
    pub fn new(width: u32, rows: u32, pitch: usize, buffer: Vec<u8>) -> Result<Self, ConvertError> {
        let row_bytes = (width as usize).div_ceil(8);
        if pitch < row_bytes {
            return Err(ConvertError::BitmapLayout(format!(
                "pitch {pitch} too small for width {width}"
            )));
        }
        let needed = pitch * rows as usize;
        if buffer.len() < needed {
            return Err(ConvertError::BitmapLayout(format!(
                "buffer has {} bytes, {rows} rows of pitch {pitch} need {needed}",
                buffer.len()
            )));
        }
        Ok(Self {
            width,
            rows,
            pitch,
            buffer,
        })
    }

    /// An empty 0×0 bitmap (e.g. the space character).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            width: 0,
            rows: 0,
            pitch: 0,
            buffer: Vec::new(),
        }
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    #[must_use]
    pub const fn pitch(&self) -> usize {
        self.pitch
    }

    /// Whether the pixel at column `x`, row `y` is set.
    ///
    /// Out-of-range coordinates read as unset.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.rows {
            return false;
        }
        let byte = self.buffer[y as usize * self.pitch + x as usize / 8];
        byte & (0x80 >> (x & 7)) != 0
    }

    /// Iterate pixels row-major, top row first, left pixel first.
    pub fn pixels(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.rows).flat_map(move |y| (0..self.width).map(move |x| self.pixel(x, y)))
    }
}

// ---------------------------------------------------------------------------
// Engine output
// ---------------------------------------------------------------------------

/// A rendered glyph together with its placement metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedGlyph {
    pub bitmap: MonoBitmap,
    /// Pixels from the pen position to the bitmap's left column.
    pub left: i32,
    /// Pixels from the baseline up to the bitmap's top row.
    pub top: i32,
    /// Horizontal pen advance.
    pub advance_x: F26Dot6,
}

/// Step of the per-glyph pipeline that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStage {
    Load,
    Render,
    Extract,
}

impl fmt::Display for RenderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => write!(f, "loading"),
            Self::Render => write!(f, "rendering"),
            Self::Extract => write!(f, "getting"),
        }
    }
}

/// An engine error with a numeric code.
///
/// The code only appears in diagnostics; the converter treats every
/// failure the same way.
pub trait EngineError: fmt::Display {
    fn code(&self) -> i32;
}

// ---------------------------------------------------------------------------
// Rasterizer
// ---------------------------------------------------------------------------

/// A glyph rasterization engine bound to one face at one size.
pub trait Rasterizer {
    /// A loaded, not yet rendered glyph.
    type Outline;
    /// A rendered glyph still in engine form.
    type Rendered;
    type Error: EngineError;

    /// Load the glyph for a character code.
    ///
    /// # Errors
    ///
    /// Fails if the face has no usable glyph for `code`.
    fn load_glyph(&mut self, code: u32) -> Result<Self::Outline, Self::Error>;

    /// Scan-convert a loaded glyph to one bit per pixel.
    ///
    /// # Errors
    ///
    /// Fails if the outline cannot be rendered.
    fn render_mono(&mut self, outline: Self::Outline) -> Result<Self::Rendered, Self::Error>;

    /// Extract the bitmap and its bearings and advance.
    ///
    /// # Errors
    ///
    /// Fails if the rendered glyph cannot be turned into a [`MonoBitmap`].
    fn extract(&mut self, rendered: Self::Rendered) -> Result<RenderedGlyph, Self::Error>;

    /// Baseline-to-baseline distance of the face, zero if unknown.
    fn line_height(&self) -> F26Dot6;
}
