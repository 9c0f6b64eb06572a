//! Font loading and rasterization errors.

use std::fmt;
use std::io;

use fontconvert_core::EngineError;

/// Errors that can occur when loading a font or setting up a rasterizer.
///
/// These are fatal to a conversion run.
#[derive(Debug)]
pub enum FontError {
    /// The font file could not be read.
    Io(String, io::Error),
    /// The font data could not be parsed.
    Parse(String),
    /// The requested point size or resolution is unusable.
    InvalidSize(String),
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "cannot read font {path}: {e}"),
            Self::Parse(msg) => write!(f, "font parse error: {msg}"),
            Self::InvalidSize(msg) => write!(f, "invalid size: {msg}"),
        }
    }
}

impl std::error::Error for FontError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(_, e) => Some(e),
            _ => None,
        }
    }
}

/// Errors for a single glyph. The conversion skips the glyph and goes on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// The code is not a Unicode scalar value.
    InvalidCodePoint(u32),
    /// The font has no glyph for the code.
    MissingGlyph(u32),
    /// The rendered bitmap would exceed the size limit.
    BitmapTooLarge { width: u32, rows: u32 },
    /// The rendered bitmap does not match its row layout.
    BadBitmap(String),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCodePoint(code) => write!(f, "0x{code:X} is not a valid code point"),
            Self::MissingGlyph(code) => write!(f, "no glyph for 0x{code:02X}"),
            Self::BitmapTooLarge { width, rows } => {
                write!(f, "bitmap of {width}x{rows} pixels is too large")
            }
            Self::BadBitmap(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RasterError {}

impl EngineError for RasterError {
    fn code(&self) -> i32 {
        match self {
            Self::InvalidCodePoint(_) => 1,
            Self::MissingGlyph(_) => 2,
            Self::BitmapTooLarge { .. } => 3,
            Self::BadBitmap(_) => 4,
        }
    }
}
