//! Error types for the glyph table builder.

use std::fmt;

/// Errors produced by the converter and its data types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The result was requested before [`crate::FontConverter::convert`] ran.
    NotConverted,
    /// A rasterizer bitmap does not match its declared row layout.
    BitmapLayout(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConverted => write!(f, "font has not been converted yet"),
            Self::BitmapLayout(msg) => write!(f, "bad bitmap layout: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}

/// Convenience type alias for results using [`ConvertError`].
pub type ConvertResult<T> = Result<T, ConvertError>;
