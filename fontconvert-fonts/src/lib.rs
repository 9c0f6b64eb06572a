//! Font loading and monochrome glyph rasterization for `fontconvert`.
//!
//! This crate wraps `ttf-parser` for OpenType/TrueType parsing and uses
//! `kurbo` to flatten glyph outlines before scan conversion. It provides
//! the [`fontconvert_core::Rasterizer`] that the table builder drives.

pub mod data;
pub mod error;
mod outline;
pub mod rasterizer;
pub mod scan;

pub use data::FontData;
pub use error::{FontError, RasterError};
pub use rasterizer::{DEFAULT_DPI, MonoRasterizer};
