//! Glyph bit-packing and metrics table builder for GFX bitmap fonts.
//!
//! This crate does not parse fonts. It drives any [`Rasterizer`] over a
//! character range and produces a [`ConvertedFont`]: a dense metrics
//! table plus one bitstream holding every glyph at one bit per pixel.

pub mod bitstream;
pub mod convert;
pub mod error;
pub mod fixed;
pub mod range;
pub mod raster;
pub mod types;

pub use bitstream::BitPacker;
pub use convert::{FontConverter, build_table};
pub use error::{ConvertError, ConvertResult};
pub use fixed::F26Dot6;
pub use range::CodeRange;
pub use raster::{EngineError, MonoBitmap, RenderStage, RenderedGlyph, Rasterizer};
pub use types::{ConvertedFont, GlyphMetrics};
