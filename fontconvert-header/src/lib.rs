//! C header emitter for Adafruit GFX bitmap fonts.
//!
//! Turns a [`ConvertedFont`] into the three declarations the GFX library
//! expects, in this order:
//!
//! - `const uint8_t <S>Bitmaps[]`: the packed glyph bitstream.
//! - `const GFXglyph <S>Glyphs[]`: one metrics record per character code.
//! - `const GFXfont <S>`: the face descriptor tying the two together.
//!
//! An optional trailer of comments estimates the flash footprint.
//!
//! The layout is byte-for-byte stable so generated headers diff cleanly
//! against ones produced by earlier tools.

pub mod symbol;

use std::io::{self, Write};

use fontconvert_core::ConvertedFont;
use fontconvert_core::range::printable;

pub use symbol::symbol_name;

/// Size of one `GFXglyph` record on the target.
pub const GLYPH_RECORD_SIZE: usize = 8;

/// Size of the `GFXfont` descriptor on a 32-bit target.
pub const FONT_RECORD_SIZE: usize = 16;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Options controlling header output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    /// Bitmap bytes per source line. Default: 12. Zero disables wrapping.
    pub bytes_per_line: usize,
    /// Place tables in flash with the `PROGMEM` qualifier. Default: true.
    pub progmem: bool,
    /// Append the size estimate comments. Default: true.
    pub size_summary: bool,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            bytes_per_line: 12,
            progmem: true,
            size_summary: true,
        }
    }
}

/// Write the complete header for `font` under the C identifier `symbol`.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn write_header<W: Write + ?Sized>(
    out: &mut W,
    font: &ConvertedFont,
    symbol: &str,
    opts: &HeaderOptions,
) -> io::Result<()> {
    write_bitmap(out, font, symbol, opts)?;
    write_glyphs(out, font, symbol, opts)?;
    write_font(out, font, symbol, opts)?;
    if opts.size_summary {
        write_summary(out, &SizeSummary::of(font))?;
    }
    Ok(())
}

/// Render the header to a string.
///
/// # Errors
///
/// Same as [`write_header`]; an in-memory buffer never fails in practice.
pub fn render_header(
    font: &ConvertedFont,
    symbol: &str,
    opts: &HeaderOptions,
) -> io::Result<String> {
    let mut buf = Vec::new();
    write_header(&mut buf, font, symbol, opts)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

// ---------------------------------------------------------------------------
// Size estimate
// ---------------------------------------------------------------------------

/// Approximate flash footprint of a generated font, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSummary {
    pub bitmap: usize,
    pub header: usize,
    pub total: usize,
}

impl SizeSummary {
    #[must_use]
    pub fn of(font: &ConvertedFont) -> Self {
        let bitmap = font.bitmap_len();
        let header = font.glyphs.len() * GLYPH_RECORD_SIZE;
        Self {
            bitmap,
            header,
            total: bitmap + header + FONT_RECORD_SIZE,
        }
    }
}

/// Kilobytes, rounded up.
const fn kbytes(n: usize) -> usize {
    n.div_ceil(1024)
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

const fn progmem(opts: &HeaderOptions) -> &'static str {
    if opts.progmem { " PROGMEM" } else { "" }
}

fn write_bitmap<W: Write + ?Sized>(
    out: &mut W,
    font: &ConvertedFont,
    symbol: &str,
    opts: &HeaderOptions,
) -> io::Result<()> {
    write!(
        out,
        "const uint8_t {symbol}Bitmaps[]{} = {{\n ",
        progmem(opts)
    )?;
    let mut tab = 0;
    for byte in &font.bitmap {
        write!(out, " 0x{byte:02X},")?;
        tab += 1;
        if tab == opts.bytes_per_line {
            write!(out, "\n ")?;
            tab = 0;
        }
    }
    writeln!(out, " }};\n")
}

fn write_glyphs<W: Write + ?Sized>(
    out: &mut W,
    font: &ConvertedFont,
    symbol: &str,
    opts: &HeaderOptions,
) -> io::Result<()> {
    writeln!(
        out,
        "const GFXglyph {symbol}Glyphs[]{} = {{",
        progmem(opts)
    )?;
    for (code, g) in font.range.iter().zip(&font.glyphs) {
        write!(
            out,
            "  {{ {:5}, {:3}, {:3}, {:3}, {:4}, {:4} }}",
            g.bitmap_offset, g.width, g.height, g.x_advance, g.x_offset, g.y_offset
        )?;
        let c = printable(code).unwrap_or('X');
        writeln!(out, ",   // 0x{code:02X} {c} ")?;
    }
    writeln!(out, "}};\n")
}

fn write_font<W: Write + ?Sized>(
    out: &mut W,
    font: &ConvertedFont,
    symbol: &str,
    opts: &HeaderOptions,
) -> io::Result<()> {
    writeln!(out, "const GFXfont {symbol}{} = {{", progmem(opts))?;
    writeln!(out, "  (uint8_t  *){symbol}Bitmaps,")?;
    writeln!(out, "  (GFXglyph *){symbol}Glyphs,")?;
    writeln!(
        out,
        "  0x{:02X}, 0x{:02X}, {} }};\n",
        font.range.first(),
        font.range.last(),
        font.y_advance()
    )
}

fn write_summary<W: Write + ?Sized>(out: &mut W, size: &SizeSummary) -> io::Result<()> {
    writeln!(
        out,
        "// Bitmap : about {} bytes ({} kBytes)",
        size.bitmap,
        kbytes(size.bitmap)
    )?;
    writeln!(
        out,
        "// Header : about {} bytes ({} kBytes)",
        size.header,
        kbytes(size.header)
    )?;
    writeln!(out, "//--------------------------------------")?;
    writeln!(
        out,
        "// total : about {} bytes ({} kBytes)",
        size.total,
        kbytes(size.total)
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
