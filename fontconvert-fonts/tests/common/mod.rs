//! A tiny TrueType font assembled in memory.
//!
//! 1024 units per em, so at 16 px/em (12 pt at 96 dpi) one pixel is
//! exactly 64 units. Glyphs:
//!
//! | code | glyph | outline (pixels at 16 px/em) | advance |
//! |------|-------|------------------------------|---------|
//! | 0x20 | space | none                         | 4       |
//! | 0x41 | `A`   | solid box x 1..6, y -1..6     | 6       |
//! | 0x4F | `O`   | same box with a 3×3 hole      | 6       |
//! | 0x7E | `~`   | quadratic hump 16 wide, 4 high | 16      |
//!
//! Anything else (e.g. `B`) is missing from the cmap.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub const UNITS_PER_EM: u16 = 1024;
pub const ASCENDER: i16 = 768;
pub const DESCENDER: i16 = -256;

/// Point size and dpi giving 16 px/em.
pub const POINT_SIZE: u32 = 12;
pub const DPI: u32 = 96;

/// One outline point: x, y, on-curve.
type Pt = (i16, i16, bool);

struct Glyph {
    contours: Vec<Vec<Pt>>,
    advance: u16,
}

fn boxed(x0: i16, y0: i16, x1: i16, y1: i16, clockwise: bool) -> Vec<Pt> {
    if clockwise {
        vec![(x0, y0, true), (x0, y1, true), (x1, y1, true), (x1, y0, true)]
    } else {
        vec![(x0, y0, true), (x1, y0, true), (x1, y1, true), (x0, y1, true)]
    }
}

fn glyphs() -> Vec<Glyph> {
    vec![
        // .notdef
        Glyph {
            contours: vec![],
            advance: 512,
        },
        // space
        Glyph {
            contours: vec![],
            advance: 256,
        },
        // A
        Glyph {
            contours: vec![boxed(64, -64, 384, 384, true)],
            advance: 384,
        },
        // O
        Glyph {
            contours: vec![
                boxed(64, -64, 384, 384, true),
                boxed(128, 64, 320, 256, false),
            ],
            advance: 384,
        },
        // ~
        Glyph {
            contours: vec![vec![(0, 0, true), (512, 512, false), (1024, 0, true)]],
            advance: 1024,
        },
    ]
}

/// (code, glyph id) pairs, sorted by code.
const CMAP: [(u16, u16); 4] = [(0x20, 1), (0x41, 2), (0x4F, 3), (0x7E, 4)];

// ---------------------------------------------------------------------------
// Table encoding
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Buf(Vec<u8>);

impl Buf {
    fn u16(&mut self, v: u16) -> &mut Self {
        self.0.extend_from_slice(&v.to_be_bytes());
        self
    }
    fn i16(&mut self, v: i16) -> &mut Self {
        self.0.extend_from_slice(&v.to_be_bytes());
        self
    }
    fn u32(&mut self, v: u32) -> &mut Self {
        self.0.extend_from_slice(&v.to_be_bytes());
        self
    }
    fn u64(&mut self, v: u64) -> &mut Self {
        self.0.extend_from_slice(&v.to_be_bytes());
        self
    }
    fn pad4(&mut self) {
        while self.0.len() % 4 != 0 {
            self.0.push(0);
        }
    }
}

fn glyph_data(g: &Glyph) -> Vec<u8> {
    let mut b = Buf::default();
    if g.contours.is_empty() {
        return b.0;
    }
    let pts: Vec<Pt> = g.contours.iter().flatten().copied().collect();
    let x_min = pts.iter().map(|p| p.0).min().unwrap_or(0);
    let y_min = pts.iter().map(|p| p.1).min().unwrap_or(0);
    let x_max = pts.iter().map(|p| p.0).max().unwrap_or(0);
    let y_max = pts.iter().map(|p| p.1).max().unwrap_or(0);

    b.i16(i16::try_from(g.contours.len()).unwrap_or(0))
        .i16(x_min)
        .i16(y_min)
        .i16(x_max)
        .i16(y_max);
    let mut end = 0u16;
    for c in &g.contours {
        end += u16::try_from(c.len()).unwrap_or(0);
        b.u16(end - 1);
    }
    b.u16(0); // instruction length
    for p in &pts {
        // Long coordinates for both axes; only the on-curve bit varies.
        b.0.push(u8::from(p.2));
    }
    let mut prev = 0i16;
    for p in &pts {
        b.i16(p.0 - prev);
        prev = p.0;
    }
    prev = 0;
    for p in &pts {
        b.i16(p.1 - prev);
        prev = p.1;
    }
    b.pad4();
    b.0
}

fn head() -> Vec<u8> {
    let mut b = Buf::default();
    b.u32(0x0001_0000) // version
        .u32(0x0001_0000) // font revision
        .u32(0) // checksum adjustment
        .u32(0x5F0F_3CF5) // magic
        .u16(0) // flags
        .u16(UNITS_PER_EM)
        .u64(0) // created
        .u64(0) // modified
        .i16(0)
        .i16(-64)
        .i16(1024)
        .i16(512)
        .u16(0) // mac style
        .u16(8) // lowest rec ppem
        .i16(2) // direction hint
        .i16(1) // long loca offsets
        .i16(0); // glyph data format
    b.0
}

fn hhea(num_glyphs: u16) -> Vec<u8> {
    let mut b = Buf::default();
    b.u32(0x0001_0000)
        .i16(ASCENDER)
        .i16(DESCENDER)
        .i16(0) // line gap
        .u16(1024) // advance width max
        .i16(0)
        .i16(0)
        .i16(1024)
        .i16(1) // caret slope rise
        .i16(0)
        .i16(0)
        .i16(0)
        .i16(0)
        .i16(0)
        .i16(0)
        .i16(0) // metric data format
        .u16(num_glyphs);
    b.0
}

fn maxp(num_glyphs: u16) -> Vec<u8> {
    let mut b = Buf::default();
    b.u32(0x0000_5000).u16(num_glyphs);
    b.0
}

fn cmap() -> Vec<u8> {
    let mut segs: Vec<(u16, i16)> = CMAP
        .iter()
        .map(|&(code, gid)| (code, i16::from_be_bytes(gid.wrapping_sub(code).to_be_bytes())))
        .collect();
    segs.push((0xFFFF, 1));
    let seg_count = u16::try_from(segs.len()).unwrap_or(0);

    let mut b = Buf::default();
    b.u16(0).u16(1); // version, one encoding record
    b.u16(3).u16(1).u32(12); // Windows, Unicode BMP
    b.u16(4) // format
        .u16(16 + 8 * seg_count) // length
        .u16(0) // language
        .u16(seg_count * 2)
        .u16(8) // search range
        .u16(2) // entry selector
        .u16(seg_count * 2 - 8); // range shift
    for &(code, _) in &segs {
        b.u16(code);
    }
    b.u16(0); // reserved pad
    for &(code, _) in &segs {
        b.u16(code);
    }
    for &(_, delta) in &segs {
        b.i16(delta);
    }
    for _ in &segs {
        b.u16(0);
    }
    b.0
}

/// Assemble the font file.
pub fn font_bytes() -> Vec<u8> {
    let glyphs = glyphs();
    let num_glyphs = u16::try_from(glyphs.len()).unwrap_or(0);

    let mut glyf = Vec::new();
    let mut loca = Buf::default();
    let mut hmtx = Buf::default();
    for g in &glyphs {
        loca.u32(u32::try_from(glyf.len()).unwrap_or(0));
        glyf.extend(glyph_data(g));
        hmtx.u16(g.advance).i16(0);
    }
    loca.u32(u32::try_from(glyf.len()).unwrap_or(0));

    // Sorted by tag.
    let tables: [(&[u8; 4], Vec<u8>); 7] = [
        (b"cmap", cmap()),
        (b"glyf", glyf),
        (b"head", head()),
        (b"hhea", hhea(num_glyphs)),
        (b"hmtx", hmtx.0),
        (b"loca", loca.0),
        (b"maxp", maxp(num_glyphs)),
    ];

    let mut out = Buf::default();
    out.u32(0x0001_0000)
        .u16(7) // table count
        .u16(64) // search range
        .u16(2) // entry selector
        .u16(48); // range shift

    let mut offset = 12 + 16 * tables.len();
    let mut body = Buf::default();
    for (tag, data) in &tables {
        out.0.extend_from_slice(*tag);
        out.u32(0) // checksum, not verified by parsers
            .u32(u32::try_from(offset).unwrap_or(0))
            .u32(u32::try_from(data.len()).unwrap_or(0));
        body.0.extend_from_slice(data);
        body.pad4();
        offset = 12 + 16 * tables.len() + body.0.len();
    }
    out.0.extend(body.0);
    out.0
}

// ---------------------------------------------------------------------------
// Temporary files
// ---------------------------------------------------------------------------

/// A scratch directory removed on drop.
pub struct TestDir {
    pub path: PathBuf,
}

impl TestDir {
    pub fn new(tag: &str) -> Self {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let path = std::env::temp_dir().join(format!(
            "fontconvert_{tag}_{}_{}",
            std::process::id(),
            ts
        ));
        fs::create_dir_all(&path).expect("create temp test dir");
        Self { path }
    }

    /// Write the synthetic font into this directory.
    pub fn write_font(&self, name: &str) -> PathBuf {
        let path = self.path.join(name);
        fs::write(&path, font_bytes()).expect("write test font");
        path
    }

    pub fn join(&self, name: impl AsRef<Path>) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
