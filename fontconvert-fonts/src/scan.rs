//! Monochrome scan conversion.
//!
//! Outlines are flattened to line segments with `kurbo`, then each
//! bitmap row is sampled at pixel centers: a pixel is set when the
//! nonzero winding number at its center is not zero. Coordinates are
//! pixels with Y pointing up; row 0 of the output is the top row.

use kurbo::{BezPath, PathEl, Point};

/// Maximum distance between a curve and its flattened polyline, in pixels.
pub const FLATTEN_TOLERANCE: f64 = 1.0 / 16.0;

/// Slack for coordinates that land a rounding error past a pixel edge.
const SNAP: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Bounding box of an outline snapped outward to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl PixelBounds {
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.x_max.abs_diff(self.x_min)
    }

    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.y_max.abs_diff(self.y_min)
    }
}

// ---------------------------------------------------------------------------
// Edges
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct Edge {
    from: Point,
    to: Point,
}

/// A flattened outline: closed polygons as a list of directed edges.
#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    edges: Vec<Edge>,
}

impl EdgeList {
    /// Flatten `path`, closing any contour left open.
    #[must_use]
    pub fn from_path(path: &BezPath, tolerance: f64) -> Self {
        let mut edges = Vec::new();
        let mut start = Point::ZERO;
        let mut last = Point::ZERO;
        let push = |edges: &mut Vec<Edge>, from: Point, to: Point| {
            if from != to {
                edges.push(Edge { from, to });
            }
        };

        kurbo::flatten(path.iter(), tolerance, |el| match el {
            PathEl::MoveTo(p) => {
                push(&mut edges, last, start);
                start = p;
                last = p;
            }
            PathEl::LineTo(p) => {
                push(&mut edges, last, p);
                last = p;
            }
            PathEl::ClosePath => {
                push(&mut edges, last, start);
                last = start;
            }
            // Flattening only yields the three variants above.
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
        });
        push(&mut edges, last, start);

        Self { edges }
    }

    /// Pixel bounds of the polygon, `None` when there are no edges.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "glyph coordinates are small pixel values"
    )]
    pub fn bounds(&self) -> Option<PixelBounds> {
        let first = self.edges.first()?.from;
        let (mut lo, mut hi) = (first, first);
        for e in &self.edges {
            for p in [e.from, e.to] {
                lo.x = lo.x.min(p.x);
                lo.y = lo.y.min(p.y);
                hi.x = hi.x.max(p.x);
                hi.y = hi.y.max(p.y);
            }
        }
        let x_min = (lo.x + SNAP).floor() as i32;
        let y_min = (lo.y + SNAP).floor() as i32;
        Some(PixelBounds {
            x_min,
            y_min,
            x_max: ((hi.x - SNAP).ceil() as i32).max(x_min),
            y_max: ((hi.y - SNAP).ceil() as i32).max(y_min),
        })
    }

    /// Render the polygon into a 1-bit bitmap covering `bounds`.
    ///
    /// Returns the row pitch in bytes and the buffer. Rows are padded to
    /// whole bytes, pixels are MSB-first.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "row and column indices are small"
    )]
    pub fn fill(&self, bounds: PixelBounds) -> (usize, Vec<u8>) {
        let width = bounds.width() as usize;
        let rows = bounds.rows() as usize;
        let pitch = width.div_ceil(8);
        let mut buffer = vec![0u8; pitch * rows];
        let mut crossings: Vec<(f64, i32)> = Vec::new();

        for (row, line) in buffer.chunks_exact_mut(pitch.max(1)).take(rows).enumerate() {
            let y = f64::from(bounds.y_max) - row as f64 - 0.5;
            self.crossings_at(y, &mut crossings);

            let mut winding = 0;
            let mut next = 0;
            for col in 0..width {
                let x = f64::from(bounds.x_min) + col as f64 + 0.5;
                while let Some(&(cx, dir)) = crossings.get(next) {
                    if cx >= x {
                        break;
                    }
                    winding += dir;
                    next += 1;
                }
                if winding != 0 {
                    line[col / 8] |= 0x80 >> (col % 8);
                }
            }
        }

        (pitch, buffer)
    }

    /// Collect the x positions where edges cross the horizontal line `y`,
    /// with +1 for upward and -1 for downward edges, sorted by x.
    fn crossings_at(&self, y: f64, out: &mut Vec<(f64, i32)>) {
        out.clear();
        for e in &self.edges {
            let (a, b) = (e.from, e.to);
            if a.y == b.y {
                continue;
            }
            let (lo, hi, dir) = if a.y < b.y {
                (a.y, b.y, 1)
            } else {
                (b.y, a.y, -1)
            };
            if y < lo || y >= hi {
                continue;
            }
            let x = a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y);
            out.push((x, dir));
        }
        out.sort_by(|l, r| l.0.total_cmp(&r.0));
    }
}
