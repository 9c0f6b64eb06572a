//! Glyph outlines as `kurbo` paths, scaled from font units to pixels.

use kurbo::{BezPath, Point};

/// Collects `ttf-parser` outline callbacks into a pixel-space [`BezPath`].
///
/// Y points up, as in the font.
#[derive(Debug, Clone)]
pub(crate) struct PathBuilder {
    path: BezPath,
    scale: f64,
}

impl PathBuilder {
    pub(crate) fn new(scale: f64) -> Self {
        Self {
            path: BezPath::new(),
            scale,
        }
    }

    pub(crate) fn finish(self) -> BezPath {
        self.path
    }

    fn pt(&self, x: f32, y: f32) -> Point {
        Point::new(f64::from(x) * self.scale, f64::from(y) * self.scale)
    }
}

impl ttf_parser::OutlineBuilder for PathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.pt(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.pt(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (c, p) = (self.pt(x1, y1), self.pt(x, y));
        self.path.quad_to(c, p);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (c1, c2, p) = (self.pt(x1, y1), self.pt(x2, y2), self.pt(x, y));
        self.path.curve_to(c1, c2, p);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::PathEl;
    use ttf_parser::OutlineBuilder;

    use super::*;

    #[test]
    fn commands_are_scaled_and_kept_in_order() {
        let mut b = PathBuilder::new(0.5);
        b.move_to(0.0, 0.0);
        b.line_to(4.0, 0.0);
        b.quad_to(4.0, 4.0, 2.0, 6.0);
        b.close();
        let els = b.finish().elements().to_vec();
        assert_eq!(els.len(), 4);
        assert!(matches!(els[1], PathEl::LineTo(p) if p == Point::new(2.0, 0.0)));
        assert!(matches!(els[2], PathEl::QuadTo(c, p)
            if c == Point::new(2.0, 2.0) && p == Point::new(1.0, 3.0)));
        assert!(matches!(els[3], PathEl::ClosePath));
    }
}
