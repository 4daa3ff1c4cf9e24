//! Minimal vector primitives shared by the glyph tables.
//!
//! Coordinates live on a unit square: `(0, 0)` is the top-left corner and
//! `(1, 1)` the bottom-right. Renderers scale them to their own viewport.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Scale a unit-square point into a `size`-wide box anchored at `origin`.
    #[must_use]
    pub fn scaled(self, origin: Point, size: f32) -> Point {
        Point::new(origin.x + self.x * size, origin.y + self.y * size)
    }
}

/// A straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_maps_unit_square_into_box() {
        let p = Point::new(0.5, 1.0).scaled(Point::new(10.0, 20.0), 40.0);
        assert_eq!(p, Point::new(30.0, 60.0));
    }
}
