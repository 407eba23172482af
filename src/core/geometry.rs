//! Positions, painted rectangles and their axis-aligned footprints.

use serde::{Deserialize, Serialize};

use crate::render::RasterSurface;

use super::vector::Vector;

/// Depth layer. Only objects on the same layer collide.
pub type Layer = i32;

/// Position on the surface plus depth layer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: Layer,
}

impl Point {
    pub fn new(x: f64, y: f64, z: Layer) -> Self {
        Self { x, y, z }
    }

    // Surface coordinates: y grows downward.
    pub fn up(&mut self, n: f64) { self.y -= n }
    pub fn down(&mut self, n: f64) { self.y += n }
    pub fn left(&mut self, n: f64) { self.x -= n }
    pub fn right(&mut self, n: f64) { self.x += n }
}

/// Fill and stroke colors, any CSS color string
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    pub fill: String,
    pub stroke: String,
}

impl Colors {
    pub fn new(fill: &str, stroke: &str) -> Self {
        Self { fill: fill.to_string(), stroke: stroke.to_string() }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self::new("darkslategray", "black")
    }
}

/// Axis-aligned occupancy rectangle at a point in time
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub x: f64,
    pub y: f64,
    pub right: f64,
    pub bottom: f64,
    pub z: Layer,
}

impl Footprint {
    /// Overlap on both axes. Touching edges do not overlap. Layers are not
    /// compared here; callers decide whether layers matter.
    pub fn overlaps(&self, other: &Footprint) -> bool {
        let intersects_x = if self.x < other.x {
            self.right > other.x
        } else {
            self.x < other.right
        };
        let intersects_y = if self.y < other.y {
            self.bottom > other.y
        } else {
            self.y < other.bottom
        };
        intersects_x && intersects_y
    }

    /// Same footprint shifted by (dx, dy)
    pub fn translated(&self, dx: f64, dy: f64) -> Footprint {
        Footprint {
            x: self.x + dx,
            y: self.y + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
            z: self.z,
        }
    }

    /// Fully inside `[0, width] x [0, height]`
    pub fn within(&self, width: f64, height: f64) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.right <= width && self.bottom <= height
    }
}

/// Colored rectangle in surface coordinates
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub colors: Colors,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64, z: Layer, colors: Colors) -> Self {
        Self { origin: Point::new(x, y, z), width, height, colors }
    }

    #[inline]
    pub fn x(&self) -> f64 { self.origin.x }
    #[inline]
    pub fn y(&self) -> f64 { self.origin.y }
    #[inline]
    pub fn z(&self) -> Layer { self.origin.z }
    #[inline]
    pub fn right(&self) -> f64 { self.origin.x + self.width }
    #[inline]
    pub fn bottom(&self) -> f64 { self.origin.y + self.height }

    pub fn footprint(&self) -> Footprint {
        Footprint {
            x: self.x(),
            y: self.y(),
            right: self.right(),
            bottom: self.bottom(),
            z: self.z(),
        }
    }

    pub fn overlaps(&self, other: &Rectangle) -> bool {
        self.footprint().overlaps(&other.footprint())
    }

    pub fn paint<S: RasterSurface + ?Sized>(&self, surface: &mut S) {
        surface.set_fill_style(&self.colors.fill);
        surface.fill_rect(self.x(), self.y(), self.width, self.height);
    }

    /// Erase with a one pixel margin so the stroked edge goes too.
    pub fn clear<S: RasterSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear_rect(self.x() - 1.0, self.y() - 1.0, self.width + 2.0, self.height + 2.0);
    }
}

/// Rectangle placed from a world-space vector (y up) relative to an origin
/// on the surface (y down).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderShape {
    pub rect: Rectangle,
}

impl RenderShape {
    pub fn new(width: f64, height: f64, z: Layer, colors: Colors) -> Self {
        Self { rect: Rectangle::new(0.0, 0.0, width, height, z, colors) }
    }

    pub fn width(&self) -> f64 { self.rect.width }
    pub fn height(&self) -> f64 { self.rect.height }

    pub fn position(&mut self, offset: Vector, origin: Point) {
        self.rect.origin.x = offset.x() + origin.x;
        self.rect.origin.y = -offset.y() + origin.y;
    }

    pub fn footprint(&self) -> Footprint {
        self.rect.footprint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::render::{DrawOp, RecordingSurface};

    fn fp(x: f64, y: f64, w: f64, h: f64) -> Footprint {
        Rectangle::new(x, y, w, h, 1, Colors::default()).footprint()
    }

    #[test]
    fn right_and_bottom_track_position() {
        let mut r = Rectangle::new(10.0, 20.0, 5.0, 7.0, 1, Colors::default());
        assert_eq!(r.right(), 15.0);
        assert_eq!(r.bottom(), 27.0);
        r.origin.right(3.0);
        r.origin.up(2.0);
        assert_eq!(r.right(), 18.0);
        assert_eq!(r.bottom(), 25.0);
    }

    #[test]
    fn overlap_is_symmetric() {
        let cases = [
            (fp(0.0, 0.0, 10.0, 10.0), fp(5.0, 5.0, 10.0, 10.0)),
            (fp(0.0, 0.0, 10.0, 10.0), fp(10.0, 0.0, 10.0, 10.0)),
            (fp(0.0, 0.0, 10.0, 10.0), fp(2.0, 2.0, 3.0, 3.0)),
            (fp(0.0, 0.0, 10.0, 10.0), fp(20.0, 20.0, 1.0, 1.0)),
            (fp(98.0, 50.0, 19.0, 100.0), fp(90.0, 50.0, 10.0, 10.0)),
            (fp(0.0, 0.0, 10.0, 10.0), fp(-5.0, 9.0, 6.0, 6.0)),
        ];
        for (a, b) in cases {
            assert_eq!(a.overlaps(&b), b.overlaps(&a), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        assert!(!fp(0.0, 0.0, 10.0, 10.0).overlaps(&fp(10.0, 0.0, 5.0, 5.0)));
        assert!(!fp(0.0, 0.0, 10.0, 10.0).overlaps(&fp(0.0, 10.0, 5.0, 5.0)));
        assert!(fp(0.0, 0.0, 10.0, 10.0).overlaps(&fp(9.5, 9.5, 5.0, 5.0)));
    }

    #[test]
    fn rectangles_delegate_to_footprints() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0, 1, Colors::default());
        let b = Rectangle::new(5.0, 5.0, 10.0, 10.0, 3, Colors::default());
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&Rectangle::new(0.0, 20.0, 10.0, 10.0, 1, Colors::default())));
    }

    #[test]
    fn containment_is_overlap() {
        assert!(fp(0.0, 0.0, 10.0, 10.0).overlaps(&fp(2.0, 2.0, 1.0, 1.0)));
        assert!(fp(2.0, 2.0, 1.0, 1.0).overlaps(&fp(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn render_shape_maps_world_to_surface() {
        let mut shape = RenderShape::new(8.0, 16.0, 1, Colors::default());
        shape.position(Vector::from_components(10.0, 20.0), Point::new(150.0, 75.0, 0));
        assert_abs_diff_eq!(shape.rect.x(), 160.0, epsilon = 1e-9);
        assert_abs_diff_eq!(shape.rect.y(), 55.0, epsilon = 1e-9);
        assert_abs_diff_eq!(shape.footprint().right, 168.0, epsilon = 1e-9);
        assert_abs_diff_eq!(shape.footprint().bottom, 71.0, epsilon = 1e-9);
    }

    #[test]
    fn paint_and_clear_hit_the_surface() {
        let mut surface = RecordingSurface::new(50.0, 50.0);
        let r = Rectangle::new(4.0, 5.0, 6.0, 7.0, 1, Colors::new("gold", "black"));
        r.paint(&mut surface);
        r.clear(&mut surface);
        assert_eq!(
            surface.ops(),
            &[
                DrawOp::Fill { x: 4.0, y: 5.0, width: 6.0, height: 7.0, style: "gold".into() },
                DrawOp::Clear { x: 3.0, y: 4.0, width: 8.0, height: 9.0 },
            ]
        );
    }
}
