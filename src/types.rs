//! Plain value types shared by every shape.

use glam::DVec2;

/// A point in document coordinates.
///
/// Coordinates are written out with `f64`'s `Display`, i.e. the shortest
/// decimal that parses back to the same value and never in exponent form.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn default_is_origin() {
        assert_eq!(Point::default(), Point::ORIGIN);
    }

    #[test]
    fn conversions() {
        assert_eq!(Point::from((1.5, -2.0)), Point::new(1.5, -2.0));
        assert_eq!(Point::from(dvec2(3.0, 4.0)), Point::new(3.0, 4.0));

        let v: DVec2 = Point::new(7.0, 8.0).into();
        assert_eq!(v, dvec2(7.0, 8.0));
    }
}
