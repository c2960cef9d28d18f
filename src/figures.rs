//! Ready-made figures built from the primitive shapes.

use std::f64::consts::PI;

use glam::{DVec2, dvec2};

use crate::render::{Circle, Drawable, ObjectContainer, Polyline};
use crate::types::Point;

/// A closed triangle outline
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Triangle {
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self { p1, p2, p3 }
    }
}

impl Drawable for Triangle {
    fn draw(&self, container: &mut dyn ObjectContainer) {
        container.add(
            Polyline::new()
                .add_point(self.p1)
                .add_point(self.p2)
                .add_point(self.p3)
                .add_point(self.p1),
        );
    }
}

/// A star outline with `num_rays` points, the first ray pointing up
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub center: Point,
    pub outer_rad: f64,
    pub inner_rad: f64,
    pub num_rays: u32,
}

impl Star {
    pub fn new(center: Point, outer_rad: f64, inner_rad: f64, num_rays: u32) -> Self {
        Self {
            center,
            outer_rad,
            inner_rad,
            num_rays,
        }
    }

    /// Outer and inner vertices alternately, closed back on the first ray
    pub fn outline(&self) -> Polyline {
        let n = self.num_rays;
        if n == 0 {
            return Polyline::new();
        }
        let center = DVec2::from(self.center);
        // y grows downward, so "up" is -y
        let at = |angle: f64, rad: f64| Point::from(center + rad * dvec2(angle.sin(), -angle.cos()));
        let step = PI / f64::from(n);

        let mut outline: Polyline = (0..n)
            .flat_map(|i| {
                let angle = 2.0 * step * f64::from(i);
                [at(angle, self.outer_rad), at(angle + step, self.inner_rad)]
            })
            .collect();
        outline.extend([at(0.0, self.outer_rad)]);
        outline
    }
}

impl Drawable for Star {
    fn draw(&self, container: &mut dyn ObjectContainer) {
        container.add(self.outline());
    }
}

/// Three stacked circles, drawn bottom to top
#[derive(Debug, Clone, Copy)]
pub struct Snowman {
    pub head_center: Point,
    pub head_radius: f64,
}

impl Snowman {
    pub fn new(head_center: Point, head_radius: f64) -> Self {
        Self {
            head_center,
            head_radius,
        }
    }
}

impl Drawable for Snowman {
    fn draw(&self, container: &mut dyn ObjectContainer) {
        let Point { x, y } = self.head_center;
        let r = self.head_radius;

        container.add(
            Circle::new()
                .with_center(Point::new(x, y + 5.0 * r))
                .with_radius(2.0 * r),
        );
        container.add(
            Circle::new()
                .with_center(Point::new(x, y + 2.0 * r))
                .with_radius(1.5 * r),
        );
        container.add(Circle::new().with_center(self.head_center).with_radius(r));
    }
}
