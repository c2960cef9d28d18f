//! Shape types for SVG rendering
//!
//! Each shape holds its own attributes and knows how to write its element.
//! Setters take `self` and hand it back, so shapes are built by chaining:
//!
//! ```
//! use svgdoc::{Circle, Point};
//!
//! let c = Circle::new().with_center(Point::new(30.0, 20.0)).with_radius(10.0);
//! assert_eq!(c.radius(), 10.0);
//! ```

use std::io;

use super::context::RenderContext;
use super::escape::Escaped;
use super::Object;
use crate::types::Point;

// ============================================================================
// Circle
// ============================================================================

/// A `<circle>` element
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            center: Point::ORIGIN,
            radius: 1.0,
        }
    }
}

impl Circle {
    /// Unit circle at the origin
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Object for Circle {
    fn render_object(&self, ctx: &mut RenderContext<'_>) -> io::Result<()> {
        write!(
            ctx.out(),
            r#"<circle cx="{}" cy="{}" r="{}" />"#,
            self.center.x, self.center.y, self.radius
        )
    }
}

// ============================================================================
// Polyline
// ============================================================================

/// A `<polyline>` element; points render in the order they were added
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for Polyline {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl Object for Polyline {
    fn render_object(&self, ctx: &mut RenderContext<'_>) -> io::Result<()> {
        let out = ctx.out();
        out.write_all(br#"<polyline points=""#)?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                out.write_all(b" ")?;
            }
            write!(out, "{},{}", p.x, p.y)?;
        }
        out.write_all(br#"" />"#)
    }
}

// ============================================================================
// Text
// ============================================================================

/// A `<text>` element.
///
/// Only `data` is escaped; the font attributes are written verbatim and are
/// left out entirely while empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    position: Point,
    offset: Point,
    font_size: u32,
    font_family: String,
    font_weight: String,
    data: String,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            offset: Point::ORIGIN,
            font_size: 1,
            font_family: String::new(),
            font_weight: String::new(),
            data: String::new(),
        }
    }
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor point (`x`/`y`)
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Shift relative to the anchor (`dx`/`dy`)
    pub fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    pub fn with_font_weight(mut self, font_weight: impl Into<String>) -> Self {
        self.font_weight = font_weight.into();
        self
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_weight(&self) -> &str {
        &self.font_weight
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

impl Object for Text {
    fn render_object(&self, ctx: &mut RenderContext<'_>) -> io::Result<()> {
        let out = ctx.out();
        write!(
            out,
            r#"<text x="{}" y="{}" dx="{}" dy="{}" font-size="{}" "#,
            self.position.x, self.position.y, self.offset.x, self.offset.y, self.font_size
        )?;
        if !self.font_family.is_empty() {
            write!(out, r#"font-family="{}" "#, self.font_family)?;
        }
        if !self.font_weight.is_empty() {
            write!(out, r#"font-weight="{}" "#, self.font_weight)?;
        }
        write!(out, ">{}</text>", Escaped(&self.data))
    }
}
