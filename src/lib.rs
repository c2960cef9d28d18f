//! An in-memory SVG object model.
//!
//! Build shapes, hand them to a [`Document`], render the document:
//!
//! ```
//! use svgdoc::{Circle, Document, Point, Polyline, Text};
//!
//! let mut doc = Document::new();
//! doc.add(Circle::new().with_center(Point::new(20.0, 20.0)).with_radius(5.0));
//! doc.add(
//!     Polyline::new()
//!         .add_point(Point::new(0.0, 0.0))
//!         .add_point(Point::new(10.0, 0.0)),
//! );
//! doc.add(Text::new().with_data("Tom & Jerry"));
//!
//! let svg = doc.to_svg_string()?;
//! assert!(svg.contains(r#"  <circle cx="20" cy="20" r="5" />"#));
//! assert!(svg.contains(">Tom &amp; Jerry</text>"));
//! # Ok::<(), svgdoc::RenderError>(())
//! ```
//!
//! Output is one-way: nothing here parses markup back.

pub mod errors;
pub mod figures;
pub mod log;
pub mod render;
pub mod types;

use std::ops::Deref;

pub use errors::RenderError;
pub use render::{
    Circle, Document, Drawable, Object, ObjectContainer, Polyline, RenderContext, Text,
};
pub use types::Point;

/// Draw every figure, in order, into `target`
pub fn draw_picture<I, D>(drawables: I, target: &mut dyn ObjectContainer)
where
    I: IntoIterator,
    I::Item: Deref<Target = D>,
    D: Drawable + ?Sized,
{
    for drawable in drawables {
        drawable.draw(target);
    }
}
