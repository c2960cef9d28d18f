//! SVG object model and markup rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Envelope markup and indentation step
//! - `context`: RenderContext carrying the sink and indentation depth
//! - `shapes`: Circle, Polyline and Text primitives
//! - `escape`: Escaping of text content
//! - `document`: Document, the owning container that renders the envelope

pub mod context;
pub mod defaults;
pub mod document;
pub mod escape;
pub mod shapes;

pub use context::RenderContext;
pub use document::Document;
pub use escape::Escaped;
pub use shapes::{Circle, Polyline, Text};

use std::io;

/// Common behavior for everything that can sit in a [`Document`].
///
/// Implementors only write their own fragment; [`Object::render`] wraps it
/// with the indentation prefix and a line terminator, so every shape line
/// in a document is laid out the same way.
pub trait Object {
    /// Write this shape's fragment (no indentation, no newline)
    fn render_object(&self, ctx: &mut RenderContext<'_>) -> io::Result<()>;

    /// Write one full line: indentation, fragment, newline
    fn render(&self, ctx: &mut RenderContext<'_>) -> io::Result<()> {
        ctx.render_indent()?;
        self.render_object(ctx)?;
        ctx.out().write_all(b"\n")
    }
}

/// Something shapes can be handed to.
///
/// Takes exclusive ownership of every shape it is given.
pub trait ObjectContainer {
    fn add_ptr(&mut self, obj: Box<dyn Object>);
}

impl dyn ObjectContainer + '_ {
    /// Box `obj` and add it; lets [`Drawable`] implementations pass shapes by value.
    pub fn add<T: Object + 'static>(&mut self, obj: T) {
        self.add_ptr(Box::new(obj));
    }
}

/// A figure that knows how to put its primitives into a container
pub trait Drawable {
    fn draw(&self, container: &mut dyn ObjectContainer);
}

impl<T: Drawable + ?Sized> Drawable for Box<T> {
    fn draw(&self, container: &mut dyn ObjectContainer) {
        (**self).draw(container);
    }
}

impl<T: Drawable + ?Sized> Drawable for &T {
    fn draw(&self, container: &mut dyn ObjectContainer) {
        (**self).draw(container);
    }
}
