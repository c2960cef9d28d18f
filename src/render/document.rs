//! The document: an ordered, owning list of shapes and the SVG envelope

use std::fmt;
use std::io::Write;

use super::context::RenderContext;
use super::defaults;
use super::{Object, ObjectContainer};
use crate::errors::RenderError;

/// An SVG document.
///
/// Owns every shape added to it. Shapes render in the order they were added,
/// one per line, nested one level under `<svg>`.
#[derive(Default)]
pub struct Document {
    objects: Vec<Box<dyn Object>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of an already boxed shape
    pub fn add_ptr(&mut self, obj: Box<dyn Object>) {
        self.objects.push(obj);
        crate::log::trace!(count = self.objects.len(), "object added");
    }

    /// Take ownership of a shape
    pub fn add<T: Object + 'static>(&mut self, obj: T) {
        self.add_ptr(Box::new(obj));
    }

    /// Number of shapes owned
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Write the whole document to `out`.
    ///
    /// The closing `</svg>` is not followed by a newline.
    pub fn render(&self, out: &mut dyn Write) -> Result<(), RenderError> {
        crate::log::debug!(objects = self.objects.len(), "rendering document");

        writeln!(out, "{}", defaults::XML_DECLARATION)?;
        writeln!(out, "{}", defaults::SVG_OPEN)?;

        let mut ctx = RenderContext::new(out, defaults::INDENT_STEP);
        for obj in &self.objects {
            obj.render(&mut ctx.indented())?;
        }

        ctx.out().write_all(defaults::SVG_CLOSE.as_bytes())?;
        Ok(())
    }

    /// Render into a fresh `String`
    pub fn to_svg_string(&self) -> Result<String, RenderError> {
        let mut buf = Vec::new();
        self.render(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

impl ObjectContainer for Document {
    fn add_ptr(&mut self, obj: Box<dyn Object>) {
        Document::add_ptr(self, obj);
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("objects", &self.objects.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Circle, Drawable, Polyline, Text};
    use crate::types::Point;
    use std::io;

    const HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
                          <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n";

    #[test]
    fn empty_document_is_just_the_envelope() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.to_svg_string().unwrap(), format!("{HEADER}</svg>"));
    }

    #[test]
    fn default_circle_is_indented_once() {
        let mut doc = Document::new();
        doc.add(Circle::new());
        assert_eq!(
            doc.to_svg_string().unwrap(),
            format!("{HEADER}  <circle cx=\"0\" cy=\"0\" r=\"1\" />\n</svg>")
        );
    }

    #[test]
    fn insertion_order_is_render_order() {
        let mut doc = Document::new();
        doc.add(Text::new().with_data("first"));
        doc.add_ptr(Box::new(Circle::new().with_radius(2.0)));
        doc.add(Polyline::new().add_point(Point::new(1.0, 2.0)));
        doc.add(Text::new().with_data("last"));
        assert_eq!(doc.len(), 4);

        let svg = doc.to_svg_string().unwrap();
        let body: Vec<&str> = svg.lines().skip(2).collect();
        assert_eq!(
            body,
            [
                r#"  <text x="0" y="0" dx="0" dy="0" font-size="1" >first</text>"#,
                r#"  <circle cx="0" cy="0" r="2" />"#,
                r#"  <polyline points="1,2" />"#,
                r#"  <text x="0" y="0" dx="0" dy="0" font-size="1" >last</text>"#,
                "</svg>",
            ]
        );
    }

    #[test]
    fn rendering_is_repeatable() {
        let mut doc = Document::new();
        doc.add(Circle::new().with_center(Point::new(0.1, 0.7)));
        doc.add(Text::new().with_data("<&>"));
        assert_eq!(doc.to_svg_string().unwrap(), doc.to_svg_string().unwrap());
    }

    /// A shape type defined outside this module
    struct Marker;

    impl Object for Marker {
        fn render_object(&self, ctx: &mut RenderContext<'_>) -> io::Result<()> {
            ctx.out().write_all(b"<marker />")
        }
    }

    #[test]
    fn accepts_any_object() {
        let mut doc = Document::new();
        doc.add(Marker);
        assert_eq!(
            doc.to_svg_string().unwrap(),
            format!("{HEADER}  <marker />\n</svg>")
        );
    }

    struct TwoDots;

    impl Drawable for TwoDots {
        fn draw(&self, container: &mut dyn ObjectContainer) {
            container.add(Circle::new().with_radius(0.5));
            container.add_ptr(Box::new(Circle::new().with_center(Point::new(1.0, 0.0))));
        }
    }

    #[test]
    fn drawables_fill_a_document_through_the_container() {
        let mut doc = Document::new();
        TwoDots.draw(&mut doc);
        assert_eq!(doc.len(), 2);
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_errors_propagate() {
        let doc = Document::new();
        let err = doc.render(&mut FailingSink).unwrap_err();
        match err {
            RenderError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
