//! Rendering context - output sink plus indentation state

use std::io::{self, Write};

/// Where shapes write their markup, and how far to indent it.
///
/// The indentation prefix is always `indent * indent_step` spaces. A context
/// never changes its own depth; [`RenderContext::indented`] hands out a child
/// that borrows the same sink one level deeper.
pub struct RenderContext<'a> {
    out: &'a mut dyn Write,
    indent_step: usize,
    indent: usize,
}

impl<'a> RenderContext<'a> {
    /// Top-level context (depth 0) writing to `out`
    pub fn new(out: &'a mut dyn Write, indent_step: usize) -> Self {
        Self::with_indent(out, indent_step, 0)
    }

    pub fn with_indent(out: &'a mut dyn Write, indent_step: usize, indent: usize) -> Self {
        Self {
            out,
            indent_step,
            indent,
        }
    }

    /// Current depth, in steps
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Spaces per step
    pub fn indent_step(&self) -> usize {
        self.indent_step
    }

    /// A context one level deeper sharing this sink
    pub fn indented(&mut self) -> RenderContext<'_> {
        RenderContext {
            out: &mut *self.out,
            indent_step: self.indent_step,
            indent: self.indent + 1,
        }
    }

    /// Write the indentation prefix for the current depth
    pub fn render_indent(&mut self) -> io::Result<()> {
        let width = self.indent * self.indent_step;
        write!(self.out, "{:width$}", "")
    }

    /// The underlying sink
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }
}
