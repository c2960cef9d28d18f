//! Error types for document rendering
//!
//! Building and mutating shapes cannot fail. The only failures come from the
//! output sink, which are passed through untouched.

use miette::Diagnostic;
use thiserror::Error;

/// Errors that occur while rendering a document
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    /// The output sink rejected a write
    #[error(transparent)]
    #[diagnostic(code(svgdoc::render::io))]
    Io(#[from] std::io::Error),

    /// Rendered output could not be read back as UTF-8
    #[error("rendered document is not valid UTF-8")]
    #[diagnostic(code(svgdoc::render::utf8))]
    Utf8(#[from] std::string::FromUtf8Error),
}
