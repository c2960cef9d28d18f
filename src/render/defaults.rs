//! Fixed envelope markup and layout settings

/// Spaces per indentation level
pub const INDENT_STEP: usize = 2;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;
pub const SVG_OPEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#;
pub const SVG_CLOSE: &str = "</svg>";
