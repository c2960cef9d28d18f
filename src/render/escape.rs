//! Markup escaping for text content

use std::fmt;

/// Displays a string with the five XML-reserved characters replaced by
/// entities. Each input character is looked at once, so inserted entities
/// are never escaped again.
///
/// ```
/// use svgdoc::render::Escaped;
///
/// assert_eq!(Escaped("a<b & c").to_string(), "a&lt;b &amp; c");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(i) = rest.find(['"', '\'', '<', '>', '&']) {
            f.write_str(&rest[..i])?;
            f.write_str(entity(rest.as_bytes()[i]))?;
            rest = &rest[i + 1..];
        }
        f.write_str(rest)
    }
}

fn entity(c: u8) -> &'static str {
    match c {
        b'"' => "&quot;",
        b'\'' => "&apos;",
        b'<' => "&lt;",
        b'>' => "&gt;",
        _ => "&amp;",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn esc(s: &str) -> String {
        Escaped(s).to_string()
    }

    #[test]
    fn every_reserved_character() {
        assert_eq!(esc(r#"a"b'c<d>e&f"#), "a&quot;b&apos;c&lt;d&gt;e&amp;f");
    }

    #[test]
    fn entities_are_not_rescanned() {
        assert_eq!(esc("&amp;"), "&amp;amp;");
        assert_eq!(esc("&&"), "&amp;&amp;");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(esc(""), "");
        assert_eq!(esc("Hello, world"), "Hello, world");
        assert_eq!(esc("Привет, мир ✓"), "Привет, мир ✓");
    }

    #[test]
    fn markup_cannot_break_out() {
        assert_eq!(
            esc("</text><script>alert('x')</script>"),
            "&lt;/text&gt;&lt;script&gt;alert(&apos;x&apos;)&lt;/script&gt;"
        );
    }

    #[test]
    fn reserved_at_edges() {
        assert_eq!(esc("<"), "&lt;");
        assert_eq!(esc("x>"), "x&gt;");
        assert_eq!(esc("'y"), "&apos;y");
    }
}
