use super::span::Span;

/// A reference to a single line of the document with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of the line, newline excluded.
    pub span: Span,
    /// The line text, borrowed from the document.
    pub text: &'a str,
}

/// Returns an iterator over `\n`-separated lines with their byte spans.
///
/// A document of `n` newlines yields `n + 1` lines, so a trailing newline
/// produces a final empty line and joining the lines with `\n` reproduces
/// the input. A `\r` before the newline stays part of the line.
pub fn lines_with_spans(doc: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    doc.split('\n').map(move |text| {
        let start = offset;
        offset += text.len() + 1;
        LineRef {
            span: Span {
                start,
                end: start + text.len(),
            },
            text,
        }
    })
}

/// Slices `doc` to a preview of at most `max` bytes with a "..." suffix.
///
/// Used for human-readable snapshot output. Truncation backs off to the
/// nearest char boundary.
pub fn preview(doc: &str, sp: Span, max: usize) -> String {
    let s = sp.slice(doc);
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &s[..cut])
}
