use std::ops::Range;

/// ATX heading markers: `#` through `######`.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading text if `line` starts with an ATX marker.
    ///
    /// The marker, the whitespace after it and an optional closing run of
    /// `#` (preceded by whitespace) are removed.
    pub fn strip(line: &str) -> Option<&str> {
        Self::bounds(line).map(|r| &line[r])
    }

    /// Byte range of the heading text within `line`, as [`strip`](Self::strip) returns it.
    pub fn bounds(line: &str) -> Option<Range<usize>> {
        let indent = line.len() - line.trim_start_matches(' ').len();
        if indent > 3 {
            return None;
        }
        let rest = &line[indent..];
        let level = rest.bytes().take_while(|&b| b == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let after = &rest[level..];
        if !after.starts_with([' ', '\t']) {
            return None;
        }
        let text = after.trim_start_matches([' ', '\t']);
        let start = line.len() - text.len();
        Some(start..start + Self::strip_closing(text).len())
    }

    fn strip_closing(text: &str) -> &str {
        let trimmed = text.trim_end_matches([' ', '\t']);
        let without = trimmed.trim_end_matches('#');
        if without.len() == trimmed.len() {
            return text;
        }
        if without.is_empty() {
            return "";
        }
        if without.ends_with([' ', '\t']) {
            return without.trim_end_matches([' ', '\t']);
        }
        text
    }
}
