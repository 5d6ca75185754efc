/// Blockquote syntax knowledge: the `>` prefix and how runs of it are stripped.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: u8 = b'>';

    /// Strips blockquote prefixes from a line, returning (depth, byte_offset).
    ///
    /// Handles various forms: `> text`, `>> nested`, `> > spaced nested`.
    ///
    /// # Returns
    /// - `depth`: Number of `>` prefixes found (0 if not a blockquote)
    /// - `byte_offset`: Index into `s` where content begins after prefixes.
    ///   Leading whitespace of a line without prefixes is not consumed.
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        Self::strip_up_to(s, u8::MAX)
    }

    /// Like [`strip_prefixes`](Self::strip_prefixes) but stops after `max_depth` prefixes.
    pub fn strip_up_to(s: &str, max_depth: u8) -> (u8, usize) {
        let b = s.as_bytes();
        let mut depth = 0u8;
        let mut content = 0usize;

        while depth < max_depth {
            let mut i = content;
            while i < b.len() && is_space(b[i]) {
                i += 1;
            }
            if i >= b.len() || b[i] != Self::PREFIX {
                break;
            }
            depth += 1;
            i += 1;
            if i < b.len() && is_space(b[i]) {
                i += 1;
            }
            content = i;
        }
        (depth, content)
    }
}

fn is_space(b: u8) -> bool {
    b == b' ' || b == b'\t'
}
