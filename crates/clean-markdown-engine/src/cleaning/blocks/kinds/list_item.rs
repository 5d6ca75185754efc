/// List item markers: bullets (`-`, `*`, `+`) and ordered markers (`1.`, `2)`).
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [u8; 3] = [b'-', b'*', b'+'];
    pub const ORDERED_DELIMITERS: [u8; 2] = [b'.', b')'];
    pub const MAX_ORDINAL_DIGITS: usize = 9;

    /// Byte offset where item content begins, if `line` starts with a list marker.
    ///
    /// Leading whitespace, the marker, the whitespace after it and a task
    /// checkbox (`[ ]`, `[x]`) are all part of the marker.
    pub fn content_start(line: &str) -> Option<usize> {
        let b = line.as_bytes();
        let mut i = b.iter().take_while(|&&c| c == b' ' || c == b'\t').count();

        if i < b.len() && Self::BULLETS.contains(&b[i]) {
            i += 1;
        } else {
            let digits = b[i..].iter().take_while(|c| c.is_ascii_digit()).count();
            if digits == 0 || digits > Self::MAX_ORDINAL_DIGITS {
                return None;
            }
            i += digits;
            if i >= b.len() || !Self::ORDERED_DELIMITERS.contains(&b[i]) {
                return None;
            }
            i += 1;
        }

        let ws = skip_whitespace(&b[i..]);
        if ws == 0 {
            return None;
        }
        i += ws;
        Some(i + Self::task_marker_len(&line[i..]))
    }

    /// Length of a leading `[ ]`/`[x]` checkbox plus its trailing whitespace.
    fn task_marker_len(rest: &str) -> usize {
        let b = rest.as_bytes();
        if b.len() < 4 || b[0] != b'[' || b[2] != b']' || !matches!(b[1], b' ' | b'x' | b'X') {
            return 0;
        }
        match skip_whitespace(&b[3..]) {
            0 => 0,
            ws => 3 + ws,
        }
    }
}

fn skip_whitespace(b: &[u8]) -> usize {
    b.iter().take_while(|&&c| c == b' ' || c == b'\t').count()
}
