use std::collections::HashMap;

use super::Escape;

/// Link and image syntax: `[text](url)`, `[text][ref]`, `![alt](url)`.
pub struct Link;

impl Link {
    pub const BANG: u8 = b'!';
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const DEST_OPEN: u8 = b'(';
    pub const DEST_CLOSE: u8 = b')';

    /// Pairs every `(` of the line with its balancing `)`, keyed by the `(` index.
    ///
    /// Built in one pass with a stack; escaped parentheses do not count.
    pub fn match_parens(s: &str) -> HashMap<usize, usize> {
        let b = s.as_bytes();
        let mut open: Vec<usize> = vec![];
        let mut pairs = HashMap::new();
        let mut i = 0;
        while i < b.len() {
            match b[i] {
                Escape::BACKSLASH => i += 2,
                Self::DEST_OPEN => {
                    open.push(i);
                    i += 1;
                }
                Self::DEST_CLOSE => {
                    if let Some(start) = open.pop() {
                        pairs.insert(start, i);
                    }
                    i += 1;
                }
                _ => i += 1,
            }
        }
        pairs
    }

    /// Finds the `]` closing a reference label whose `[` was already consumed.
    ///
    /// Labels cannot contain unescaped brackets.
    pub fn find_close_label(s: &str, from: usize) -> Option<usize> {
        let b = s.as_bytes();
        let mut i = from;
        while i < b.len() {
            match b[i] {
                Escape::BACKSLASH => i += 2,
                Self::OPEN => return None,
                Self::CLOSE => return Some(i),
                _ => i += 1,
            }
        }
        None
    }
}
