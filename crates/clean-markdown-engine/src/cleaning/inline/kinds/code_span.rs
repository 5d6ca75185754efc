use std::collections::{HashMap, VecDeque};

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: no other inline parsing occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}

/// Every backtick run of a line, grouped by run length.
///
/// Built once per line. Lookups must come with non-decreasing `from`;
/// positions behind it are dropped, so an opener with no partner costs
/// nothing once its length has been exhausted.
pub struct TickRuns {
    by_len: HashMap<usize, VecDeque<usize>>,
}

impl TickRuns {
    pub fn new(s: &str) -> Self {
        let b = s.as_bytes();
        let mut by_len: HashMap<usize, VecDeque<usize>> = HashMap::new();
        let mut i = 0;
        while i < b.len() {
            if b[i] == CodeSpan::TICK {
                let run = b[i..].iter().take_while(|&&c| c == CodeSpan::TICK).count();
                by_len.entry(run).or_default().push_back(i);
                i += run;
            } else {
                i += 1;
            }
        }
        Self { by_len }
    }

    /// Byte index of the first run of exactly `n` backticks starting at or after `from`.
    pub fn find_close(&mut self, from: usize, n: usize) -> Option<usize> {
        let runs = self.by_len.get_mut(&n)?;
        while let Some(&pos) = runs.front() {
            if pos >= from {
                return Some(pos);
            }
            runs.pop_front();
        }
        None
    }
}
