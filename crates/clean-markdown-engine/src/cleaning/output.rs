/// Longest run of empty prose lines kept when blank lines are collapsed.
pub const MAX_BLANK_RUN: usize = 2;

/// Append-only line buffer for one cleaning call.
///
/// Lines are joined with single `\n` separators. Empty prose lines beyond
/// [`MAX_BLANK_RUN`] in a row are dropped unless blank lines are preserved;
/// verbatim (code) lines are never dropped and reset the run.
pub struct OutputBuffer {
    buf: String,
    lines: usize,
    blank_run: usize,
    preserve_blank_lines: bool,
}

impl OutputBuffer {
    pub fn new(capacity: usize, preserve_blank_lines: bool) -> Self {
        Self {
            buf: String::with_capacity(capacity),
            lines: 0,
            blank_run: 0,
            preserve_blank_lines,
        }
    }

    pub fn push_prose(&mut self, line: &str) {
        if line.trim().is_empty() {
            self.blank_run += 1;
            if !self.preserve_blank_lines && self.blank_run > MAX_BLANK_RUN {
                return;
            }
        } else {
            self.blank_run = 0;
        }
        self.push_line(line);
    }

    pub fn push_verbatim(&mut self, line: &str) {
        self.blank_run = 0;
        self.push_line(line);
    }

    fn push_line(&mut self, line: &str) {
        if self.lines > 0 {
            self.buf.push('\n');
        }
        self.buf.push_str(line);
        self.lines += 1;
    }

    pub fn finish(self) -> String {
        self.buf
    }
}
