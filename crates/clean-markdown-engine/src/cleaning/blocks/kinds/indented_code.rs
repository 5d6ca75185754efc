use std::borrow::Cow;

/// Indented code blocks: lines starting with at least [`INDENT`](Self::INDENT) columns.
pub struct IndentedCode;

impl IndentedCode {
    /// Columns of indentation that make a line code.
    pub const INDENT: usize = 4;

    /// Width in columns of the leading whitespace of `line`.
    pub fn indent_width(line: &str, tab_width: usize) -> usize {
        line.bytes()
            .map_while(|b| match b {
                b' ' => Some(1),
                b'\t' => Some(tab_width),
                _ => None,
            })
            .sum()
    }

    /// Removes the first [`INDENT`](Self::INDENT) columns from a code line.
    pub fn content(line: &str, tab_width: usize) -> Cow<'_, str> {
        Self::strip_columns(line, Self::INDENT, tab_width)
    }

    /// Removes up to `width` columns of leading whitespace.
    ///
    /// A tab that straddles the boundary is replaced by the spaces left over.
    pub fn strip_columns(line: &str, width: usize, tab_width: usize) -> Cow<'_, str> {
        let mut cols = 0usize;
        for (i, b) in line.bytes().enumerate() {
            if cols >= width {
                return Cow::Borrowed(&line[i..]);
            }
            cols += match b {
                b' ' => 1,
                b'\t' => tab_width,
                _ => return Cow::Borrowed(&line[i..]),
            };
            if cols > width {
                let pad = " ".repeat(cols - width);
                return Cow::Owned(format!("{pad}{}", &line[i + 1..]));
            }
        }
        Cow::Borrowed("")
    }
}
