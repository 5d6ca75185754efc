use std::ops::Range;

use crate::cleaning::text::Span;

use super::kinds::Fence;

/// Classification of a run of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// Text handed to the inline stripper.
    Prose {
        /// Lines follow a list item; continuation indentation is list structure.
        in_list: bool,
    },
    /// A fenced code block, including its fence lines.
    FencedCode {
        fence: Fence,
        /// False when the document (or enclosing blockquote) ended first.
        closed: bool,
    },
    /// Lines indented by four or more columns.
    IndentedCode,
}

/// A contiguous run of lines sharing one [`RegionKind`].
///
/// Regions never overlap and together cover every line of the document in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub kind: RegionKind,
    /// Indices into the classified line table.
    pub lines: Range<usize>,
    /// Byte span from the start of the first line to the end of the last.
    pub span: Span,
}

impl Region {
    /// Line indices holding code, i.e. without the fence lines.
    pub fn body(&self) -> Range<usize> {
        match self.kind {
            RegionKind::FencedCode { closed, .. } => {
                let start = (self.lines.start + 1).min(self.lines.end);
                let end = if closed {
                    self.lines.end.saturating_sub(1).max(start)
                } else {
                    self.lines.end
                };
                start..end
            }
            _ => self.lines.clone(),
        }
    }
}
