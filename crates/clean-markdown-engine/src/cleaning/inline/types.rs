use crate::cleaning::text::Span;

/// A parsed inline node with byte spans into the line.
///
/// The nodes of one line tile it exactly: concatenating their `full`
/// spans reproduces the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A code span. This is a raw zone: its inner text is emitted verbatim.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Content between the backtick runs.
        inner: Span,
    },
    /// The `[` (or `![` for images) of a link whose closing part was found.
    ///
    /// The link text follows as ordinary nodes up to the matching
    /// `LinkClose`, so nested links never need a nested parse.
    LinkOpen { full: Span, image: bool },
    /// `](url)`, `][ref]` or `][]` closing the nearest open link.
    LinkClose { full: Span },
    /// `<scheme:...>` or `<user@host>`.
    Autolink { full: Span, target: Span },
    /// A backslash followed by ASCII punctuation.
    Escape { full: Span, ch: Span },
    /// A run of `*` or `_` that may open or close emphasis.
    Delim {
        full: Span,
        ch: u8,
        can_open: bool,
        can_close: bool,
    },
}

impl InlineNode {
    /// Extracts the full span from any inline node variant.
    pub fn full(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. }
            | InlineNode::LinkOpen { full, .. }
            | InlineNode::LinkClose { full }
            | InlineNode::Autolink { full, .. }
            | InlineNode::Escape { full, .. }
            | InlineNode::Delim { full, .. } => *full,
        }
    }
}
