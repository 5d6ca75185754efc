use crate::cleaning::text::{LineRef, Span};

use super::kinds::{BlockQuote, CodeFence, FenceSig, IndentedCode, ListItem, ThematicBreak};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of region detection: each line is classified
/// independently without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// Byte span of this line, newline excluded.
    pub line: Span,
    /// The line text.
    pub text: &'a str,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Columns of leading whitespace, tabs expanded.
    pub indent: usize,
    /// Number of blockquote `>` prefixes found.
    pub quote_depth: u8,
    /// Text after the blockquote prefixes.
    pub remainder: &'a str,
    /// Columns of leading whitespace in the remainder, tabs expanded.
    pub remainder_indent: usize,
    /// The remainder read as a fence with at most three leading spaces.
    pub fence_sig: Option<FenceSig>,
    /// The remainder read as a fence after any indentation (list continuation).
    pub loose_fence_sig: Option<FenceSig>,
    /// The remainder starts with a list marker.
    pub list_item: bool,
}

/// Classifies individual lines for the region-building phase.
pub struct MarkdownLineClassifier {
    tab_width: usize,
}

impl MarkdownLineClassifier {
    pub fn new(tab_width: usize) -> Self {
        Self { tab_width }
    }

    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let text = lr.text;
        let (quote_depth, idx) = BlockQuote::strip_prefixes(text);
        let remainder = &text[idx..];

        LineClass {
            line: lr.span,
            text,
            is_blank: text.trim().is_empty(),
            indent: IndentedCode::indent_width(text, self.tab_width),
            quote_depth,
            remainder,
            remainder_indent: IndentedCode::indent_width(remainder, self.tab_width),
            fence_sig: CodeFence::sig(remainder),
            loose_fence_sig: CodeFence::sig_unbounded(remainder),
            list_item: ListItem::content_start(remainder).is_some()
                && !ThematicBreak::matches(remainder),
        }
    }
}
