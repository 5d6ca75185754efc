use std::borrow::Cow;

use super::{BlockQuote, IndentedCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            CodeFence::BACKTICK => Some(Self::Backticks),
            CodeFence::TILDE => Some(Self::Tildes),
            _ => None,
        }
    }

    pub fn byte(self) -> u8 {
        match self {
            Self::Backticks => CodeFence::BACKTICK,
            Self::Tildes => CodeFence::TILDE,
        }
    }
}

/// What a line looks like if read as a fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    /// Length of the fence character run.
    pub len: usize,
    /// True when nothing but whitespace follows the run.
    pub bare: bool,
}

/// An open fenced code block and everything needed to close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence {
    pub kind: FenceKind,
    /// Minimum run length of the closing fence.
    pub len: usize,
    /// Blockquote depth the fence was opened at.
    pub quote_depth: u8,
    /// Columns of indentation removed from content lines (fences opened in list items).
    pub strip_indent: usize,
    /// Opened in list context: closing fences may be indented arbitrarily.
    pub in_list: bool,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: u8 = b'`';
    pub const TILDE: u8 = b'~';
    pub const MIN_LEN: usize = 3;
    pub const MAX_INDENT: usize = 3;

    /// Reads `line` as a fence allowing at most [`MAX_INDENT`](Self::MAX_INDENT) leading spaces.
    pub fn sig(line: &str) -> Option<FenceSig> {
        let indent = line.len() - line.trim_start_matches(' ').len();
        if indent > Self::MAX_INDENT {
            return None;
        }
        Self::sig_at(line, indent)
    }

    /// Reads `line` as a fence after any amount of leading whitespace.
    pub fn sig_unbounded(line: &str) -> Option<FenceSig> {
        let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
        Self::sig_at(line, indent)
    }

    fn sig_at(line: &str, indent: usize) -> Option<FenceSig> {
        let rest = &line[indent..];
        let kind = FenceKind::from_byte(*rest.as_bytes().first()?)?;
        let len = rest.bytes().take_while(|&b| b == kind.byte()).count();
        if len < Self::MIN_LEN {
            return None;
        }
        let info = &rest[len..];
        // ```foo``` on one line is inline code, not an opener
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        Some(FenceSig {
            kind,
            len,
            bare: info.trim().is_empty(),
        })
    }

    /// Whether `sig` closes `fence`: same character, at least as long, nothing after it.
    pub fn closes(fence: &Fence, sig: Option<FenceSig>) -> bool {
        matches!(sig, Some(s) if s.kind == fence.kind && s.len >= fence.len && s.bare)
    }
}

impl Fence {
    /// The part of a content line that belongs to the code block.
    pub fn content<'a>(&self, line: &'a str, tab_width: usize) -> Cow<'a, str> {
        let mut rest = line;
        if self.quote_depth > 0 {
            let (_, off) = BlockQuote::strip_up_to(rest, self.quote_depth);
            rest = &rest[off..];
        }
        IndentedCode::strip_columns(rest, self.strip_indent, tab_width)
    }

    /// Whether `line` is this fence's closing line.
    pub fn is_closed_by(&self, line: &str) -> bool {
        let rest = if self.quote_depth > 0 {
            let (_, off) = BlockQuote::strip_up_to(line, self.quote_depth);
            &line[off..]
        } else {
            line
        };
        let sig = if self.in_list {
            CodeFence::sig_unbounded(rest)
        } else {
            CodeFence::sig(rest)
        };
        CodeFence::closes(self, sig)
    }
}
