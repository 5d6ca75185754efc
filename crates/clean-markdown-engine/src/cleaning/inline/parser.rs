use std::collections::HashMap;

use crate::cleaning::text::Span;

use super::{
    cursor::Cursor,
    kinds::{Autolink, CodeSpan, Emphasis, Escape, Link, TickRuns},
    types::InlineNode,
};

/// A `[` or `![` still waiting for its `]`.
struct Bracket {
    /// Index of the opener's node in the output.
    node: usize,
    image: bool,
}

/// Per-line lookup tables, built on first use.
struct LineIndex {
    ticks: Option<TickRuns>,
    parens: Option<HashMap<usize, usize>>,
}

/// Parses one prose line into a sequence of [`InlineNode`]s.
///
/// # Raw Zone Precedence
/// Escapes are checked first, then code spans, which suppress all other
/// parsing inside them: `` `[a](b)` `` is a code span, not a link.
///
/// # Links
/// Openers wait on a bracket stack. A `]` pops the nearest opener and, when
/// a destination or label follows, turns it into a `LinkOpen` and emits a
/// `LinkClose`. The link text stays in the same flat node list, so nesting
/// depth costs no recursion. An opener popped without a match stays text.
///
/// # Returns
/// A vector of nodes tiling the entire input. Text between constructs is
/// emitted as `InlineNode::Text`; malformed constructs stay text.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;
    let mut brackets: Vec<Bracket> = vec![];
    let mut index = LineIndex {
        ticks: None,
        parens: None,
    };

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while let Some(b) = cur.peek() {
        let node = match b {
            Escape::BACKSLASH => try_parse_escape(&mut cur),
            CodeSpan::TICK => try_parse_code_span(&mut cur, &mut index),
            Link::BANG if cur.nth(1) == Some(Link::OPEN) => Some(parse_link_open(&mut cur, true)),
            Link::OPEN => Some(parse_link_open(&mut cur, false)),
            Link::CLOSE => try_parse_link_close(&mut cur, &mut brackets, &mut out, &mut index),
            Autolink::OPEN => try_parse_autolink(&mut cur),
            Emphasis::STAR | Emphasis::UNDERSCORE => Some(parse_delim_run(&mut cur, b)),
            _ => None,
        };

        match node {
            Some(node) => {
                let full = node.full();
                flush_text(&mut out, text_start, full.start);
                text_start = full.end;
                // Openers are text until a `]` proves otherwise
                if matches!(b, Link::OPEN | Link::BANG) && matches!(node, InlineNode::Text(_)) {
                    brackets.push(Bracket {
                        node: out.len(),
                        image: b == Link::BANG,
                    });
                }
                out.push(node);
            }
            // An unclosed backtick run is literal as a whole
            None if b == CodeSpan::TICK => cur.bump_n(cur.run_len(CodeSpan::TICK)),
            None => {
                cur.bump();
            }
        }
    }

    flush_text(&mut out, text_start, s.len());
    out
}

fn try_parse_escape(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let next = cur.nth(1)?;
    if !Escape::escapes(next) {
        return None;
    }
    let start = cur.pos();
    cur.bump_n(2);
    Some(InlineNode::Escape {
        full: Span::new(start, start + 2),
        ch: Span::new(start + 1, start + 2),
    })
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` without moving the cursor if no closing run of the same
/// length exists on the line.
fn try_parse_code_span(cur: &mut Cursor<'_>, index: &mut LineIndex) -> Option<InlineNode> {
    let start = cur.pos();
    let n = cur.run_len(CodeSpan::TICK);
    let ticks = index.ticks.get_or_insert_with(|| TickRuns::new(cur.s));
    let close = ticks.find_close(start + n, n)?;
    cur.bump_n(close + n - start);

    Some(InlineNode::CodeSpan {
        full: Span::new(start, close + n),
        inner: Span::new(start + n, close),
    })
}

fn parse_link_open(cur: &mut Cursor<'_>, image: bool) -> InlineNode {
    let start = cur.pos();
    cur.bump_n(if image { 2 } else { 1 });
    InlineNode::Text(Span::new(start, cur.pos()))
}

/// Attempts to close the nearest open bracket at the current `]`.
///
/// Handles inline `[text](dest)` and reference `[text][ref]` / `[text][]`
/// forms. A bare `[text]` is left as text. The opener is popped either way.
fn try_parse_link_close(
    cur: &mut Cursor<'_>,
    brackets: &mut Vec<Bracket>,
    out: &mut [InlineNode],
    index: &mut LineIndex,
) -> Option<InlineNode> {
    let opener = brackets.pop()?;
    let close = cur.pos();

    let end = match cur.nth(1) {
        Some(Link::DEST_OPEN) => {
            let parens = index
                .parens
                .get_or_insert_with(|| Link::match_parens(cur.s));
            parens.get(&(close + 1)).copied()
        }
        Some(Link::OPEN) => Link::find_close_label(cur.s, close + 2),
        _ => None,
    }?;

    out[opener.node] = InlineNode::LinkOpen {
        full: out[opener.node].full(),
        image: opener.image,
    };
    cur.bump_n(end + 1 - close);
    Some(InlineNode::LinkClose {
        full: Span::new(close, end + 1),
    })
}

fn try_parse_autolink(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let start = cur.pos();
    let close = Autolink::find_close(cur.s, start)?;
    cur.bump_n(close + 1 - start);
    Some(InlineNode::Autolink {
        full: Span::new(start, close + 1),
        target: Span::new(start + 1, close),
    })
}

fn parse_delim_run(cur: &mut Cursor<'_>, ch: u8) -> InlineNode {
    let start = cur.pos();
    let n = cur.run_len(ch);
    let (can_open, can_close) =
        Emphasis::flanking(ch, cur.char_before(start), cur.char_at(start + n));
    cur.bump_n(n);
    InlineNode::Delim {
        full: Span::new(start, start + n),
        ch,
        can_open,
        can_close,
    }
}
