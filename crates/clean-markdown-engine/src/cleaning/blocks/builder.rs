use crate::cleaning::text::Span;

use super::{
    classify::LineClass,
    kinds::{Fence, IndentedCode},
    types::{Region, RegionKind},
};

/// Line-to-line scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Prose { in_list: bool },
    InFence(Fence),
    InIndented,
}

#[derive(Debug, Clone, Copy)]
struct OpenRegion {
    kind: RegionKind,
    first: usize,
    last: usize,
    start: usize,
    last_line_end: usize,
}

/// Groups classified lines into [`Region`]s.
///
/// This is phase 2 of region detection. Lines must be pushed in order,
/// with consecutive indices starting at zero.
pub struct RegionBuilder {
    state: ScanState,
    open: Option<OpenRegion>,
    out: Vec<Region>,
}

impl RegionBuilder {
    pub fn new() -> Self {
        Self {
            state: ScanState::Prose { in_list: false },
            open: None,
            out: vec![],
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn push(&mut self, idx: usize, c: &LineClass<'_>) {
        match self.state {
            ScanState::InFence(fence) => {
                if fence.quote_depth > 0 && c.quote_depth < fence.quote_depth {
                    log::debug!("blockquote ended inside fenced code at line {}", idx + 1);
                    self.close(RegionKind::FencedCode {
                        fence,
                        closed: false,
                    });
                } else {
                    self.extend(idx, c.line);
                    if fence.is_closed_by(c.text) {
                        self.close(RegionKind::FencedCode {
                            fence,
                            closed: true,
                        });
                        self.state = ScanState::Prose {
                            in_list: fence.in_list,
                        };
                    }
                    return;
                }
            }
            ScanState::InIndented => {
                if !c.is_blank && c.indent >= IndentedCode::INDENT {
                    self.extend(idx, c.line);
                    return;
                }
                self.close(RegionKind::IndentedCode);
            }
            ScanState::Prose { .. } => {}
        }
        self.push_outside_code(idx, c);
    }

    pub fn finish(mut self) -> Vec<Region> {
        // EOF flush
        match self.state {
            ScanState::InFence(fence) => {
                log::debug!("unterminated fenced code block at end of document");
                self.close(RegionKind::FencedCode {
                    fence,
                    closed: false,
                });
            }
            ScanState::InIndented => self.close(RegionKind::IndentedCode),
            ScanState::Prose { in_list } => self.close(RegionKind::Prose { in_list }),
        }
        self.out
    }

    fn push_outside_code(&mut self, idx: usize, c: &LineClass<'_>) {
        let in_list = matches!(self.state, ScanState::Prose { in_list: true });

        let sig = if in_list {
            c.loose_fence_sig
        } else {
            c.fence_sig
        };
        if let Some(sig) = sig {
            let fence = Fence {
                kind: sig.kind,
                len: sig.len,
                quote_depth: c.quote_depth,
                strip_indent: if in_list { c.remainder_indent } else { 0 },
                in_list,
            };
            self.begin(
                RegionKind::FencedCode {
                    fence,
                    closed: false,
                },
                idx,
                c.line,
            );
            self.state = ScanState::InFence(fence);
            return;
        }

        if !in_list && c.quote_depth == 0 && !c.is_blank && c.indent >= IndentedCode::INDENT {
            self.begin(RegionKind::IndentedCode, idx, c.line);
            self.state = ScanState::InIndented;
            return;
        }

        let in_list = if c.list_item {
            true
        } else if c.is_blank {
            in_list
        } else {
            in_list && c.indent > 0
        };
        self.state = ScanState::Prose { in_list };

        let kind = RegionKind::Prose { in_list };
        match self.open {
            Some(open) if open.kind == kind => self.extend(idx, c.line),
            _ => self.begin(kind, idx, c.line),
        }
    }

    /// Closes whatever region is open and starts a new one at `idx`.
    fn begin(&mut self, kind: RegionKind, idx: usize, line: Span) {
        if let Some(open) = self.open {
            self.close(open.kind);
        }
        log::trace!("{kind:?} region starts at line {}", idx + 1);
        self.open = Some(OpenRegion {
            kind,
            first: idx,
            last: idx,
            start: line.start,
            last_line_end: line.end,
        });
    }

    fn extend(&mut self, idx: usize, line: Span) {
        if let Some(open) = self.open.as_mut() {
            open.last = idx;
            open.last_line_end = line.end;
        }
    }

    /// Emits the open region (if any) with its final kind.
    fn close(&mut self, kind: RegionKind) {
        if let Some(open) = self.open.take() {
            let prev_end = self.out.last().map_or(0, |r| r.lines.end);
            debug_assert_eq!(prev_end, open.first, "regions must be contiguous");
            self.out.push(Region {
                kind,
                lines: open.first..open.last + 1,
                span: Span {
                    start: open.start,
                    end: open.last_line_end,
                },
            });
        }
    }
}

impl Default for RegionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
