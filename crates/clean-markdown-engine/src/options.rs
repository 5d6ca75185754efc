use serde::{Deserialize, Serialize};

/// Placeholder emitted in place of code blocks when `strip_code_blocks` is set.
pub const DEFAULT_CODE_PLACEHOLDER: &str = "[Code Omitted]";

/// Default number of columns a tab expands to.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Options controlling a single [`clean`](crate::clean) call.
///
/// Every field has a default, so partial TOML tables deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    /// Keep every blank line instead of collapsing runs of 3+ into 2.
    pub preserve_blank_lines: bool,
    /// Replace code block contents with `code_placeholder`.
    pub strip_code_blocks: bool,
    /// Line emitted once per stripped code block. Empty removes the block entirely.
    pub code_placeholder: String,
    /// Delete bare `http(s)://` URLs from prose text.
    pub strip_bare_urls: bool,
    /// Columns a tab expands to when measuring indentation.
    pub tab_width: usize,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            preserve_blank_lines: false,
            strip_code_blocks: false,
            code_placeholder: DEFAULT_CODE_PLACEHOLDER.to_string(),
            strip_bare_urls: false,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl CleanOptions {
    /// Tab width used by the scanner. Zero would make tabs invisible, so it is clamped to 1.
    pub fn effective_tab_width(&self) -> usize {
        if self.tab_width == 0 {
            log::debug!("tab_width 0 clamped to 1");
            1
        } else {
            self.tab_width
        }
    }
}
