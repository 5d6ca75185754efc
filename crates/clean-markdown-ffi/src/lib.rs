//! UniFFI bindings for clean-markdown
//!
//! Exposes the cleaning engine to Kotlin/Swift/Python callers as plain
//! functions plus a reusable `Cleaner` object.

use clean_markdown_engine::{CleanOptions, clean};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Invalid options: {reason}")]
    InvalidOptions { reason: String },
}

// ============ DTOs ============

/// Cleaning options as seen by foreign callers.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct CleanOptionsRecord {
    pub preserve_blank_lines: bool,
    pub strip_code_blocks: bool,
    /// Emitted once per stripped code block; empty drops the block
    pub code_placeholder: String,
    pub strip_bare_urls: bool,
    /// Columns per tab (0 is treated as 1)
    pub tab_width: u32,
}

impl From<CleanOptions> for CleanOptionsRecord {
    fn from(options: CleanOptions) -> Self {
        Self {
            preserve_blank_lines: options.preserve_blank_lines,
            strip_code_blocks: options.strip_code_blocks,
            code_placeholder: options.code_placeholder,
            strip_bare_urls: options.strip_bare_urls,
            tab_width: u32::try_from(options.tab_width).unwrap_or(u32::MAX),
        }
    }
}

impl From<CleanOptionsRecord> for CleanOptions {
    fn from(record: CleanOptionsRecord) -> Self {
        Self {
            preserve_blank_lines: record.preserve_blank_lines,
            strip_code_blocks: record.strip_code_blocks,
            code_placeholder: record.code_placeholder,
            strip_bare_urls: record.strip_bare_urls,
            tab_width: record.tab_width as usize,
        }
    }
}

// ============ Cleaner Handle ============

/// Cleaner with options fixed at construction, for repeated calls.
#[derive(uniffi::Object)]
pub struct Cleaner {
    options: CleanOptions,
}

#[uniffi::export]
impl Cleaner {
    /// Create a cleaner, rejecting a zero tab width.
    #[uniffi::constructor]
    pub fn new(options: CleanOptionsRecord) -> Result<Self, FfiError> {
        if options.tab_width == 0 {
            return Err(FfiError::InvalidOptions {
                reason: "tab_width must be at least 1".to_string(),
            });
        }
        Ok(Self {
            options: options.into(),
        })
    }

    pub fn clean(&self, text: String) -> String {
        clean(&text, &self.options)
    }

    pub fn options(&self) -> CleanOptionsRecord {
        self.options.clone().into()
    }
}

// ============ Standalone Functions ============

/// Strip Markdown formatting using the default options.
#[uniffi::export]
pub fn clean_markdown(text: String) -> String {
    clean(&text, &CleanOptions::default())
}

#[uniffi::export]
pub fn clean_markdown_with_options(text: String, options: CleanOptionsRecord) -> String {
    clean(&text, &options.into())
}

#[uniffi::export]
pub fn default_options() -> CleanOptionsRecord {
    CleanOptions::default().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_markdown_defaults() {
        let out = clean_markdown("# Hello World\n\n- Item 1\n- Item 2".to_string());
        assert_eq!(out, "Hello World\n\nItem 1\nItem 2");
    }

    #[test]
    fn test_default_options_match_engine() {
        let options = default_options();
        assert!(!options.preserve_blank_lines);
        assert!(!options.strip_code_blocks);
        assert!(!options.strip_bare_urls);
        assert_eq!(options.code_placeholder, "[Code Omitted]");
        assert_eq!(options.tab_width, 4);
    }

    #[test]
    fn test_options_roundtrip_through_engine_type() {
        let record = CleanOptionsRecord {
            preserve_blank_lines: true,
            strip_code_blocks: true,
            code_placeholder: "...".to_string(),
            strip_bare_urls: true,
            tab_width: 2,
        };
        let engine: CleanOptions = record.clone().into();
        assert_eq!(CleanOptionsRecord::from(engine), record);
    }

    #[test]
    fn test_clean_with_options_strips_code() {
        let options = CleanOptionsRecord {
            strip_code_blocks: true,
            ..default_options()
        };
        let out = clean_markdown_with_options("a\n```\nx\n```\nb".to_string(), options);
        assert_eq!(out, "a\n[Code Omitted]\nb");
    }

    #[test]
    fn test_cleaner_reuses_options() {
        let cleaner = Cleaner::new(CleanOptionsRecord {
            preserve_blank_lines: true,
            ..default_options()
        })
        .unwrap();

        assert_eq!(cleaner.clean("a\n\n\n\nb".to_string()), "a\n\n\n\nb");
        assert_eq!(cleaner.clean("**b**".to_string()), "b");
        assert!(cleaner.options().preserve_blank_lines);
    }

    #[test]
    fn test_cleaner_rejects_zero_tab_width() {
        let result = Cleaner::new(CleanOptionsRecord {
            tab_width: 0,
            ..default_options()
        });
        assert!(matches!(result, Err(FfiError::InvalidOptions { .. })));
    }
}
