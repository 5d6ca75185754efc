//! # Inline Stripping
//!
//! Cursor-based inline parsing with explicit raw zones, followed by
//! delimiter pairing and rendering to plain text.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum
//! - **`kinds`**: inline types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte parsing
//! - **`parser`**: `parse_inline()` with `try_parse_*` helpers
//! - **`delimiters`**: stack-based emphasis pairing
//! - **`render`**: `strip_inline()` producing the cleaned text
//!
//! ## Raw Zone Precedence
//!
//! Escapes and code spans take precedence: `` `*a*` `` keeps its stars and
//! `\*a\*` never becomes emphasis.

pub mod cursor;
pub mod delimiters;
pub mod kinds;
pub mod parser;
pub mod render;
pub mod types;

pub use parser::parse_inline;
pub use render::strip_inline;
pub use types::InlineNode;
