//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`CodeSpan`**: backtick runs; raw zone that suppresses other parsing
//! - **`Link`**: `[`, `]`, `(`, `)` and `!` for images
//! - **`Autolink`**: `<` and `>`
//! - **`Emphasis`**: `*` and `_` runs and their flanking rules
//! - **`Escape`**: backslash before ASCII punctuation
//!
//! The parser calls these constants; it never hardcodes delimiters.

pub mod autolink;
pub mod code_span;
pub mod emphasis;
pub mod escape;
pub mod link;

pub use autolink::Autolink;
pub use code_span::{CodeSpan, TickRuns};
pub use emphasis::Emphasis;
pub use escape::Escape;
pub use link::Link;
