//! # Region Detection
//!
//! Two-phase, line-oriented classification of the document into prose and
//! code regions.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts (indentation, blockquote depth, fence
//!    signature, list marker, blank status)
//!
//! 2. **Region Construction** (`builder`): a `RegionBuilder` carries a
//!    `ScanState` across lines and emits `Region`s as they open and close
//!
//! ## Modules
//!
//! - **`types`**: `Region` and `RegionKind`
//! - **`kinds`**: block syntax types with owned delimiters
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `RegionBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Regions are contiguous, non-overlapping and cover every line once
//! - Fenced and indented code are raw zones: nothing inside is stripped
//! - Regions store line ranges and byte spans, never copied text

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::{RegionBuilder, ScanState};
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{Region, RegionKind};
