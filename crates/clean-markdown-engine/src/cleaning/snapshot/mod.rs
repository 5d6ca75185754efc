//! # Snapshot Testing Support
//!
//! Utilities for testing region detection via snapshot assertions and
//! invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders regions as stable, line-per-region text for
//!   `insta` snapshots
//! - **`invariants`**: Runtime checks for region correctness (contiguous
//!   coverage, spans in bounds, fence bodies inside their region)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
