pub mod cleaning;
pub mod options;

// Re-export key types for easier usage
pub use cleaning::{ParsedDoc, clean, parse_document};
pub use options::CleanOptions;
