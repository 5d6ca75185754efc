//! Block-level syntax knowledge. Each kind owns its delimiters; the
//! classifier, builder and stripper never hardcode them.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod indented_code;
pub mod link_definition;
pub mod list_item;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, Fence, FenceKind, FenceSig};
pub use heading::Heading;
pub use indented_code::IndentedCode;
pub use link_definition::LinkDefinition;
pub use list_item::ListItem;
pub use thematic_break::ThematicBreak;
