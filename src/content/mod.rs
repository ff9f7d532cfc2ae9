//! Cell content: rich text fragments and the length helper.
//!
//! ## Key Types
//!
//! - `RichContent`: Text, links, breaks and composites for property cells
//! - `GameLength`: Canonical Short/Loopy classification

pub mod length;
pub mod rich;

pub use length::{length_label, GameLength};
pub use rich::{RichContent, UNPUBLISHED_MARK};
