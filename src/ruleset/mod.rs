//! Ruleset records: one game, its classification, and its variants.
//!
//! ## Key Types
//!
//! - `Ruleset`: Title, classification columns, decorations, variants
//! - `InformationLink`: Title label, linked when a reference URL exists
//! - `Image`: Illustration shown in the primary row
//! - `PlayableLink`: Interactive implementation of the game

pub mod record;

pub use record::{Image, InformationLink, PlayableLink, Ruleset};
