//! Sample rulesets.
//!
//! A handful of well-known games, each with the decorations the full
//! reference table uses:
//! - Linked and unlinked titles, aliases, tooltips and images
//! - Playable versions and blog posts
//! - Composite, cited and unpublished complexity results
//! - Variant groups (Atropos, Clobber, Col, Nim)
//!
//! Used by the command-line tool and the integration tests.

mod sample;

pub use sample::{add_sample_rulesets, sample_catalog};
