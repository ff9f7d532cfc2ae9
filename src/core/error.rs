//! Errors surfaced while building or exporting a catalog.
//!
//! Rendering never fails: absent fields degrade to blank content. Only
//! contract violations in the catalog data (empty or repeated titles) and
//! I/O-adjacent concerns (config parsing, export) produce errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// A ruleset (or one of its variants) has an empty title.
    #[error("ruleset title must not be empty")]
    EmptyTitle,

    /// Two rulesets share a title, so their row anchors would collide.
    #[error("duplicate ruleset title: {title:?}")]
    DuplicateTitle { title: String },

    #[error("invalid table config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("failed to serialize table: {0}")]
    Serialize(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
