//! # cgt-ruleset-table
//!
//! A reference table of combinatorial game rulesets (Nim, Hex,
//! Domineering, ...) and their properties: impartiality, game length,
//! initial outcome class, computational complexity, and anything else
//! worth noting.
//!
//! ## Design Principles
//!
//! 1. **Data, then layout, then output**: Rulesets are plain records. The
//!    renderer lays them out as an abstract table, and a serializer writes
//!    that table as HTML or JSON.
//!
//! 2. **No ambient state**: Catalogs are built through an explicit
//!    `CatalogBuilder` and passed to the renderer.
//!
//! 3. **Fail fast on bad data, never on missing data**: Empty or repeated
//!    titles are rejected when added. Missing links, images or
//!    descriptions just render blank.
//!
//! ## Modules
//!
//! - `core`: Table configuration and errors
//! - `content`: Rich cell content and the length helper
//! - `ruleset`: Ruleset records and their decorations
//! - `catalog`: Catalog builder and the finished catalog
//! - `render`: Markup tree, row layout, HTML/JSON serializers
//! - `rulesets`: A small sample catalog
//!
//! ## Example
//!
//! ```
//! use cgt_ruleset_table::{
//!     length_label, render_catalog, CatalogBuilder, HtmlSerializer, Ruleset, TableConfig,
//!     TableSerializer,
//! };
//!
//! let mut builder = CatalogBuilder::new();
//! let col = Ruleset::new("Col", Some("https://en.wikipedia.org/wiki/Col_%28game%29"), false,
//!         length_label(true), "No common initial position.", "PSPACE-complete", " ")
//!     .with_variant(Ruleset::new("Snort", None, false, length_label(true), "?", "PSPACE-complete", " "));
//! builder.add(col).unwrap();
//!
//! let table = render_catalog(&builder.build(), &TableConfig::default());
//! assert_eq!(table.len(), 2);
//!
//! let html = HtmlSerializer::new().serialize(&table).unwrap();
//! assert!(html.contains("<tr id=\"Snort\">"));
//! ```

pub mod core;
pub mod content;
pub mod ruleset;
pub mod catalog;
pub mod render;
pub mod rulesets;

// Re-export commonly used types
pub use crate::core::{CatalogError, Result, TableConfig, VariantDepth};

pub use crate::content::{length_label, GameLength, RichContent};

pub use crate::ruleset::{Image, InformationLink, PlayableLink, Ruleset};

pub use crate::catalog::{Catalog, CatalogBuilder};

pub use crate::render::{
    add_rows_to_table, render_catalog, render_row, render_rulesets,
    Cell, CellKind, Node, Row, Table,
    HtmlSerializer, JsonSerializer, TableSerializer,
};
