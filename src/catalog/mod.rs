//! The catalog: an ordered list of top-level rulesets.
//!
//! Construction code threads a `CatalogBuilder` through explicitly; there
//! is no global list. The finished `Catalog` is read-only and handed to
//! the renderer.

pub mod builder;

pub use builder::{Catalog, CatalogBuilder};
