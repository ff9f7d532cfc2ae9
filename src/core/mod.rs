//! Core types shared by every layer: configuration and errors.

pub mod config;
pub mod error;

pub use config::{TableConfig, VariantDepth, DEFAULT_MAINTAINER, DEFAULT_PAGE_URL, DEFAULT_TABLE_ID};
pub use error::{CatalogError, Result};
