//! Table configuration.
//!
//! The catalog data never hardcodes where the table is published or who
//! maintains it. Front ends provide a `TableConfig` at render time:
//! - `page_url`: the page the "link here" anchors point back to
//! - `maintainer`: named in the image tooltips
//! - `variant_depth`: how far variant groups are expanded into rows
//!
//! Everything has a default matching the published reference table.

use serde::{Deserialize, Serialize};

use super::error::{CatalogError, Result};

/// Page the reference table is published on.
pub const DEFAULT_PAGE_URL: &str = "http://turing.plymouth.edu/~kgb1013/rulesetTable.php";

/// Person to contact about better images.
pub const DEFAULT_MAINTAINER: &str = "Kyle";

/// Element id of the rendered table.
pub const DEFAULT_TABLE_ID: &str = "rulesetTable";

/// How deep variant groups are expanded into table rows.
///
/// Variants are full rulesets and may carry their own variants. The
/// reference table only ever shows one level below a primary ruleset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantDepth {
    /// Only direct variants get rows. Deeper variants are skipped.
    #[default]
    OneLevel,
    /// Every descendant gets a row, depth-first in attachment order.
    Recursive,
}

/// Configuration for rendering a catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Page URL used for the per-row "link here" anchors.
    pub page_url: String,

    /// Name shown in the "Know of a better image" tooltip.
    pub maintainer: String,

    /// Maximum rendered image width, in CSS pixels.
    pub image_max_width_px: u32,

    /// Element id of the table.
    pub table_id: String,

    /// Table border width.
    pub border: u32,

    /// Variant expansion depth.
    pub variant_depth: VariantDepth,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_PAGE_URL.to_string(),
            maintainer: DEFAULT_MAINTAINER.to_string(),
            image_max_width_px: 100,
            table_id: DEFAULT_TABLE_ID.to_string(),
            border: 2,
            variant_depth: VariantDepth::OneLevel,
        }
    }
}

impl TableConfig {
    /// Load a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(CatalogError::Config)
    }

    /// Set the page URL used by row anchors.
    #[must_use]
    pub fn with_page_url(mut self, url: impl Into<String>) -> Self {
        self.page_url = url.into();
        self
    }

    /// Set the maintainer named in image tooltips.
    #[must_use]
    pub fn with_maintainer(mut self, name: impl Into<String>) -> Self {
        self.maintainer = name.into();
        self
    }

    /// Set the maximum image width.
    #[must_use]
    pub fn with_image_max_width(mut self, px: u32) -> Self {
        self.image_max_width_px = px;
        self
    }

    /// Set the variant expansion depth.
    #[must_use]
    pub fn with_variant_depth(mut self, depth: VariantDepth) -> Self {
        self.variant_depth = depth;
        self
    }

    /// Anchor URL for a row: `<page_url>#<encoded title>`.
    #[must_use]
    pub fn anchor_url(&self, encoded_title: &str) -> String {
        format!("{}#{}", self.page_url, encoded_title)
    }
}
