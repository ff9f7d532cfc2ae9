//! JSON data export of a rendered table.

use crate::core::{CatalogError, Result};

use super::markup::Table;
use super::serializer::TableSerializer;

/// Writes a table as JSON.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonSerializer {
    /// Indent the output.
    pub pretty: bool,
}

impl JsonSerializer {
    /// Compact JSON.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Indented JSON.
    #[must_use]
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl TableSerializer for JsonSerializer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn serialize(&self, table: &Table) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(table)
        } else {
            serde_json::to_string(table)
        };
        json.map_err(|e| CatalogError::Serialize(e.to_string()))
    }
}
