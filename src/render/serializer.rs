//! Serializer trait for rendered tables.
//!
//! Layout and output format are separate: the same `Table` can be written
//! as HTML for the reference page or exported as JSON.

use crate::core::Result;

use super::markup::Table;

/// Turns a rendered table into concrete output.
pub trait TableSerializer {
    /// Short format name, e.g. `"html"`.
    fn name(&self) -> &'static str;

    /// Serialize the table.
    fn serialize(&self, table: &Table) -> Result<String>;
}
