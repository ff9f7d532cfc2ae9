//! Rendering: catalog to markup tree to output.
//!
//! ## Key Types
//!
//! - `Table`, `Row`, `Cell`, `Node`: Abstract markup tree
//! - `render_catalog`: Lay a catalog out as table rows
//! - `TableSerializer`: Output format trait
//! - `HtmlSerializer`, `JsonSerializer`: Built-in formats
//!
//! Rendering never fails. Missing fields become blank content.

pub mod anchor;
pub mod html;
pub mod json;
pub mod markup;
pub mod serializer;
pub mod table;

pub use anchor::encode_title;
pub use html::HtmlSerializer;
pub use json::JsonSerializer;
pub use markup::{Block, Cell, CellKind, Cells, FontSize, Node, Row, Table};
pub use serializer::TableSerializer;
pub use table::{add_rows_to_table, name_cell, render_catalog, render_content, render_row, render_rulesets};
