//! HTML output.

use std::fmt::{self, Write};

use crate::core::{CatalogError, Result};

use super::markup::{Block, Cell, FontSize, Node, Row, Table};
use super::serializer::TableSerializer;

/// Writes a table as HTML markup.
///
/// Rows and cells go on their own lines, indented; cell content is inline.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlSerializer;

impl HtmlSerializer {
    /// Create a new HTML serializer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Serialize a single content node.
    pub fn node_to_string(node: &Node) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_node(&mut out, node);
        out
    }
}

impl TableSerializer for HtmlSerializer {
    fn name(&self) -> &'static str {
        "html"
    }

    fn serialize(&self, table: &Table) -> Result<String> {
        let mut out = String::new();
        write_table(&mut out, table).map_err(|e| CatalogError::Serialize(e.to_string()))?;
        Ok(out)
    }
}

fn write_table(out: &mut String, table: &Table) -> fmt::Result {
    writeln!(
        out,
        "<table id=\"{}\" border=\"{}\">",
        escape_attr(&table.id),
        table.border
    )?;
    for row in &table.rows {
        write_row(out, row)?;
    }
    writeln!(out, "</table>")
}

fn write_row(out: &mut String, row: &Row) -> fmt::Result {
    writeln!(out, "  <tr id=\"{}\">", escape_attr(&row.id))?;
    for cell in &row.cells {
        write_cell(out, cell)?;
    }
    writeln!(out, "  </tr>")
}

fn write_cell(out: &mut String, cell: &Cell) -> fmt::Result {
    out.push_str("    <td");
    if cell.row_span > 1 {
        write!(out, " rowspan=\"{}\"", cell.row_span)?;
    }
    if let Some(title) = &cell.title {
        write!(out, " title=\"{}\"", escape_attr(title))?;
    }
    out.push('>');
    for node in &cell.content {
        write_node(out, node)?;
    }
    writeln!(out, "</td>")
}

fn write_node(out: &mut String, node: &Node) -> fmt::Result {
    match node {
        Node::Text { text } => out.push_str(&escape_text(text)),
        Node::LineBreak => out.push_str("<br>"),
        Node::Link { href, children } => {
            write!(out, "<a href=\"{}\">", escape_attr(href))?;
            for child in children {
                write_node(out, child)?;
            }
            out.push_str("</a>");
        }
        Node::Image {
            src,
            title,
            max_width_px,
        } => {
            write!(
                out,
                "<img src=\"{}\" title=\"{}\" style=\"max-width: {}px\">",
                escape_attr(src),
                escape_attr(title),
                max_width_px
            )?;
        }
        Node::Container {
            block,
            font_size,
            centered,
            children,
        } => {
            let tag = tag_name(*block);
            out.push('<');
            out.push_str(tag);
            if let Some(style) = style_attr(*font_size, *centered) {
                write!(out, " style=\"{style}\"")?;
            }
            out.push('>');
            for child in children {
                write_node(out, child)?;
            }
            write!(out, "</{tag}>")?;
        }
    }
    Ok(())
}

fn tag_name(block: Block) -> &'static str {
    match block {
        Block::Span => "span",
        Block::Div => "div",
        Block::Paragraph => "p",
    }
}

fn style_attr(font_size: Option<FontSize>, centered: bool) -> Option<String> {
    let mut rules = Vec::new();
    if let Some(size) = font_size {
        rules.push(format!("font-size: {}", size.css()));
    }
    if centered {
        rules.push("text-align: center".to_string());
    }
    if rules.is_empty() {
        None
    } else {
        Some(rules.join("; "))
    }
}

/// Escape text content.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value.
#[must_use]
pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
