//! Abstract markup tree produced by the renderer.
//!
//! The renderer never builds HTML strings directly. It produces a small
//! tree of tables, rows, cells and content nodes which a `TableSerializer`
//! turns into concrete output.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Relative font size of a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    XSmall,
    Small,
    Large,
}

impl FontSize {
    /// CSS keyword for this size.
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            FontSize::XSmall => "x-small",
            FontSize::Small => "small",
            FontSize::Large => "large",
        }
    }
}

/// Container flavour: inline span, block div, or paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    Span,
    Div,
    Paragraph,
}

/// A content node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Text run.
    Text { text: String },
    /// Line break.
    LineBreak,
    /// Hyperlink around child nodes.
    Link { href: String, children: Vec<Node> },
    /// Image with a hover title.
    Image {
        src: String,
        title: String,
        max_width_px: u32,
    },
    /// Grouping element with optional styling.
    Container {
        block: Block,
        font_size: Option<FontSize>,
        centered: bool,
        children: Vec<Node>,
    },
}

impl Node {
    /// Text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    /// Link whose only child is a text label.
    pub fn text_link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Node::Link {
            href: href.into(),
            children: vec![Node::text(label)],
        }
    }

    /// Unstyled container.
    #[must_use]
    pub fn container(block: Block, children: Vec<Node>) -> Self {
        Node::Container {
            block,
            font_size: None,
            centered: false,
            children,
        }
    }

    /// Container at the given font size.
    #[must_use]
    pub fn sized(block: Block, size: FontSize, children: Vec<Node>) -> Self {
        Node::Container {
            block,
            font_size: Some(size),
            centered: false,
            children,
        }
    }

    /// Single blank space, used where a cell has nothing to show.
    #[must_use]
    pub fn placeholder() -> Self {
        Node::text(" ")
    }

    /// Child nodes, empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Link { children, .. } | Node::Container { children, .. } => children,
            Node::Text { .. } | Node::LineBreak | Node::Image { .. } => &[],
        }
    }

    /// Text content, with line breaks as `\n`.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        write_plain(std::slice::from_ref(self), &mut out);
        out
    }

    /// Iterate this node and all descendants, depth-first.
    pub fn walk(&self) -> impl Iterator<Item = &Node> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children().iter().rev());
            Some(node)
        })
    }
}

/// Text content of a node list, with line breaks as `\n`.
#[must_use]
pub fn plain_text(nodes: &[Node]) -> String {
    let mut out = String::new();
    write_plain(nodes, &mut out);
    out
}

fn write_plain(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text { text } => out.push_str(text),
            Node::LineBreak => out.push('\n'),
            Node::Image { .. } => {}
            Node::Link { children, .. } | Node::Container { children, .. } => {
                write_plain(children, out);
            }
        }
    }
}

/// Which column a cell belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Name,
    Image,
    Impartiality,
    Length,
    InitialOutcome,
    Complexity,
    OtherProperties,
}

/// A table cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Column this cell fills.
    pub kind: CellKind,

    /// Number of rows this cell covers (1 for ordinary cells).
    pub row_span: u32,

    /// Tooltip text.
    pub title: Option<String>,

    pub content: Vec<Node>,
}

impl Cell {
    /// Single-row cell without a tooltip.
    #[must_use]
    pub fn new(kind: CellKind, content: Vec<Node>) -> Self {
        Self {
            kind,
            row_span: 1,
            title: None,
            content,
        }
    }

    /// Set the row span.
    #[must_use]
    pub fn with_row_span(mut self, span: u32) -> Self {
        self.row_span = span;
        self
    }

    /// Set the tooltip.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Text content of the cell.
    #[must_use]
    pub fn plain_text(&self) -> String {
        plain_text(&self.content)
    }
}

/// Cells of one row. Primary rows have seven, variant rows six.
pub type Cells = SmallVec<[Cell; 7]>;

/// A table row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Element id: the unencoded ruleset title.
    pub id: String,

    /// True for variant rows, which share the primary row's image cell.
    pub is_variant: bool,

    pub cells: Cells,
}

impl Row {
    /// Find the cell for a column.
    #[must_use]
    pub fn cell(&self, kind: CellKind) -> Option<&Cell> {
        self.cells.iter().find(|c| c.kind == kind)
    }
}

/// A rendered table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Element id.
    pub id: String,

    /// Border width.
    pub border: u32,

    pub rows: Vec<Row>,
}

impl Table {
    /// Create an empty table.
    pub fn new(id: impl Into<String>, border: u32) -> Self {
        Self {
            id: id.into(),
            border,
            rows: Vec::new(),
        }
    }

    /// Append a row.
    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Find a row by id.
    #[must_use]
    pub fn row(&self, id: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
