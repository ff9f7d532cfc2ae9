//! Table layout.
//!
//! Each top-level ruleset renders as a group of rows: its primary row,
//! then one row per displayed variant in attachment order. No sorting,
//! filtering or deduplication happens here.
//!
//! ## Row Layout
//!
//! | Column           | Primary row                  | Variant row |
//! |------------------|------------------------------|-------------|
//! | Name             | own cell                     | own cell    |
//! | Image            | spans the whole group        | (none)      |
//! | Impartiality     | own cell                     | own cell    |
//! | Length           | own cell                     | own cell    |
//! | Initial outcome  | own cell                     | own cell    |
//! | Complexity       | own cell                     | own cell    |
//! | Other properties | own cell                     | own cell    |

use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::content::{RichContent, UNPUBLISHED_MARK};
use crate::core::{TableConfig, VariantDepth};
use crate::ruleset::Ruleset;

use super::anchor::encode_title;
use super::markup::{Block, Cell, CellKind, Cells, FontSize, Node, Row, Table};

/// Render rich content to a markup node.
#[must_use]
pub fn render_content(content: &RichContent) -> Node {
    match content {
        RichContent::Text { text } => Node::text(text.clone()),
        RichContent::Link { label, url } => Node::text_link(label.clone(), url.clone()),
        RichContent::LineBreak => Node::LineBreak,
        RichContent::Unpublished { content } => Node::container(
            Block::Span,
            vec![render_content(content), Node::text(UNPUBLISHED_MARK.to_string())],
        ),
        RichContent::Sequence { parts } => {
            Node::container(Block::Span, parts.iter().map(render_content).collect())
        }
    }
}

/// `-- link here --` paragraph pointing at the ruleset's own row.
#[must_use]
pub fn self_link(ruleset: &Ruleset, config: &TableConfig) -> Node {
    let href = config.anchor_url(&encode_title(&ruleset.title));
    Node::sized(
        Block::Paragraph,
        FontSize::XSmall,
        vec![
            Node::text("-- "),
            Node::text_link("link here", href),
            Node::text(" --"),
        ],
    )
}

/// Name cell: title link, playable versions, blog post, aliases, self-link.
#[must_use]
pub fn name_cell(ruleset: &Ruleset, config: &TableConfig) -> Cell {
    let mut content = vec![
        ruleset.information_link.to_node(),
        ruleset.playable_links_summary(),
    ];
    content.extend(ruleset.blog_link_node());
    content.extend(ruleset.alias_summary());
    content.push(self_link(ruleset, config));

    let cell = Cell::new(CellKind::Name, content);
    match &ruleset.brief_description {
        Some(description) => cell.with_title(description.clone()),
        None => cell,
    }
}

/// Build one row.
///
/// Primary rows carry the image cell, spanning every row of the group.
/// Variant rows leave that column to their parent.
#[must_use]
pub fn render_row(ruleset: &Ruleset, is_variant: bool, config: &TableConfig) -> Row {
    let mut cells = Cells::new();
    cells.push(name_cell(ruleset, config));

    if !is_variant {
        let span = ruleset.row_count(config.variant_depth);
        cells.push(
            Cell::new(CellKind::Image, vec![ruleset.image_node(config)])
                .with_row_span(u32::try_from(span).unwrap_or(u32::MAX)),
        );
    }

    cells.push(Cell::new(
        CellKind::Impartiality,
        vec![Node::text(ruleset.partiality_label())],
    ));
    cells.push(Cell::new(CellKind::Length, vec![render_content(&ruleset.length)]));
    cells.push(Cell::new(
        CellKind::InitialOutcome,
        vec![render_content(&ruleset.initial_outcome)],
    ));
    cells.push(Cell::new(
        CellKind::Complexity,
        vec![render_content(&ruleset.complexity)],
    ));
    cells.push(Cell::new(
        CellKind::OtherProperties,
        vec![render_content(&ruleset.other_properties)],
    ));

    Row {
        id: ruleset.title.clone(),
        is_variant,
        cells,
    }
}

/// Append a ruleset's primary row and its variant rows.
pub fn add_rows_to_table(ruleset: &Ruleset, table: &mut Table, config: &TableConfig) {
    table.push(render_row(ruleset, false, config));

    let variants = ruleset.displayed_variants(config.variant_depth);
    if config.variant_depth == VariantDepth::OneLevel {
        for nested in ruleset.variants.iter().filter(|v| !v.variants.is_empty()) {
            warn!(
                parent = %nested.title,
                skipped = nested.variants.len(),
                "Nested variants are not shown at one-level depth"
            );
        }
    }
    for variant in &variants {
        table.push(render_row(variant, true, config));
    }

    debug!(title = %ruleset.title, rows = variants.len() + 1, "Rendered ruleset group");
}

/// Render an ordered sequence of top-level rulesets.
#[must_use]
pub fn render_rulesets<'a, I>(rulesets: I, config: &TableConfig) -> Table
where
    I: IntoIterator<Item = &'a Ruleset>,
{
    let mut table = Table::new(config.table_id.clone(), config.border);
    for ruleset in rulesets {
        add_rows_to_table(ruleset, &mut table, config);
    }
    table
}

/// Render a whole catalog.
#[must_use]
pub fn render_catalog(catalog: &Catalog, config: &TableConfig) -> Table {
    let table = render_rulesets(catalog, config);
    info!(
        rulesets = catalog.len(),
        rows = table.len(),
        "Rendered ruleset catalog"
    );
    table
}
