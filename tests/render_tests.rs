//! Table layout integration tests.
//!
//! These tests verify the row contract of the rendered table:
//! - One primary row per top-level ruleset, then its variants in order
//! - The primary image cell spans the whole group
//! - Missing fields render as blanks, never errors

use cgt_ruleset_table::render::{add_rows_to_table, render_row, CellKind, Node, Table};
use cgt_ruleset_table::rulesets::sample_catalog;
use cgt_ruleset_table::{
    length_label, render_catalog, CatalogBuilder, RichContent, Ruleset, TableConfig, VariantDepth,
};
use proptest::prelude::*;

fn ruleset(title: &str) -> Ruleset {
    Ruleset::new(title, None, false, length_label(true), "?", "In PSPACE", " ")
}

// =============================================================================
// Scenarios
// =============================================================================

/// Nim without an image: impartial, titled row, placeholder image.
#[test]
fn test_nim_scenario() {
    let config = TableConfig::default();
    let nim = Ruleset::new("Nim", None, true, "Short", "By XOR-rule.", "In P", " ");

    assert_eq!(nim.partiality_label(), "Impartial");

    let row = render_row(&nim, false, &config);
    assert_eq!(row.id, "Nim");

    let image = row.cell(CellKind::Image).expect("primary row has an image cell");
    assert_eq!(image.content, vec![Node::placeholder()]);
    assert!(image
        .content
        .iter()
        .all(|n| n.walk().all(|d| !matches!(d, Node::Image { .. }))));
}

/// Col with two variants renders three rows and spans the image cell.
#[test]
fn test_col_with_two_variants() {
    let config = TableConfig::default();
    let mut col = Ruleset::new(
        "Col",
        Some("https://en.wikipedia.org/wiki/Col_%28game%29"),
        false,
        length_label(true),
        "No common initial position.",
        "PSPACE-complete",
        " ",
    );
    col.add_variant(ruleset("Proper-k-Coloring"));
    col.add_variant(ruleset("Oriented-k-Coloring"));

    let mut table = Table::new("rulesetTable", 2);
    add_rows_to_table(&col, &mut table, &config);

    assert_eq!(table.len(), 3);
    assert_eq!(table.rows[0].cell(CellKind::Image).unwrap().row_span, 3);
    assert!(table.rows[1].cell(CellKind::Image).is_none());
    assert!(table.rows[2].cell(CellKind::Image).is_none());
    assert_eq!(table.rows[1].id, "Proper-k-Coloring");
    assert_eq!(table.rows[2].id, "Oriented-k-Coloring");
}

/// Every row, primary or variant, has its own name cell with its own title.
#[test]
fn test_variant_rows_have_own_name_cells() {
    let config = TableConfig::default();
    let hex = ruleset("Hex").with_variant(ruleset("Rex (Misère Hex)"));
    let table = cgt_ruleset_table::render_rulesets([&hex], &config);

    let names: Vec<_> = table
        .rows
        .iter()
        .map(|r| r.cells[0].clone())
        .collect();
    assert!(names.iter().all(|c| c.kind == CellKind::Name));
    assert!(names[0].plain_text().starts_with("Hex"));
    assert!(names[1].plain_text().starts_with("Rex (Misère Hex)"));
}

/// Property cells appear in fixed order after the name (and image).
#[test]
fn test_property_cell_order() {
    let config = TableConfig::default();
    let r = Ruleset::new(
        "Chess",
        Some("http://en.wikipedia.org/wiki/Chess"),
        false,
        length_label(false),
        "Open",
        RichContent::link("EXPTIME-complete", "http://www.sciencedirect.com/x"),
        "Not strictly combinatorial",
    );

    let row = render_row(&r, true, &config);
    let texts: Vec<_> = row.cells[1..].iter().map(|c| c.plain_text()).collect();
    assert_eq!(
        texts,
        vec![
            "Strictly partisan",
            "Loopy",
            "Open",
            "EXPTIME-complete",
            "Not strictly combinatorial",
        ]
    );
}

/// Custom length content passes through untouched.
#[test]
fn test_custom_length_content() {
    let config = TableConfig::default();
    let r = Ruleset::new("Go", None, false, "Loopy (with superko: Short)", "?", "?", " ");
    let row = render_row(&r, false, &config);
    assert_eq!(
        row.cell(CellKind::Length).unwrap().plain_text(),
        "Loopy (with superko: Short)"
    );
}

/// Empty content renders as empty cells, not errors.
#[test]
fn test_empty_content_degrades() {
    let config = TableConfig::default();
    let r = Ruleset::new("Blank", None, true, "", RichContent::default(), RichContent::sequence(Vec::<RichContent>::new()), "");
    let row = render_row(&r, false, &config);

    assert_eq!(row.cells.len(), 7);
    assert_eq!(row.cell(CellKind::Length).unwrap().plain_text(), "");
    assert_eq!(row.cell(CellKind::Complexity).unwrap().plain_text(), "");
}

/// The name cell is composed in order: title, playable, blog, aliases, self-link.
#[test]
fn test_name_cell_composition() {
    let config = TableConfig::default().with_page_url("https://example.org/table");
    let r = Ruleset::new(
        "Domineering",
        Some("http://en.wikipedia.org/wiki/Domineering"),
        false,
        length_label(true),
        "Varies",
        "In PSPACE",
        " ",
    )
    .with_playable_link("https://example.org/domineering.html", "HTML")
    .with_blog_link("https://blog.example.org/domineering")
    .with_alias("Crosscram")
    .with_alias("Stop-Gate")
    .with_brief_description("Place dominoes.");

    let row = render_row(&r, false, &config);
    let name = row.cell(CellKind::Name).unwrap();

    assert_eq!(name.title.as_deref(), Some("Place dominoes."));
    assert_eq!(
        name.plain_text(),
        "Domineering Play it: HTML\n (blog post)\nAKA: Crosscram, Stop-Gate-- link here --"
    );
    assert!(name.content.iter().any(|n| n.walk().any(|d| matches!(
        d,
        Node::Link { href, .. } if href == "https://example.org/table#Domineering"
    ))));
}

/// Tooltips only carry the latest description.
#[test]
fn test_brief_description_overwrite() {
    let config = TableConfig::default();
    let mut r = ruleset("Clobber");
    r.set_brief_description("old text");
    r.set_brief_description("new text");

    let row = render_row(&r, false, &config);
    let title = row.cell(CellKind::Name).unwrap().title.clone().unwrap();
    assert_eq!(title, "new text");
    assert!(!title.contains("old"));
}

// =============================================================================
// Catalog rendering
// =============================================================================

/// Catalog order is render order; nothing is sorted.
#[test]
fn test_catalog_order_preserved() {
    let mut builder = CatalogBuilder::new();
    for title in ["Toads and Frogs", "Amazons", "Nim"] {
        builder.add(ruleset(title)).unwrap();
    }
    let table = render_catalog(&builder.build(), &TableConfig::default());

    let ids: Vec<_> = table.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["Toads and Frogs", "Amazons", "Nim"]);
}

/// The sample catalog renders one row per record at one-level depth.
#[test]
fn test_sample_catalog_rows() {
    let catalog = sample_catalog().unwrap();
    let config = TableConfig::default();
    let table = render_catalog(&catalog, &config);

    assert_eq!(table.len(), catalog.row_count(VariantDepth::OneLevel));
    assert_eq!(table.id, "rulesetTable");
    assert_eq!(table.border, 2);

    let nim = table.row("Nim").unwrap();
    assert_eq!(nim.cell(CellKind::Image).unwrap().row_span, 4);
    let primaries = table.rows.iter().filter(|r| !r.is_variant).count();
    assert_eq!(primaries, catalog.len());
}

// =============================================================================
// Properties
// =============================================================================

fn title_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 '()-]{0,20}"
}

proptest! {
    /// The primary row id is the raw title, exactly once.
    #[test]
    fn prop_row_id_is_title(title in title_strategy()) {
        let config = TableConfig::default();
        let r = ruleset(&title);
        let mut table = Table::new("t", 2);
        add_rows_to_table(&r, &mut table, &config);

        prop_assert_eq!(table.rows.iter().filter(|row| row.id == title).count(), 1);
        prop_assert_eq!(&table.rows[0].id, &title);
    }

    /// k variants give k + 1 rows and an image span of k + 1.
    #[test]
    fn prop_group_size(k in 0usize..12) {
        let config = TableConfig::default();
        let mut r = ruleset("Parent");
        for i in 0..k {
            r.add_variant(ruleset(&format!("Variant {i}")));
        }

        let mut table = Table::new("t", 2);
        add_rows_to_table(&r, &mut table, &config);

        prop_assert_eq!(table.len(), k + 1);
        prop_assert_eq!(table.rows[0].cell(CellKind::Image).unwrap().row_span as usize, k + 1);
        for (i, row) in table.rows.iter().skip(1).enumerate() {
            prop_assert_eq!(&row.id, &format!("Variant {i}"));
            prop_assert!(row.is_variant);
        }
    }

    /// No playable links means an empty summary.
    #[test]
    fn prop_no_playable_links_is_empty(title in title_strategy()) {
        let r = ruleset(&title);
        let summary = r.playable_links_summary();
        prop_assert!(summary.children().is_empty());
        prop_assert_eq!(summary.plain_text(), "");
    }

    /// A null information URL leaves the label equal to the title, unlinked.
    #[test]
    fn prop_unlinked_label_is_title(title in title_strategy()) {
        let r = ruleset(&title);
        prop_assert_eq!(&r.information_link.label, &title);
        prop_assert!(r.information_link.url.is_none());
        prop_assert!(!r.information_link.to_node().walk().any(|n| matches!(n, Node::Link { .. })), "unlinked label must not produce a Link node");
    }

    /// Recursive depth gives every descendant a row.
    #[test]
    fn prop_recursive_rows_cover_tree(children in 0usize..5, grandchildren in 0usize..5) {
        let config = TableConfig::default().with_variant_depth(VariantDepth::Recursive);
        let mut root = ruleset("Root");
        for i in 0..children {
            let mut child = ruleset(&format!("Child {i}"));
            for j in 0..grandchildren {
                child.add_variant(ruleset(&format!("Grandchild {i}.{j}")));
            }
            root.add_variant(child);
        }

        let mut table = Table::new("t", 2);
        add_rows_to_table(&root, &mut table, &config);

        let expected = 1 + children * (1 + grandchildren);
        prop_assert_eq!(table.len(), expected);
        prop_assert_eq!(table.rows[0].cell(CellKind::Image).unwrap().row_span as usize, expected);
    }
}
