//! Serializer tests.
//!
//! These tests render real rows and check the HTML and JSON output.

use cgt_ruleset_table::render::{render_row, Table};
use cgt_ruleset_table::rulesets::sample_catalog;
use cgt_ruleset_table::{
    length_label, render_catalog, HtmlSerializer, JsonSerializer, Ruleset, TableConfig,
    TableSerializer,
};
use pretty_assertions::assert_eq;

fn single_row_table(r: &Ruleset, config: &TableConfig) -> Table {
    let mut table = Table::new(config.table_id.clone(), config.border);
    table.push(render_row(r, false, config));
    table
}

/// Test the full HTML of a bare row.
#[test]
fn test_nim_row_html() {
    let config = TableConfig::default().with_page_url("https://example.org/table");
    let nim = Ruleset::new("Nim", None, true, length_label(true), "By XOR-rule.", "In P", " ");

    let html = HtmlSerializer::new()
        .serialize(&single_row_table(&nim, &config))
        .unwrap();

    let expected = concat!(
        "<table id=\"rulesetTable\" border=\"2\">\n",
        "  <tr id=\"Nim\">\n",
        "    <td><span style=\"font-size: large\">Nim</span>",
        "<div style=\"font-size: small\"></div>",
        "<p style=\"font-size: x-small\">-- <a href=\"https://example.org/table#Nim\">link here</a> --</p></td>\n",
        "    <td> </td>\n",
        "    <td>Impartial</td>\n",
        "    <td>Short</td>\n",
        "    <td>By XOR-rule.</td>\n",
        "    <td>In P</td>\n",
        "    <td> </td>\n",
        "  </tr>\n",
        "</table>\n",
    );
    assert_eq!(html, expected);
}

/// Test that row ids stay unencoded while anchors are encoded.
#[test]
fn test_ids_unencoded_anchors_encoded() {
    let config = TableConfig::default().with_page_url("https://example.org/table");
    let r = Ruleset::new("Gale's Nim", None, true, length_label(true), "?", "?", " ");

    let html = HtmlSerializer::new()
        .serialize(&single_row_table(&r, &config))
        .unwrap();
    assert!(html.contains("<tr id=\"Gale's Nim\">"));
    assert!(html.contains("href=\"https://example.org/table#Gale's%20Nim\""));
}

/// Test image, tooltip and row span markup.
#[test]
fn test_image_and_tooltip_html() {
    let config = TableConfig::default().with_maintainer("Ada");
    let r = Ruleset::new("Hex", None, false, length_label(true), "?", "?", " ")
        .with_image("https://example.org/hex.png")
        .with_brief_description("Connect your \"sides\" & win.")
        .with_variant(Ruleset::new("Rex", None, false, length_label(true), "?", "?", " "));

    let html = HtmlSerializer::new()
        .serialize(&single_row_table(&r, &config))
        .unwrap();

    assert!(html.contains("<td title=\"Connect your &quot;sides&quot; &amp; win.\">"));
    assert!(html.contains(concat!(
        "<td rowspan=\"2\"><div style=\"text-align: center\">",
        "<a href=\"https://example.org/hex.png\">",
        "<img src=\"https://example.org/hex.png\" ",
        "title=\"Know of a better image for Hex? Please let Ada know!\" ",
        "style=\"max-width: 100px\"></a></div></td>"
    )));
}

/// Test composite content markup.
#[test]
fn test_composite_content_html() {
    let config = TableConfig::default();
    let catalog = sample_catalog().unwrap();
    let clobber = catalog.find("Clobber").unwrap();

    let html = HtmlSerializer::new()
        .serialize(&single_row_table(clobber, &config))
        .unwrap();

    assert!(html.contains(concat!(
        "<td><span><a href=\"http://www.emis.de/journals/INTEGERS/papers/a1int2003/a1int2003.pdf\">",
        "NP-hard</a><br>In PSPACE</span></td>"
    )));
    assert!(html.contains(concat!(
        "<div style=\"font-size: small\"> Play it: ",
        "<a href=\"combGames/clobber.html\">HTML</a>, ",
        "<a href=\"http://www.gottfriedville.net/games/clobber/\">Java</a><br></div>"
    )));
}

/// Test that the JSON export round-trips the rendered table.
#[test]
fn test_json_export_round_trip() {
    let config = TableConfig::default();
    let table = render_catalog(&sample_catalog().unwrap(), &config);

    let json = JsonSerializer::pretty().serialize(&table).unwrap();
    let back: Table = serde_json::from_str(&json).unwrap();
    assert_eq!(back, table);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["rows"][0]["id"], "Amazons");
    assert_eq!(value["rows"][0]["cells"][1]["kind"], "image");
}

/// Test that both serializers work behind the trait.
#[test]
fn test_serializers_behind_trait() {
    let table = render_catalog(&sample_catalog().unwrap(), &TableConfig::default());
    let serializers: Vec<Box<dyn TableSerializer>> =
        vec![Box::new(HtmlSerializer::new()), Box::new(JsonSerializer::new())];

    let names: Vec<_> = serializers.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["html", "json"]);
    for serializer in &serializers {
        assert!(serializer.serialize(&table).unwrap().contains("Nim"));
    }
}
