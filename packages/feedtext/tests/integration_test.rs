//! End-to-end tests over real-shaped feed documents.
//!
//! Parses RSS 2.0 and Atom fixtures with roxmltree and runs the text
//! extraction on the fields a feed parser would read.

use std::fs;
use std::path::Path;

use feedtext::xml::{find_by_path, find_children, find_descendants, parse_document};
use feedtext::{parse_name_address, parse_text, parse_text_lossy, NameAddress};
use pretty_assertions::assert_eq;
use roxmltree::Node;

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn text_at(node: Node<'_, '_>, path: &str) -> String {
    let target = find_by_path(node, path).unwrap_or_else(|| panic!("missing {path}"));
    parse_text(&target).unwrap()
}

#[test]
fn test_rss_channel_fields() {
    let xml = load_fixture("rss2.xml");
    let doc = parse_document(&xml).unwrap();
    let rss = doc.root_element();

    assert_eq!(text_at(rss, "channel/title"), "Tom & Jerry's Weblog");
    assert_eq!(text_at(rss, "channel/link"), "https://example.com/");
    assert_eq!(
        text_at(rss, "channel/description"),
        "Notes on <em>cats</em> & mice"
    );
}

#[test]
fn test_rss_people() {
    let xml = load_fixture("rss2.xml");
    let doc = parse_document(&xml).unwrap();
    let rss = doc.root_element();

    assert_eq!(
        parse_name_address(&text_at(rss, "channel/managingEditor")),
        NameAddress::new("Jane Roe", "editor@example.com")
    );
    assert_eq!(
        parse_name_address(&text_at(rss, "channel/webMaster")),
        NameAddress::new("Web Team", "webmaster@example.com")
    );

    let authors: Vec<NameAddress> = find_descendants(rss, "author")
        .map(|n| parse_name_address(&parse_text(&n).unwrap()))
        .collect();
    assert_eq!(
        authors,
        vec![
            NameAddress::new("", "john@example.com"),
            NameAddress::new("John Doe", ""),
        ]
    );

    // dc:creator is matched by its local name
    let creator = find_descendants(rss, "creator").next().unwrap();
    assert_eq!(parse_text(&creator).unwrap(), "Jane Roe");
}

#[test]
fn test_rss_items() {
    let xml = load_fixture("rss2.xml");
    let doc = parse_document(&xml).unwrap();
    let channel = find_by_path(doc.root_element(), "channel").unwrap();
    let items: Vec<_> = find_children(channel, "item").collect();
    assert_eq!(items.len(), 2);

    assert_eq!(
        text_at(items[0], "title"),
        "<b>Bold</b> claims \u{2013} part 1"
    );
    assert_eq!(
        text_at(items[0], "description"),
        "Intro: <p>5 < 6 & 7 > 3</p> \u{a9} 2024"
    );
    assert_eq!(text_at(items[1], "title"), "Second post");
}

#[test]
fn test_rss_multiple_cdata_sections() {
    let xml = load_fixture("rss2.xml");
    let doc = parse_document(&xml).unwrap();
    let channel = find_by_path(doc.root_element(), "channel").unwrap();
    let second = find_children(channel, "item").nth(1).unwrap();
    let description = find_by_path(second, "description").unwrap();

    assert_eq!(
        parse_text(&description).unwrap(),
        "part one and <![CDATA[part two]]>"
    );
    assert_eq!(parse_text_lossy(&description), "part one and part two");
}

#[test]
fn test_atom_fields() {
    let xml = load_fixture("atom.xml");
    let doc = parse_document(&xml).unwrap();
    let feed = doc.root_element();

    assert_eq!(text_at(feed, "title"), "Example \"Atom\" Feed");
    assert_eq!(text_at(feed, "subtitle"), "<i>A</i> &amp; B");
    assert_eq!(
        parse_name_address(&text_at(feed, "author/name")),
        NameAddress::new("John Doe", "")
    );
    assert_eq!(text_at(feed, "author/email"), "john@example.com");
}

#[test]
fn test_atom_entry_content() {
    let xml = load_fixture("atom.xml");
    let doc = parse_document(&xml).unwrap();
    let entry = find_by_path(doc.root_element(), "entry").unwrap();

    // CDATA payload keeps its entity text
    assert_eq!(text_at(entry, "title"), "Caf&eacute; <b>review</b>");
    assert_eq!(text_at(entry, "summary"), "Plain summary");
    assert_eq!(
        text_at(entry, "content"),
        r#"<div xmlns="http://www.w3.org/1999/xhtml"><p>Hello & welcome</p></div>"#
    );
}

#[test]
fn test_malformed_document_is_rejected_before_extraction() {
    let err = parse_document("<rss><channel><title>x</channel></rss>").unwrap_err();
    assert!(matches!(err, feedtext::FeedTextError::XmlParse(_)));
}
