//! XML utility functions for navigating feed documents.

use roxmltree::{Document, Node, ParsingOptions};

use crate::error::Result;

/// Parse a feed document.
///
/// DTDs are allowed since RSS 0.91 feeds commonly carry a doctype.
///
/// # Examples
/// ```
/// use feedtext::xml::parse_document;
///
/// let xml = r#"<!DOCTYPE rss SYSTEM "http://my.netscape.com/publish/formats/rss-0.91.dtd"><rss/>"#;
/// let doc = parse_document(xml).unwrap();
/// assert_eq!(doc.root_element().tag_name().name(), "rss");
/// ```
pub fn parse_document(text: &str) -> Result<Document<'_>> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    Ok(Document::parse_with_options(text, options)?)
}

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use feedtext::xml::get_tag_name;
///
/// let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>t</title></feed>"#;
/// let doc = Document::parse(xml).unwrap();
/// let title = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(title), "title");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Find the first child element with the given tag name.
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && get_tag_name(*child) == tag)
}

/// Find all child elements with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use feedtext::xml::find_children;
///
/// let xml = r#"<channel><item/><title/><item/></channel>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let items: Vec<_> = find_children(doc.root_element(), "item").collect();
/// assert_eq!(items.len(), 2);
/// ```
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && get_tag_name(*child) == tag)
}

/// Find all descendant elements with the given tag name, in document order.
pub fn find_descendants<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants()
        .filter(move |n| n.is_element() && get_tag_name(*n) == tag)
}

/// Find a descendant element matching a path of tag names.
///
/// # Arguments
/// * `node` - Starting node
/// * `path` - Slash-separated path of tag names (e.g., "channel/title")
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use feedtext::xml::find_by_path;
///
/// let xml = r#"<rss><channel><title>News</title></channel></rss>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let title = find_by_path(doc.root_element(), "channel/title");
/// assert_eq!(title.and_then(|t| t.text()), Some("News"));
/// ```
pub fn find_by_path<'a, 'input>(node: Node<'a, 'input>, path: &str) -> Option<Node<'a, 'input>> {
    let mut current = node;

    for part in path.split('/') {
        current = find_child(current, part)?;
    }

    Some(current)
}
