//! Access to the raw, undecoded markup inside an element.
//!
//! roxmltree hands out decoded text, with entities resolved and CDATA
//! merged into text nodes. Feed fields need the markup as written, so it is
//! sliced out of the document input using the element's byte range.

use roxmltree::Node;

/// Source of an element's raw inner markup.
///
/// Implementors return the undecoded content between the element's start
/// and end tags. Structural well-formedness is the implementor's concern.
pub trait InnerMarkup {
    /// The raw markup between the start and end tags.
    fn inner_markup(&self) -> &str;
}

impl InnerMarkup for Node<'_, '_> {
    fn inner_markup(&self) -> &str {
        let raw = &self.document().input_text()[self.range()];
        if self.is_element() {
            element_content(raw)
        } else {
            raw
        }
    }
}

impl InnerMarkup for str {
    fn inner_markup(&self) -> &str {
        self
    }
}

impl InnerMarkup for String {
    fn inner_markup(&self) -> &str {
        self
    }
}

/// Slice the content out of a complete element `<tag ...>content</tag>`.
///
/// Self-closing elements have empty content.
fn element_content(raw: &str) -> &str {
    let Some(tag_end) = start_tag_end(raw) else {
        return "";
    };
    if raw[..tag_end].ends_with('/') {
        return "";
    }

    let content_start = tag_end + 1;
    let content_end = raw.rfind("</").unwrap_or(raw.len());
    if content_end < content_start {
        return "";
    }
    &raw[content_start..content_end]
}

/// Position of the `>` closing the start tag, skipping quoted attribute values.
fn start_tag_end(raw: &str) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (i, b) in raw.bytes().enumerate() {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(b),
            (None, b'>') => return Some(i),
            (None, _) => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roxmltree::Document;

    fn root_markup(xml: &str) -> String {
        let doc = Document::parse(xml).unwrap();
        doc.root_element().inner_markup().to_string()
    }

    #[test]
    fn test_plain_text_content() {
        assert_eq!(root_markup("<title>Hello</title>"), "Hello");
    }

    #[test]
    fn test_entities_stay_encoded() {
        assert_eq!(
            root_markup("<title>Tom &amp; Jerry &#x41;</title>"),
            "Tom &amp; Jerry &#x41;"
        );
    }

    #[test]
    fn test_cdata_markers_preserved() {
        assert_eq!(
            root_markup("<description><![CDATA[<p>hi</p>]]></description>"),
            "<![CDATA[<p>hi</p>]]>"
        );
    }

    #[test]
    fn test_child_markup_preserved() {
        assert_eq!(
            root_markup(r#"<content type="xhtml"><div><b>x</b></div></content>"#),
            "<div><b>x</b></div>"
        );
    }

    #[test]
    fn test_quoted_gt_in_attribute() {
        assert_eq!(root_markup(r#"<a title="1 > 0">text</a>"#), "text");
        assert_eq!(root_markup(r#"<a title='x>y'>text</a>"#), "text");
    }

    #[test]
    fn test_self_closing_and_empty() {
        assert_eq!(root_markup("<link/>"), "");
        assert_eq!(root_markup(r#"<link href="x" />"#), "");
        assert_eq!(root_markup("<title></title>"), "");
    }

    #[test]
    fn test_whitespace_kept() {
        assert_eq!(root_markup("<title>\n  x  \n</title>"), "\n  x  \n");
    }

    #[test]
    fn test_nested_element() {
        let xml = "<rss><channel><title>A &lt; B</title></channel></rss>";
        let doc = Document::parse(xml).unwrap();
        let title = doc
            .descendants()
            .find(|n| n.has_tag_name("title"))
            .unwrap();
        assert_eq!(title.inner_markup(), "A &lt; B");
    }

    #[test]
    fn test_str_is_its_own_markup() {
        assert_eq!("a &amp; b".inner_markup(), "a &amp; b");
        assert_eq!(String::from("x").inner_markup(), "x");
    }
}
