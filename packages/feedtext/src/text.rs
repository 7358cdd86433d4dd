//! Text extraction from feed elements.
//!
//! Feed fields like `<title>` or `<description>` may hold escaped text,
//! a CDATA section, or a mix of both. These functions turn the raw inner
//! markup of such an element into plain text.

use tracing::{debug, trace};

use crate::cdata::{find_from, strip_cdata};
use crate::config::{CDATA_END, CDATA_START};
use crate::entities::decode_entities;
use crate::error::DecodeError;
use crate::xml::InnerMarkup;

/// Parse the text of an element.
///
/// The inner markup is trimmed, then entity-decoded. When it contains a
/// CDATA section, the first section's payload is kept verbatim and the text
/// before and after it is decoded. Later sections are not treated specially;
/// use [`parse_text_lossy`] for content with several.
///
/// # Errors
/// Returns [`DecodeError`] if the text outside the CDATA section holds an
/// unknown entity or an unparsable numeric reference.
///
/// # Examples
/// ```
/// use feedtext::text::parse_text;
/// use feedtext::xml::parse_document;
///
/// let doc = parse_document("<title> Tom &amp; <![CDATA[<Jerry>]]> </title>").unwrap();
/// assert_eq!(parse_text(&doc.root_element()).unwrap(), "Tom & <Jerry>");
/// ```
pub fn parse_text<E>(element: &E) -> Result<String, DecodeError>
where
    E: InnerMarkup + ?Sized,
{
    let markup = element.inner_markup().trim();

    let Some(start) = markup.find(CDATA_START) else {
        return decode_entities(markup);
    };

    let payload_start = start + CDATA_START.len();
    let Some(end) = find_from(markup, CDATA_END, payload_start) else {
        debug!("unterminated CDATA section, decoding as text");
        return decode_entities(markup);
    };

    trace!(start, end, "isolating first CDATA section");
    let before = decode_entities(&markup[..start])?;
    let payload = &markup[payload_start..end];
    let after = decode_entities(&markup[end + CDATA_END.len()..])?;

    Ok(format!("{before}{payload}{after}"))
}

/// Parse the text of an element without failing.
///
/// Every CDATA section is unwrapped and text that does not decode is kept
/// as written.
///
/// # Examples
/// ```
/// use feedtext::text::parse_text_lossy;
///
/// assert_eq!(
///     parse_text_lossy("  <![CDATA[a]]>&amp;<![CDATA[b]]>  "),
///     "a&b"
/// );
/// ```
pub fn parse_text_lossy<E>(element: &E) -> String
where
    E: InnerMarkup + ?Sized,
{
    strip_cdata(element.inner_markup().trim())
}
