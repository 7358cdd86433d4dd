//! CDATA section handling.
//!
//! Text outside CDATA sections is entity-decoded; CDATA payloads are copied
//! verbatim. Decoding here never fails: a segment that does not decode is
//! emitted as-is.

use tracing::debug;

use crate::config::{CDATA_END, CDATA_START};
use crate::entities::decode_entities_lossy;

/// Find `needle` in `text` at or after byte offset `from`.
pub(crate) fn find_from(text: &str, needle: &str, from: usize) -> Option<usize> {
    text[from..].find(needle).map(|idx| idx + from)
}

/// Remove CDATA markers from a span, decoding everything outside them.
///
/// Handles any number of CDATA sections. A start marker without a matching
/// end marker is not a CDATA section: the rest of the input from the end of
/// the previous section, marker included, is decoded as ordinary text.
///
/// # Examples
/// ```
/// use feedtext::cdata::strip_cdata;
///
/// assert_eq!(
///     strip_cdata("pre<![CDATA[raw&data]]>post"),
///     "preraw&datapost"
/// );
/// assert_eq!(
///     strip_cdata("&lt;<![CDATA[a]]>&amp;<![CDATA[<b>]]>"),
///     "<a&<b>"
/// );
/// ```
pub fn strip_cdata(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    while cursor < text.len() {
        let Some(start) = find_from(text, CDATA_START, cursor) else {
            out.push_str(&decode_entities_lossy(&text[cursor..]));
            break;
        };

        let payload_start = start + CDATA_START.len();
        let Some(end) = find_from(text, CDATA_END, payload_start) else {
            debug!(position = start, "unterminated CDATA section, decoding as text");
            out.push_str(&decode_entities_lossy(&text[cursor..]));
            break;
        };

        out.push_str(&decode_entities_lossy(&text[cursor..start]));
        out.push_str(&text[payload_start..end]);
        cursor = end + CDATA_END.len();
    }

    out
}
