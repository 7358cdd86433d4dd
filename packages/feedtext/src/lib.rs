//! feedtext - Lenient text decoding for syndication feeds.
//!
//! Feed parsers for RSS, Atom and friends all need the same step: turning
//! the raw markup of a field into plain text. Real-world feeds get this
//! wrong in many ways (bare ampersands, unterminated entities, CDATA mixed
//! with escaped text), so decoding here prefers passing text through over
//! failing.
//!
//! # Example
//!
//! ```
//! use feedtext::{decode_entities, parse_name_address, parse_text, strip_cdata};
//! use feedtext::xml::{find_by_path, parse_document};
//!
//! assert_eq!(decode_entities("Q&amp;A").unwrap(), "Q&A");
//! assert_eq!(strip_cdata("<![CDATA[<b>]]>&lt;"), "<b><");
//!
//! let doc = parse_document(
//!     "<rss><channel><title><![CDATA[News & Views]]></title></channel></rss>",
//! ).unwrap();
//! let title = find_by_path(doc.root_element(), "channel/title").unwrap();
//! assert_eq!(parse_text(&title).unwrap(), "News & Views");
//!
//! let author = parse_name_address("jane@example.com (Jane Roe)");
//! assert_eq!(author.name, "Jane Roe");
//! ```
//!
//! # Architecture
//!
//! - [`entities`]: entity and character reference decoding
//! - [`cdata`]: CDATA section unwrapping
//! - [`text`]: element text extraction
//! - [`name_address`]: author field parsing
//! - [`xml`]: document parsing and raw markup access via roxmltree
//! - [`config`]: constants
//! - [`error`]: error types and Result alias
//! - [`cli`]: command-line interface

pub mod cdata;
pub mod cli;
pub mod config;
pub mod entities;
pub mod error;
pub mod name_address;
pub mod text;
pub mod xml;

pub use cdata::strip_cdata;
pub use entities::{decode_entities, decode_entities_lossy};
pub use error::{DecodeError, FeedTextError, Result};
pub use name_address::{parse_name_address, NameAddress};
pub use text::{parse_text, parse_text_lossy};
pub use xml::InnerMarkup;
