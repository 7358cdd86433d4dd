//! Error types for feed text decoding.
//!
//! Uses the dual-error pattern: `DecodeError` for the failures of a single
//! decode call, and `FeedTextError` for library consumers working with whole
//! documents.

use thiserror::Error;

/// Failure of a single entity decode call.
///
/// Only well-formed but unresolvable references produce an error. Malformed
/// syntax (missing `;`, whitespace inside the reference) is passed through
/// as literal text instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Digits of a numeric character reference do not parse in its base.
    #[error("invalid numeric reference")]
    InvalidNumericReference,

    /// A named reference outside the predefined set.
    #[error("unknown predefined entity &{0};")]
    UnknownEntity(String),

    /// Reserved. Unterminated references are passed through literally, so
    /// no decode path currently produces this.
    #[error("truncated entity")]
    TruncatedEntity,
}

/// Main error type for the feedtext library.
#[derive(Debug, Error)]
pub enum FeedTextError {
    /// Entity decoding failed.
    #[error("Failed to decode text: {0}")]
    Decode(#[from] DecodeError),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// No element with the requested tag name.
    #[error("Missing required XML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for feedtext operations.
pub type Result<T> = std::result::Result<T, FeedTextError>;
