//! XML entity decoding for feed text.
//!
//! Handles the predefined entities (`&lt;` `&gt;` `&amp;` `&quot;` `&apos;`)
//! and numeric character references (`&#65;` `&#x41;`).
//!
//! Decoding is lenient about syntax and strict about meaning:
//! - an `&` with no `;` after it is copied through as literal text
//! - an `&...;` span containing whitespace is copied through as literal text
//! - a well-formed reference that cannot be resolved is an error
//!
//! Both lenient cases stop the scan: everything from the offending `&` to
//! the end of the input is emitted unchanged.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::config::predefined_entity;
use crate::error::DecodeError;

/// Scanner state while walking the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Copying literal text starting at `pos`.
    Scanning { pos: usize },
    /// A reference spanning `amp..=semi` is ready to resolve.
    InEntity { amp: usize, semi: usize },
    /// Malformed reference syntax at `from`; the rest is literal.
    LiteralFallback { from: usize },
    Done,
}

/// Decode XML entity references in a text span.
///
/// Returns the fully decoded string, or an error if a reference is
/// well-formed but unknown. No partial output is returned on error.
///
/// # Examples
/// ```
/// use feedtext::entities::decode_entities;
/// use feedtext::DecodeError;
///
/// assert_eq!(decode_entities("Fish &amp; Chips").unwrap(), "Fish & Chips");
/// assert_eq!(decode_entities("&#x41;&#66;").unwrap(), "AB");
///
/// // A bare ampersand is not an entity
/// assert_eq!(decode_entities("a & b").unwrap(), "a & b");
///
/// assert_eq!(
///     decode_entities("&nbsp;"),
///     Err(DecodeError::UnknownEntity("nbsp".to_string()))
/// );
/// ```
pub fn decode_entities(text: &str) -> Result<String, DecodeError> {
    let mut out = String::with_capacity(text.len());
    let mut state = State::Scanning { pos: 0 };

    loop {
        state = match state {
            State::Scanning { pos } => match text[pos..].find('&') {
                None => {
                    out.push_str(&text[pos..]);
                    State::Done
                }
                Some(offset) => {
                    let amp = pos + offset;
                    out.push_str(&text[pos..amp]);
                    next_reference(text, amp)
                }
            },
            State::InEntity { amp, semi } => {
                out.push(decode_reference(&text[amp + 1..semi])?);
                State::Scanning { pos: semi + 1 }
            }
            State::LiteralFallback { from } => {
                out.push_str(&text[from..]);
                State::Done
            }
            State::Done => return Ok(out),
        };
    }
}

/// Decide what the `&` at `amp` starts.
fn next_reference(text: &str, amp: usize) -> State {
    let Some(offset) = text[amp..].find(';') else {
        trace!(position = amp, "unterminated entity, passing through");
        return State::LiteralFallback { from: amp };
    };
    let semi = amp + offset;

    if text[amp + 1..semi].contains(char::is_whitespace) {
        trace!(position = amp, "whitespace inside entity, passing through");
        return State::LiteralFallback { from: amp };
    }

    State::InEntity { amp, semi }
}

/// Resolve the body of a reference, i.e. the text between `&` and `;`.
fn decode_reference(body: &str) -> Result<char, DecodeError> {
    match body.strip_prefix('#') {
        Some(numeric) => decode_numeric(numeric),
        None => {
            predefined_entity(body).ok_or_else(|| DecodeError::UnknownEntity(body.to_string()))
        }
    }
}

/// Resolve a numeric reference body (after the `#`).
///
/// A leading `x` selects hexadecimal. Code points that are not Unicode
/// scalar values decode to U+FFFD.
fn decode_numeric(numeric: &str) -> Result<char, DecodeError> {
    let (digits, radix) = match numeric.strip_prefix('x') {
        Some(hex) => (hex, 16),
        None => (numeric, 10),
    };

    // from_str_radix would accept a leading '+'
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(DecodeError::InvalidNumericReference);
    }

    let code_point =
        u32::from_str_radix(digits, radix).map_err(|_| DecodeError::InvalidNumericReference)?;

    Ok(char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER))
}

/// Decode entities, falling back to the input on failure.
///
/// Borrows the input when it contains no `&` or when decoding fails.
///
/// # Examples
/// ```
/// use feedtext::entities::decode_entities_lossy;
///
/// assert_eq!(decode_entities_lossy("&lt;p&gt;"), "<p>");
/// assert_eq!(decode_entities_lossy("&bogus; &lt;"), "&bogus; &lt;");
/// ```
pub fn decode_entities_lossy(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    match decode_entities(text) {
        Ok(decoded) => Cow::Owned(decoded),
        Err(e) => {
            debug!(error = %e, "keeping segment undecoded");
            Cow::Borrowed(text)
        }
    }
}
