//! Name and address extraction from author-style fields.
//!
//! RSS `<author>`, `<managingEditor>` and `<webMaster>` commonly hold values
//! like `john@example.com (John Doe)`. Four layouts are recognized, tried in
//! order; the first that matches wins:
//!
//! 1. `address (name)`
//! 2. `name (address)`
//! 3. a bare name
//! 4. a bare address
//!
//! Matching is syntactic only, no email validation is done.

use tracing::trace;

/// A name and address pair. Absent parts are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameAddress {
    pub name: String,
    pub address: String,
}

impl NameAddress {
    /// Create a pair from its parts.
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    /// True when neither a name nor an address was found.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.address.is_empty()
    }
}

/// Attempts to read one layout from the (trimmed) input.
type Matcher = fn(&str) -> Option<NameAddress>;

/// Layouts in precedence order.
const MATCHERS: [(&str, Matcher); 4] = [
    ("address (name)", address_then_name),
    ("name (address)", name_then_address),
    ("name", bare_name),
    ("address", bare_address),
];

/// Parse a name/address string.
///
/// Never fails: input matching none of the layouts yields an empty pair.
///
/// # Examples
/// ```
/// use feedtext::name_address::{parse_name_address, NameAddress};
///
/// assert_eq!(
///     parse_name_address("john@example.com (John Doe)"),
///     NameAddress::new("John Doe", "john@example.com")
/// );
/// assert_eq!(
///     parse_name_address("John Doe (john@example.com)"),
///     NameAddress::new("John Doe", "john@example.com")
/// );
/// assert!(parse_name_address("a@b@c (x@y)").is_empty());
/// ```
pub fn parse_name_address(text: &str) -> NameAddress {
    let text = text.trim();
    if text.is_empty() {
        return NameAddress::default();
    }

    MATCHERS
        .iter()
        .find_map(|(layout, matcher)| {
            let found = matcher(text)?;
            trace!(layout, "matched name/address layout");
            Some(found)
        })
        .unwrap_or_default()
}

/// Split `prefix (inner)` into its parts. The parenthesis must be preceded
/// by whitespace.
fn split_parenthesized(text: &str, open: usize) -> Option<(&str, &str)> {
    let prefix = &text[..open];
    if !prefix.ends_with(char::is_whitespace) {
        return None;
    }
    let inner = text[open + 1..].strip_suffix(')')?;
    Some((prefix.trim_end(), inner))
}

/// An address: text on both sides of the first `@`.
fn is_address(text: &str) -> bool {
    matches!(text.split_once('@'), Some((local, domain)) if !local.is_empty() && !domain.is_empty())
}

/// `john@example.com (John Doe)`
fn address_then_name(text: &str) -> Option<NameAddress> {
    let open = text.find(char::is_whitespace)?;
    let address = &text[..open];
    let rest = text[open..].trim_start();
    let name = rest.strip_prefix('(')?.strip_suffix(')')?;

    if !is_address(address) || name.is_empty() || name.contains('@') {
        return None;
    }
    Some(NameAddress::new(name, address))
}

/// `John Doe (john@example.com)`
fn name_then_address(text: &str) -> Option<NameAddress> {
    // The name holds no '@', so the address opens before the first one
    let first_at = text.find('@')?;

    // Prefer the longest name: try each '(' from the right
    text[..first_at].rmatch_indices('(').find_map(|(open, _)| {
        let (name, address) = split_parenthesized(text, open)?;
        let (_, domain) = address.split_once('@')?;
        if name.is_empty() || !is_address(address) || domain.contains(')') {
            return None;
        }
        Some(NameAddress::new(name, address))
    })
}

/// `John Doe`
fn bare_name(text: &str) -> Option<NameAddress> {
    if text.contains(['@', '(', ')']) {
        return None;
    }
    Some(NameAddress::new(text, ""))
}

/// `john@example.com`
fn bare_address(text: &str) -> Option<NameAddress> {
    if text.contains(['(', ')']) || text.matches('@').count() != 1 || !is_address(text) {
        return None;
    }
    Some(NameAddress::new("", text))
}
