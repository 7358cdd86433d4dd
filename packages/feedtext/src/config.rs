//! Constants shared by the decoders and the command-line interface.

/// Marker opening a CDATA section.
pub const CDATA_START: &str = "<![CDATA[";

/// Marker closing a CDATA section.
pub const CDATA_END: &str = "]]>";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// The five predefined XML entities and the characters they stand for.
pub const PREDEFINED_ENTITIES: [(&str, char); 5] = [
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("amp", '&'),
];

/// Look up a predefined entity by name.
///
/// # Examples
/// ```
/// use feedtext::config::predefined_entity;
///
/// assert_eq!(predefined_entity("amp"), Some('&'));
/// assert_eq!(predefined_entity("nbsp"), None);
/// ```
pub fn predefined_entity(name: &str) -> Option<char> {
    PREDEFINED_ENTITIES
        .iter()
        .find(|(entity, _)| *entity == name)
        .map(|(_, c)| *c)
}
