//! XML collaborator: document parsing, navigation and raw markup access.

pub mod markup;
pub mod utils;

pub use markup::InnerMarkup;
pub use utils::{
    find_by_path, find_child, find_children, find_descendants, get_tag_name, parse_document,
};
