//! String manipulation helpers.

pub mod html;
mod strings;

pub use html::{html_escape, html_unescape, strip_tags};
pub use strings::{only_numbers, replace_all, replace_bulk, rtrim, truncate};
