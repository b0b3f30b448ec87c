//! Pure helpers over address strings: query strings, hashes and encoding.
//!
//! Nothing here touches a host location; see `nice_utils_host` for helpers
//! that fall back to the current address.

mod error;
mod hash;
mod query;
mod sanitize;

pub use error::{Result, UrlError};
pub use hash::{hash, hash_param, parse_hash, url_without_hash};
pub use query::{query_param, query_params};
pub use sanitize::{url_decode, url_encode};
