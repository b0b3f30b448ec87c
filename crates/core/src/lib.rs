//! Pure utility functions - no I/O, no async, no side effects.
//!
//! This crate provides:
//! - Nested-value lookup by dotted/bracketed path (`path`)
//! - Type predicates and array helpers for JSON values (`value`)
//! - String and HTML helpers (`text`)
//! - Query-string, hash and encoding helpers over address strings (`url`)
//! - Byte and percentage formatting (`format`)
//! - Random numbers and string hashing (`random`, behind the `random` feature)
//!
//! # Example
//!
//! ```
//! use nice_utils_core::{format, path, text, url};
//! use serde_json::json;
//!
//! let data = json!({"user": {"emails": ["a@x.test", "b@x.test"]}});
//! assert_eq!(path::resolve(&data, "user.emails[1]"), Some(&json!("b@x.test")));
//! assert_eq!(path::resolve(&data, "user.phone"), None);
//!
//! assert_eq!(text::truncate("A long title", 6), "A long...");
//! assert_eq!(url::query_param("/search?q=rust", "q").as_deref(), Some("rust"));
//! assert_eq!(format::nice_bytes(2048), "2.00 KB");
//! ```

pub mod format;
pub mod path;
#[cfg(feature = "random")]
pub mod random;
pub mod text;
pub mod url;
pub mod value;
