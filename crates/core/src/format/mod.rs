//! Human-friendly number formatting.

mod bytes;
mod percentage;

pub use bytes::nice_bytes;
pub use percentage::{percentage, percentage_str};
