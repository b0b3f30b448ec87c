//! Address helpers that fall back to an injected current location.

mod static_location;
mod urls;

pub use static_location::{StaticLocation, StaticViewport};
pub use urls::{change_url_hash, Urls};

use crate::error::Result;

/// The host's current address (a browser's `window.location` plus history).
pub trait Location {
    /// Full address.
    fn href(&self) -> String;

    /// Path component, always starting with `/`.
    fn pathname(&self) -> String;

    /// Query string including its leading `?`, or empty.
    fn search(&self) -> String;

    /// Fragment including its leading `#`, or empty.
    fn hash(&self) -> String;

    /// Navigate to `url` (resolved against the current address) without
    /// adding a history entry.
    fn replace(&self, url: &str) -> Result<()>;

    /// Set the fragment directly; an empty value clears it.
    fn set_hash(&self, hash: &str) -> Result<()>;

    /// Whether [`push_state`](Self::push_state) is available.
    fn supports_push_state(&self) -> bool {
        true
    }

    /// Add a history entry for `url` and make it current.
    fn push_state(&self, url: &str) -> Result<()>;
}

/// Document scroll offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollPosition {
    pub top: f64,
    pub left: f64,
}

/// Access to the host's scroll position.
pub trait Viewport {
    fn scroll_position(&self) -> ScrollPosition;
    fn set_scroll_position(&self, position: ScrollPosition);
}
