//! Locations and viewports backed by plain values, for non-browser hosts.

use std::sync::{Mutex, PoisonError, RwLock};

use url::Url;

use super::{Location, ScrollPosition, Viewport};
use crate::error::{HostError, Result};

/// A [`Location`] held in memory and backed by a parsed [`Url`].
///
/// Navigation resolves targets against the current address the way a
/// browser does. Pushed history entries are recorded.
#[derive(Debug)]
pub struct StaticLocation {
    url: RwLock<Url>,
    history: RwLock<Vec<String>>,
    push_state: bool,
}

impl StaticLocation {
    /// Parse `url` as the starting address.
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|e| HostError::InvalidUrl(e.to_string()))?;
        Ok(Self::from_url(url))
    }

    pub fn from_url(url: Url) -> Self {
        Self {
            history: RwLock::new(vec![url.to_string()]),
            url: RwLock::new(url),
            push_state: true,
        }
    }

    /// Simulate a host without the history API.
    pub fn without_push_state(mut self) -> Self {
        self.push_state = false;
        self
    }

    /// Addresses pushed so far, starting with the initial one.
    pub fn history(&self) -> Vec<String> {
        self.history
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn current(&self) -> Url {
        self.url
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn resolve(&self, target: &str) -> Result<Url> {
        self.current()
            .join(target)
            .map_err(|e| HostError::InvalidUrl(e.to_string()))
    }

    fn set(&self, url: Url) {
        *self.url.write().unwrap_or_else(PoisonError::into_inner) = url;
    }
}

impl Location for StaticLocation {
    fn href(&self) -> String {
        self.current().to_string()
    }

    fn pathname(&self) -> String {
        self.current().path().to_string()
    }

    fn search(&self) -> String {
        match self.current().query() {
            Some(query) if !query.is_empty() => format!("?{query}"),
            _ => String::new(),
        }
    }

    fn hash(&self) -> String {
        match self.current().fragment() {
            Some(fragment) if !fragment.is_empty() => format!("#{fragment}"),
            _ => String::new(),
        }
    }

    fn replace(&self, url: &str) -> Result<()> {
        let next = self.resolve(url)?;
        self.set(next);
        Ok(())
    }

    fn set_hash(&self, hash: &str) -> Result<()> {
        let mut next = self.current();
        let fragment = hash.strip_prefix('#').unwrap_or(hash);
        next.set_fragment((!fragment.is_empty()).then_some(fragment));
        self.set(next);
        Ok(())
    }

    fn supports_push_state(&self) -> bool {
        self.push_state
    }

    fn push_state(&self, url: &str) -> Result<()> {
        let next = self.resolve(url)?;
        self.history
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(next.to_string());
        self.set(next);
        Ok(())
    }
}

/// A [`Viewport`] that only remembers the last position it was given.
#[derive(Debug, Default)]
pub struct StaticViewport {
    position: Mutex<ScrollPosition>,
}

impl StaticViewport {
    pub fn new(position: ScrollPosition) -> Self {
        Self {
            position: Mutex::new(position),
        }
    }
}

impl Viewport for StaticViewport {
    fn scroll_position(&self) -> ScrollPosition {
        *self.position.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_scroll_position(&self, position: ScrollPosition) {
        *self.position.lock().unwrap_or_else(PoisonError::into_inner) = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_address_parts() {
        let location = StaticLocation::new("https://example.com/app/page?x=1#top").unwrap();
        assert_eq!(location.href(), "https://example.com/app/page?x=1#top");
        assert_eq!(location.pathname(), "/app/page");
        assert_eq!(location.search(), "?x=1");
        assert_eq!(location.hash(), "#top");
    }

    #[test]
    fn empty_parts_are_empty_strings() {
        let location = StaticLocation::new("https://example.com").unwrap();
        assert_eq!(location.pathname(), "/");
        assert_eq!(location.search(), "");
        assert_eq!(location.hash(), "");
    }

    #[test]
    fn rejects_unparseable_addresses() {
        assert!(matches!(
            StaticLocation::new("not a url"),
            Err(HostError::InvalidUrl(_))
        ));
    }

    #[test]
    fn replace_resolves_relative_targets() {
        let location = StaticLocation::new("https://example.com/a/b?q=1#old").unwrap();
        location.replace("#").unwrap();
        assert_eq!(location.href(), "https://example.com/a/b?q=1#");
        assert_eq!(location.hash(), "");

        location.replace("../c").unwrap();
        assert_eq!(location.href(), "https://example.com/c");
        assert_eq!(location.history().len(), 1);
    }

    #[test]
    fn set_hash_accepts_leading_marker() {
        let location = StaticLocation::new("https://example.com/").unwrap();
        location.set_hash("#intro").unwrap();
        assert_eq!(location.hash(), "#intro");
        location.set_hash("").unwrap();
        assert_eq!(location.href(), "https://example.com/");
    }

    #[test]
    fn push_state_records_history() {
        let location = StaticLocation::new("https://example.com/").unwrap();
        location.push_state("/next?step=2").unwrap();
        assert_eq!(location.href(), "https://example.com/next?step=2");
        assert_eq!(
            location.history(),
            vec!["https://example.com/", "https://example.com/next?step=2"]
        );
    }

    #[test]
    fn push_state_support_can_be_disabled() {
        let location = StaticLocation::new("https://example.com/")
            .unwrap()
            .without_push_state();
        assert!(!location.supports_push_state());
    }

    #[test]
    fn viewport_remembers_position() {
        let viewport = StaticViewport::default();
        assert_eq!(viewport.scroll_position(), ScrollPosition::default());
        let position = ScrollPosition {
            top: 120.0,
            left: 4.0,
        };
        viewport.set_scroll_position(position);
        assert_eq!(viewport.scroll_position(), position);
    }
}
