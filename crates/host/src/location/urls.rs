use std::collections::BTreeMap;

use nice_utils_core::url as pure;

use super::{Location, Viewport};
use crate::error::Result;

/// Address helpers bound to an optional explicit URL.
///
/// Without an explicit URL every query reads the current [`Location`].
pub struct Urls<'a, L: Location + ?Sized> {
    location: &'a L,
    url: Option<String>,
}

impl<'a, L: Location + ?Sized> Urls<'a, L> {
    /// An empty `url` is treated like `None`.
    pub fn new(location: &'a L, url: Option<&str>) -> Self {
        Self {
            location,
            url: url.filter(|url| !url.is_empty()).map(str::to_string),
        }
    }

    /// Reads the current location only.
    pub fn current(location: &'a L) -> Self {
        Self::new(location, None)
    }

    fn address(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => self.location.href(),
        }
    }

    pub fn params(&self) -> BTreeMap<String, String> {
        pure::query_params(&self.address())
    }

    pub fn param(&self, name: &str) -> Option<String> {
        pure::query_param(&self.address(), name)
    }

    pub fn url_without_hash(&self) -> Option<String> {
        pure::url_without_hash(&self.address()).map(str::to_string)
    }

    /// Fragment text without the leading `#`.
    pub fn hash(&self) -> Option<String> {
        match &self.url {
            Some(url) => pure::hash(url).map(str::to_string),
            None => {
                let hash = self.location.hash();
                let hash = hash.strip_prefix('#').unwrap_or(hash.as_str()).trim();
                (!hash.is_empty()).then(|| hash.to_string())
            }
        }
    }

    /// Every `key=value` pair in the fragment, or `None` without one.
    pub fn parse_hash(&self) -> Option<BTreeMap<String, String>> {
        self.hash().map(|hash| pure::parse_hash(&hash))
    }

    pub fn hash_param(&self, name: &str) -> Option<String> {
        self.parse_hash()?.remove(name)
    }

    /// Drops the fragment from the current location.
    pub fn remove_hash(&self) -> Result<()> {
        self.location.replace("#")
    }

    pub fn url_path(&self) -> String {
        self.location.pathname()
    }
}

/// Points the current location at `#param`, or clears the fragment.
///
/// Prefers a history entry; hosts without push-state get the hash set
/// directly with the scroll position put back afterwards.
pub fn change_url_hash<L, V>(location: &L, viewport: &V, param: Option<&str>) -> Result<()>
where
    L: Location + ?Sized,
    V: Viewport + ?Sized,
{
    let fragment = match param {
        Some(param) if !param.is_empty() => format!("#{param}"),
        _ => String::new(),
    };

    if location.supports_push_state() {
        let target = format!("{}{}{}", location.pathname(), location.search(), fragment);
        tracing::debug!(target = %target, "Pushing hash change");
        return location.push_state(&target);
    }

    let position = viewport.scroll_position();
    tracing::debug!(fragment = %fragment, "Setting hash without history");
    location.set_hash(&fragment)?;
    viewport.set_scroll_position(position);
    Ok(())
}
