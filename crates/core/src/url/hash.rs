use std::collections::BTreeMap;

/// The address without its fragment; `None` when nothing precedes the `#`.
pub fn url_without_hash(url: &str) -> Option<&str> {
    url.split('#').next().filter(|head| !head.is_empty())
}

/// Text between the first and second `#`; `None` when absent or empty.
///
/// # Examples
///
/// ```
/// use nice_utils_core::url::hash;
///
/// assert_eq!(hash("https://example.com/#section"), Some("section"));
/// assert_eq!(hash("https://example.com/"), None);
/// assert_eq!(hash("https://example.com/#"), None);
/// ```
pub fn hash(url: &str) -> Option<&str> {
    url.split('#').nth(1).filter(|fragment| !fragment.is_empty())
}

/// Parses `key=value&key2=value2` fragment data.
///
/// A leading `#` is ignored, a piece without `=` maps to an empty value and
/// anything after a second `=` in a piece is dropped. Keys and values are
/// percent-decoded when possible.
///
/// # Examples
///
/// ```
/// use nice_utils_core::url::parse_hash;
///
/// let data = parse_hash("#tab=settings&open&name=J%C3%BCrgen");
/// assert_eq!(data["tab"], "settings");
/// assert_eq!(data["open"], "");
/// assert_eq!(data["name"], "Jürgen");
/// ```
pub fn parse_hash(hash: &str) -> BTreeMap<String, String> {
    let hash = hash.strip_prefix('#').unwrap_or(hash);
    hash.split('&')
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            let mut parts = piece.split('=');
            let key = parts.next().unwrap_or_default();
            let value = parts.next().unwrap_or_default();
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// A single entry from [`parse_hash`].
pub fn hash_param(hash: &str, name: &str) -> Option<String> {
    parse_hash(hash).remove(name)
}

fn decode_component(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}
