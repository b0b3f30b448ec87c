use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static QUERY_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]+([^=&]+)=([^&]*)").expect("query pattern is valid"));

/// Every `key=value` pair introduced by `?` or `&` anywhere in `url`.
///
/// Values are percent-decoded (left verbatim when decoding fails). A key
/// that appears twice keeps its last value.
///
/// # Examples
///
/// ```
/// use nice_utils_core::url::query_params;
///
/// let params = query_params("https://example.com/?q=rust%20lang&page=2");
/// assert_eq!(params["q"], "rust lang");
/// assert_eq!(params["page"], "2");
/// ```
pub fn query_params(url: &str) -> BTreeMap<String, String> {
    QUERY_PAIR
        .captures_iter(url)
        .map(|caps| {
            let key = caps[1].to_string();
            let raw = &caps[2];
            let value = urlencoding::decode(raw)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| raw.to_string());
            (key, value)
        })
        .collect()
}

/// A single query parameter from `url`.
pub fn query_param(url: &str, name: &str) -> Option<String> {
    query_params(url).remove(name)
}
