//! HTML escaping and tag stripping.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static TAGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?([a-z][a-z0-9]*)\b[^>]*>").expect("tag pattern is valid")
});

static COMMENTS_AND_PHP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<!--[\s\S]*?-->|<\?(?:php)?[\s\S]*?\?>").expect("comment pattern is valid")
});

static ALLOWED_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[a-z][a-z0-9]*>").expect("allowed tag pattern is valid"));

/// Escapes the five HTML-significant characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Reverses [`html_escape`]. `&amp;` is decoded last so `&amp;lt;` yields `&lt;`.
pub fn html_unescape(s: &str) -> String {
    s.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Removes HTML tags, comments and `<?php ?>` blocks.
///
/// `allowed` lists tags to keep, e.g. `"<b><i>"`. Matching ignores case.
///
/// # Examples
///
/// ```
/// use nice_utils_core::text::strip_tags;
///
/// let html = "<p>Hello <b>bold</b> <!-- note --><i>world</i></p>";
/// assert_eq!(strip_tags(html, ""), "Hello bold world");
/// assert_eq!(strip_tags(html, "<b>"), "Hello <b>bold</b> world");
/// ```
pub fn strip_tags(input: &str, allowed: &str) -> String {
    let allowed = allowed.to_lowercase();
    let allowed: Vec<&str> = ALLOWED_TAG
        .find_iter(&allowed)
        .map(|m| m.as_str())
        .collect();

    let without_comments = COMMENTS_AND_PHP.replace_all(input, "");
    TAGS.replace_all(&without_comments, |caps: &Captures| {
        let tag = format!("<{}>", caps[1].to_lowercase());
        if allowed.contains(&tag.as_str()) {
            caps[0].to_string()
        } else {
            String::new()
        }
    })
    .into_owned()
}
