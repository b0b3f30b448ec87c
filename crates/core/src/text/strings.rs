use regex::{Captures, NoExpand, Regex, RegexBuilder};

/// Keeps the first `length` characters, appending `...` when anything was cut.
///
/// # Examples
///
/// ```
/// use nice_utils_core::text::truncate;
///
/// assert_eq!(truncate("hello world", 5), "hello...");
/// assert_eq!(truncate("hi", 5), "hi");
/// ```
pub fn truncate(s: &str, length: usize) -> String {
    let mut chars = s.chars();
    let head: String = chars.by_ref().take(length).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Replaces every case-insensitive occurrence of the literal `find`.
pub fn replace_all(s: &str, find: &str, replace: &str) -> String {
    if find.is_empty() {
        return s.to_string();
    }
    match RegexBuilder::new(&regex::escape(find))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern.replace_all(s, NoExpand(replace)).into_owned(),
        Err(_) => s.to_string(),
    }
}

/// Replaces several literals in a single pass.
///
/// When two finds match at the same position the one listed first wins.
/// Inserted text is never scanned again.
///
/// # Examples
///
/// ```
/// use nice_utils_core::text::replace_bulk;
///
/// let out = replace_bulk("cat and dog", &[("cat", "dog"), ("dog", "cat")]);
/// assert_eq!(out, "dog and cat");
/// ```
pub fn replace_bulk(s: &str, pairs: &[(&str, &str)]) -> String {
    let pairs: Vec<&(&str, &str)> = pairs.iter().filter(|(find, _)| !find.is_empty()).collect();
    if pairs.is_empty() {
        return s.to_string();
    }

    let alternation = pairs
        .iter()
        .map(|(find, _)| regex::escape(find))
        .collect::<Vec<_>>()
        .join("|");
    let Ok(pattern) = Regex::new(&alternation) else {
        return s.to_string();
    };

    pattern
        .replace_all(s, |caps: &Captures| {
            let matched = &caps[0];
            pairs
                .iter()
                .find(|(find, _)| *find == matched)
                .map(|(_, replace)| (*replace).to_string())
                .unwrap_or_else(|| matched.to_string())
        })
        .into_owned()
}

/// Strips every leading and trailing repetition of `search`, then whitespace.
///
/// # Examples
///
/// ```
/// use nice_utils_core::text::rtrim;
///
/// assert_eq!(rtrim("--title--", "-"), "title");
/// assert_eq!(rtrim("  padded  ", ""), "padded");
/// ```
pub fn rtrim(s: &str, search: &str) -> String {
    if search.is_empty() {
        return s.trim().to_string();
    }
    let mut rest = s;
    while let Some(stripped) = rest.strip_prefix(search) {
        rest = stripped;
    }
    while let Some(stripped) = rest.strip_suffix(search) {
        rest = stripped;
    }
    rest.trim().to_string()
}

/// Reduces `s` to its digits (and dots when `allow_decimal`).
///
/// Input that already parses as a number (infinities included, NaN not) is
/// returned untouched. Only Rust float syntax counts, so hex literals such
/// as `0x1F` are reduced to their digits.
///
/// # Examples
///
/// ```
/// use nice_utils_core::text::only_numbers;
///
/// assert_eq!(only_numbers("123abc_$.qwr", false), "123");
/// assert_eq!(only_numbers("v1.2.0-beta", true), "1.2.0");
/// assert_eq!(only_numbers("42.5", false), "42.5");
/// ```
pub fn only_numbers(s: &str, allow_decimal: bool) -> String {
    let trimmed = s.trim();
    if !trimmed.is_empty() && trimmed.parse::<f64>().is_ok_and(|n| !n.is_nan()) {
        return s.to_string();
    }
    s.chars()
        .filter(|c| c.is_ascii_digit() || (allow_decimal && *c == '.'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("héllo wörld", 7), "héllo w...");
        assert_eq!(truncate("exact", 5), "exact");
        assert_eq!(truncate("anything", 0), "...");
        assert_eq!(truncate("", 3), "");
    }

    #[test]
    fn replace_all_ignores_case() {
        assert_eq!(replace_all("Foo foo FOO", "foo", "bar"), "bar bar bar");
    }

    #[test]
    fn replace_all_treats_find_literally() {
        assert_eq!(replace_all("a.b.c", ".", "/"), "a/b/c");
        assert_eq!(replace_all("1+1=2", "1+1", "two"), "two=2");
    }

    #[test]
    fn replace_all_inserts_replacement_literally() {
        assert_eq!(replace_all("price", "price", "$1"), "$1");
    }

    #[test]
    fn replace_all_with_empty_find_is_identity() {
        assert_eq!(replace_all("abc", "", "x"), "abc");
    }

    #[test]
    fn replace_bulk_does_not_rescan() {
        assert_eq!(replace_bulk("a b", &[("a", "b"), ("b", "c")]), "b c");
    }

    #[test]
    fn replace_bulk_prefers_earlier_pairs() {
        assert_eq!(replace_bulk("abc", &[("ab", "1"), ("abc", "2")]), "1c");
    }

    #[test]
    fn replace_bulk_skips_empty_finds() {
        assert_eq!(replace_bulk("abc", &[("", "x")]), "abc");
        assert_eq!(replace_bulk("a(b)", &[("", "x"), ("(b)", "[b]")]), "a[b]");
    }

    #[test]
    fn rtrim_strips_repeated_search() {
        assert_eq!(rtrim("xxhixx", "x"), "hi");
        assert_eq!(rtrim("abab-ab", "ab"), "-");
        assert_eq!(rtrim("/path/", "/"), "path");
    }

    #[test]
    fn rtrim_trims_whitespace_after_search() {
        assert_eq!(rtrim("- spaced -", "-"), "spaced");
    }

    #[test]
    fn only_numbers_keeps_numeric_input() {
        assert_eq!(only_numbers("1000000", false), "1000000");
        assert_eq!(only_numbers("-3.5", false), "-3.5");
        assert_eq!(only_numbers("Infinity", false), "Infinity");
        assert_eq!(only_numbers(" -Infinity ", false), " -Infinity ");
    }

    #[test]
    fn only_numbers_reduces_hex_literals_to_digits() {
        assert_eq!(only_numbers("0x1F", false), "01");
    }

    #[test]
    fn only_numbers_extracts_digits() {
        assert_eq!(only_numbers("123abc_$.qwr", false), "123");
        assert_eq!(only_numbers("phone: 0800-123", false), "0800123");
        assert_eq!(only_numbers("NaN", false), "");
        assert_eq!(only_numbers("", false), "");
    }

    #[test]
    fn only_numbers_can_keep_dots() {
        assert_eq!(only_numbers("$12.50 USD", true), "12.50");
    }
}
