use std::str::FromStr;

use super::{Lookup, PathError};

/// One dot-separated piece of a path expression, e.g. `list[0][name]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    raw: String,
    subkeys: Vec<String>,
}

impl Segment {
    /// Parses a raw segment, extracting its bracketed sub-keys.
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            subkeys: bracket_subkeys(raw),
        }
    }

    /// The segment text exactly as it appeared in the path.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The key looked up first.
    ///
    /// With sub-keys this is the text before the first `[`; without them it
    /// is the whole raw segment, malformed brackets included.
    pub fn key(&self) -> &str {
        if self.subkeys.is_empty() {
            return &self.raw;
        }
        self.raw.split('[').next().unwrap_or_default()
    }

    /// Bracketed sub-keys, applied left to right after [`key`](Self::key).
    pub fn subkeys(&self) -> &[String] {
        &self.subkeys
    }

    fn lookup<'a, V: Lookup>(&self, value: &'a V) -> Option<&'a V> {
        let mut current = value.child(self.key())?;
        for subkey in &self.subkeys {
            if current.is_null() {
                return None;
            }
            current = current.child(subkey)?;
        }
        Some(current)
    }
}

/// Every maximal run of non-bracket characters directly followed by `]`.
fn bracket_subkeys(segment: &str) -> Vec<String> {
    let mut keys = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, c) in segment.char_indices() {
        match c {
            '[' => run_start = None,
            ']' => {
                if let Some(start) = run_start.take() {
                    keys.push(segment[start..i].to_string());
                }
            }
            _ => {
                if run_start.is_none() {
                    run_start = Some(i);
                }
            }
        }
    }

    keys
}

/// A parsed path such as `a.b[0][c]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpression {
    segments: Vec<Segment>,
}

impl PathExpression {
    /// Parses a dotted path. Returns `None` for empty or whitespace-only input.
    ///
    /// # Examples
    ///
    /// ```
    /// use nice_utils_core::path::PathExpression;
    ///
    /// let path = PathExpression::parse("a.b[0][c]").unwrap();
    /// assert_eq!(path.segments().len(), 2);
    /// assert_eq!(path.segments()[1].key(), "b");
    /// assert_eq!(path.segments()[1].subkeys(), ["0", "c"]);
    ///
    /// assert!(PathExpression::parse("   ").is_none());
    /// ```
    pub fn parse(path: &str) -> Option<Self> {
        if path.trim().is_empty() {
            return None;
        }
        Some(Self {
            segments: path.split('.').map(Segment::parse).collect(),
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Walks `root` along this path.
    pub fn resolve<'a, V: Lookup>(&self, root: &'a V) -> Resolved<'a, V> {
        let mut current = root;
        for segment in &self.segments {
            if current.is_null() {
                return Resolved::Missing;
            }
            match segment.lookup(current) {
                Some(next) => current = next,
                None => return Resolved::Missing,
            }
        }

        if current.is_null() {
            Resolved::Null
        } else {
            Resolved::Value(current)
        }
    }
}

impl FromStr for PathExpression {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(PathError::EmptyPath)
    }
}

/// Outcome of a detailed lookup, keeping "found null" apart from "not found".
#[derive(Debug, PartialEq)]
pub enum Resolved<'a, V> {
    Value(&'a V),
    Null,
    Missing,
}

impl<V> Clone for Resolved<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Resolved<'_, V> {}

impl<'a, V> Resolved<'a, V> {
    /// Collapses `Null` and `Missing` into `None`.
    pub fn into_option(self) -> Option<&'a V> {
        match self {
            Resolved::Value(value) => Some(value),
            Resolved::Null | Resolved::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Resolved::Missing)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Resolved::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_segment_has_no_subkeys() {
        let segment = Segment::parse("name");
        assert_eq!(segment.key(), "name");
        assert!(segment.subkeys().is_empty());
    }

    #[test]
    fn extracts_single_bracket() {
        let segment = Segment::parse("list[0]");
        assert_eq!(segment.key(), "list");
        assert_eq!(segment.subkeys(), ["0"]);
    }

    #[test]
    fn extracts_chained_brackets() {
        let segment = Segment::parse("map[key1][key2]");
        assert_eq!(segment.key(), "map");
        assert_eq!(segment.subkeys(), ["key1", "key2"]);
    }

    #[test]
    fn unbalanced_open_bracket_keeps_raw_segment() {
        let segment = Segment::parse("a[");
        assert!(segment.subkeys().is_empty());
        assert_eq!(segment.key(), "a[");
    }

    #[test]
    fn empty_brackets_yield_no_subkeys() {
        let segment = Segment::parse("a[]");
        assert!(segment.subkeys().is_empty());
        assert_eq!(segment.key(), "a[]");
    }

    #[test]
    fn stray_closing_bracket_counts_as_subkey() {
        // "a]" matches the run "a" followed by "]"
        let segment = Segment::parse("a]");
        assert_eq!(segment.subkeys(), ["a"]);
        assert_eq!(segment.key(), "a]");
    }

    #[test]
    fn leading_bracket_has_empty_base_key() {
        let segment = Segment::parse("[0]");
        assert_eq!(segment.key(), "");
        assert_eq!(segment.subkeys(), ["0"]);
    }

    #[test]
    fn parse_splits_on_every_dot() {
        let path = PathExpression::parse("a..b").unwrap();
        let keys: Vec<&str> = path.segments().iter().map(Segment::raw).collect();
        assert_eq!(keys, ["a", "", "b"]);
    }

    #[test]
    fn parse_rejects_blank_paths() {
        assert!(PathExpression::parse("").is_none());
        assert!(PathExpression::parse(" \t").is_none());
    }

    #[test]
    fn from_str_reports_empty_path() {
        assert_eq!("".parse::<PathExpression>(), Err(PathError::EmptyPath));
        assert!("a.b".parse::<PathExpression>().is_ok());
    }
}
