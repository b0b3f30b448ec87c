use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{Lookup, PathError, PathExpression, Resolved, Result};

/// Looks up a nested value by a dotted path with optional bracketed sub-keys.
///
/// This never fails: a null root, a blank path, a missing key and a null
/// value all come back as `None`. Use [`resolve_detailed`] to tell them apart.
///
/// # Examples
///
/// ```
/// use nice_utils_core::path::resolve;
/// use serde_json::json;
///
/// let data = json!({"a": {"b": [10, 20], "x": {"y": 5}}});
///
/// assert_eq!(resolve(&data, "a.b[1]"), Some(&json!(20)));
/// assert_eq!(resolve(&data, "a[x][y]"), Some(&json!(5)));
/// assert_eq!(resolve(&data, "a.missing.c"), None);
/// assert_eq!(resolve(&data, ""), None);
/// ```
pub fn resolve<'a, V: Lookup>(root: &'a V, path: &str) -> Option<&'a V> {
    resolve_detailed(root, path)
        .ok()
        .and_then(Resolved::into_option)
}

/// Stricter variant of [`resolve`].
///
/// Input problems are errors; a completed walk reports whether it found a
/// value, an explicit null, or nothing.
///
/// # Examples
///
/// ```
/// use nice_utils_core::path::{resolve_detailed, PathError, Resolved};
/// use serde_json::json;
///
/// let data = json!({"a": null});
///
/// assert_eq!(resolve_detailed(&data, "a"), Ok(Resolved::Null));
/// assert_eq!(resolve_detailed(&data, "b"), Ok(Resolved::Missing));
/// assert_eq!(resolve_detailed(&data, " "), Err(PathError::EmptyPath));
/// ```
pub fn resolve_detailed<'a, V: Lookup>(root: &'a V, path: &str) -> Result<Resolved<'a, V>> {
    if root.is_null() {
        return Err(PathError::NullRoot);
    }
    let expression = PathExpression::parse(path).ok_or(PathError::EmptyPath)?;
    Ok(expression.resolve(root))
}

/// Resolves a JSON path and deserializes the hit into `T`.
///
/// A value that does not fit `T` is treated like a missing one.
pub fn resolve_as<T: DeserializeOwned>(root: &Value, path: &str) -> Option<T> {
    resolve(root, path).and_then(|value| T::deserialize(value).ok())
}

/// `true` when `path` does not lead to a non-null value under `root`.
///
/// A `None` root counts as undefined.
pub fn undefined_or_null_chained<V: Lookup>(root: Option<&V>, path: &str) -> bool {
    root.and_then(|root| resolve(root, path)).is_none()
}
