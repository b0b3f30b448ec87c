use serde_json::Value;

/// A tree that can be walked one key at a time.
///
/// Implement this for your own nested structures to use them with
/// [`resolve`](super::resolve). `serde_json::Value` is supported out of the box.
pub trait Lookup {
    /// Returns the child stored under `key`, if any.
    fn child(&self, key: &str) -> Option<&Self>;

    /// Whether this node is an explicit null.
    fn is_null(&self) -> bool {
        false
    }
}

impl Lookup for Value {
    fn child(&self, key: &str) -> Option<&Self> {
        match self {
            Value::Object(map) => map.get(key),
            Value::Array(items) => array_index(key).and_then(|index| items.get(index)),
            _ => None,
        }
    }

    fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// Parses a canonical array index: decimal digits only, no leading zero.
fn array_index(key: &str) -> Option<usize> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    key.parse().ok()
}
