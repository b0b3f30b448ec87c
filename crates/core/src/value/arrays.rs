use serde_json::{Map, Value};

/// Items of `a`, in their original order, that also appear in `b`.
///
/// # Examples
///
/// ```
/// use nice_utils_core::value::array_intersection;
///
/// assert_eq!(array_intersection(&[1], &[1, 2]), vec![1]);
/// assert!(array_intersection(&[1], &[2]).is_empty());
/// ```
pub fn array_intersection<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|item| b.contains(item)).cloned().collect()
}

/// Order-sensitive element-wise equality.
pub fn is_array_equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(left, right)| left == right)
}

/// Converts a sequence into a mapping keyed by decimal index.
pub fn to_indexed_map<I>(items: I) -> Map<String, Value>
where
    I: IntoIterator<Item = Value>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| (index.to_string(), item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn intersection_keeps_order_of_first() {
        assert_eq!(array_intersection(&[3, 1, 2], &[1, 2, 3]), vec![3, 1, 2]);
        assert_eq!(array_intersection(&[1, 1, 4], &[1]), vec![1, 1]);
    }

    #[test]
    fn intersection_with_nothing_in_common_is_empty() {
        assert!(array_intersection(&[1], &[2]).is_empty());
        assert!(array_intersection::<i32>(&[], &[1]).is_empty());
    }

    #[test]
    fn equal_arrays() {
        assert!(is_array_equal(&[1], &[1]));
        assert!(is_array_equal::<i32>(&[], &[]));
        assert!(is_array_equal(&["a", "b"], &["a", "b"]));
    }

    #[test]
    fn unequal_arrays() {
        assert!(!is_array_equal(&[1], &[2]));
        assert!(!is_array_equal(&[1, 2], &[2, 1]));
        assert!(!is_array_equal(&[1], &[1, 1]));
    }

    #[test]
    fn indexed_map_keys_by_position() {
        let map = to_indexed_map(vec![json!("a"), json!(null), json!(3)]);
        assert_eq!(Value::Object(map), json!({"0": "a", "1": null, "2": 3}));
    }

    #[test]
    fn indexed_map_of_nothing_is_empty() {
        assert!(to_indexed_map(Vec::new()).is_empty());
    }
}
