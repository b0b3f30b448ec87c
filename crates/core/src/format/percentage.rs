/// `current` as a whole percentage of `total`, truncated toward zero.
///
/// Returns `None` when `total` is zero or the result is not finite.
///
/// # Examples
///
/// ```
/// use nice_utils_core::format::percentage;
///
/// assert_eq!(percentage(1.0, 2.0), Some(50));
/// assert_eq!(percentage(2.0, 3.0), Some(66));
/// assert_eq!(percentage(1.0, 0.0), None);
/// ```
pub fn percentage(current: f64, total: f64) -> Option<i64> {
    if total == 0.0 {
        return None;
    }
    let ratio = current / total * 100.0;
    ratio.is_finite().then(|| ratio.trunc() as i64)
}

/// [`percentage`] over numeric strings such as `"1"` and `"2"`.
pub fn percentage_str(current: &str, total: &str) -> Option<i64> {
    let current = current.trim().parse().ok()?;
    let total = total.trim().parse().ok()?;
    percentage(current, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_is_fifty() {
        assert_eq!(percentage(1.0, 2.0), Some(50));
        assert_eq!(percentage_str("1", "2"), Some(50));
    }

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(percentage(1.0, 3.0), Some(33));
        assert_eq!(percentage(-1.0, 3.0), Some(-33));
    }

    #[test]
    fn allows_more_than_total() {
        assert_eq!(percentage(3.0, 2.0), Some(150));
    }

    #[test]
    fn rejects_invalid_inputs() {
        assert_eq!(percentage(1.0, 0.0), None);
        assert_eq!(percentage(f64::NAN, 2.0), None);
        assert_eq!(percentage_str("one", "2"), None);
        assert_eq!(percentage_str("1", ""), None);
    }
}
