const UNITS: [&str; 9] = ["bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Formats a byte count with binary (1024) units.
///
/// # Examples
///
/// ```
/// use nice_utils_core::format::nice_bytes;
///
/// assert_eq!(nice_bytes(1000000), "976.56 KB");
/// assert_eq!(nice_bytes(512), "512 bytes");
/// ```
pub fn nice_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} bytes");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.2} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_counts_stay_in_bytes() {
        assert_eq!(nice_bytes(0), "0 bytes");
        assert_eq!(nice_bytes(1023), "1023 bytes");
    }

    #[test]
    fn boundaries_switch_units() {
        assert_eq!(nice_bytes(1024), "1.00 KB");
        assert_eq!(nice_bytes(1024 * 1024), "1.00 MB");
        assert_eq!(nice_bytes(1024 * 1024 * 1024), "1.00 GB");
    }

    #[test]
    fn fractional_values_use_two_decimals() {
        assert_eq!(nice_bytes(1000000), "976.56 KB");
        assert_eq!(nice_bytes(1536), "1.50 KB");
    }

    #[test]
    fn largest_counts_reach_exabytes() {
        assert!(nice_bytes(u64::MAX).ends_with(" EB"));
    }
}
