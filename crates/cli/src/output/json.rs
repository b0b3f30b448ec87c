//! JSON output formatting.

use crate::commands::Report;

/// Compact single-line JSON for a report, or `null` if serialization fails.
pub fn format_json(report: &Report) -> String {
    serde_json::to_string(report).unwrap_or_else(|_| "null".to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;

    #[test]
    fn values_are_emitted_untagged() {
        assert_eq!(format_json(&Report::Value(json!("hi"))), r#""hi""#);
        assert_eq!(format_json(&Report::Value(json!(null))), "null");
    }

    #[test]
    fn navigation_reports_the_new_href() {
        let report = Report::Navigated {
            href: "http://localhost/?a=1".to_string(),
        };
        assert_eq!(format_json(&report), r#"{"href":"http://localhost/?a=1"}"#);
    }

    #[test]
    fn params_keep_key_order() {
        let params = BTreeMap::from([
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ]);
        assert_eq!(format_json(&Report::Params(params)), r#"{"a":"1","b":"2"}"#);
    }
}
