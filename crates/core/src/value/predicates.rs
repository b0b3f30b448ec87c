use serde_json::Value;

/// `true` for a missing value or an explicit null.
pub fn undefined_or_null(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// `true` for any compound value: objects and arrays, never null.
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// `true` for numbers only; numeric strings do not count.
pub fn is_number(value: &Value) -> bool {
    value.is_number()
}

/// `true` for numbers without a fractional part, `2.0` included.
pub fn is_int(value: &Value) -> bool {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => true,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0),
        _ => false,
    }
}

/// `true` for numbers with a fractional part.
pub fn is_float(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64().is_some_and(|f| f.is_finite() && f.fract() != 0.0),
        _ => false,
    }
}

/// `true` when the value is, or a string holding, a JSON object or array.
///
/// # Examples
///
/// ```
/// use nice_utils_core::value::is_json;
/// use serde_json::json;
///
/// assert!(is_json(&json!({"a": 1})));
/// assert!(is_json(&json!([])));
/// assert!(is_json(&json!("[1, 2]")));
/// assert!(!is_json(&json!("1")));
/// assert!(!is_json(&json!(null)));
/// ```
pub fn is_json(value: &Value) -> bool {
    match value {
        Value::String(text) => is_json_str(text),
        other => is_object(other),
    }
}

/// `true` when `text` parses as a JSON object or array.
pub fn is_json_str(text: &str) -> bool {
    serde_json::from_str::<Value>(text)
        .map(|parsed| is_object(&parsed))
        .unwrap_or(false)
}
