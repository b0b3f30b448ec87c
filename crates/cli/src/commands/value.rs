use nice_utils_core::path::{resolve, resolve_detailed, Resolved};
use nice_utils_core::value;
use serde::Serialize;
use serde_json::Value;

use crate::error::{CliError, Result};

/// A path lookup that keeps explicit nulls apart from missing keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub path: String,
    pub status: ResolutionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionStatus {
    Found,
    Null,
    Missing,
}

/// Every type predicate applied to one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeReport {
    pub undefined_or_null: bool,
    pub array: bool,
    pub object: bool,
    pub string: bool,
    pub number: bool,
    pub int: bool,
    pub float: bool,
    pub json: bool,
}

impl TypeReport {
    pub fn new(value: &Value) -> Self {
        Self {
            undefined_or_null: value::undefined_or_null(Some(value)),
            array: value::is_array(value),
            object: value::is_object(value),
            string: value::is_string(value),
            number: value::is_number(value),
            int: value::is_int(value),
            float: value::is_float(value),
            json: value::is_json(value),
        }
    }

    /// Parses `input` as JSON, falling back to a plain string.
    pub fn from_input(input: &str) -> Self {
        let value =
            serde_json::from_str(input).unwrap_or_else(|_| Value::String(input.to_string()));
        Self::new(&value)
    }

    /// `(name, result)` pairs in display order.
    pub fn entries(&self) -> [(&'static str, bool); 8] {
        [
            ("undefined_or_null", self.undefined_or_null),
            ("array", self.array),
            ("object", self.object),
            ("string", self.string),
            ("number", self.number),
            ("int", self.int),
            ("float", self.float),
            ("json", self.json),
        ]
    }
}

/// The value at `path`, or [`CliError::NotFound`].
pub fn get(document: &Value, path: &str) -> Result<Value> {
    resolve(document, path)
        .cloned()
        .ok_or_else(|| CliError::NotFound {
            path: path.to_string(),
        })
}

pub fn get_detailed(document: &Value, path: &str) -> Result<Resolution> {
    let (status, value) = match resolve_detailed(document, path)? {
        Resolved::Value(value) => (ResolutionStatus::Found, Some(value.clone())),
        Resolved::Null => (ResolutionStatus::Null, None),
        Resolved::Missing => (ResolutionStatus::Missing, None),
    };
    Ok(Resolution {
        path: path.to_string(),
        status,
        value,
    })
}
