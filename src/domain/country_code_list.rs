use crate::error::DecodeError;
use serde_json::Value;

/// The JSON array returned by the country-code endpoint.
/// Elements are kept as opaque JSON values, in response order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CountryCodeList(Vec<Value>);

impl CountryCodeList {
    /// Decode a full response body. Anything but a JSON array is rejected,
    /// so a partially usable body never yields a list.
    pub fn parse(body: &str) -> Result<CountryCodeList, DecodeError> {
        match serde_json::from_str::<Value>(body).map_err(DecodeError::Malformed)? {
            Value::Array(elements) => Ok(Self(elements)),
            other => Err(DecodeError::NotAnArray(json_kind(&other))),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// String elements only; other element shapes are skipped.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(Value::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes().any(|c| c == code)
    }
}

impl From<Vec<Value>> for CountryCodeList {
    fn from(elements: Vec<Value>) -> Self {
        Self(elements)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
