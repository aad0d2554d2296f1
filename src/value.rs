/*!
# Value Tree

Defines the value tree produced by the parser: numbers, strings, objects and
arrays, nested arbitrarily. Every child is owned by exactly one parent.

Object keys are unique; their iteration order is unspecified, so rendered
objects may list keys in any order. Comparing values with `==` ignores key
order.

```
use jsonlite::Value;

let value = jsonlite::parse(br#"{"a": [1, "x"]}"#).expect("valid document");
let Value::Object(map) = &value else { panic!("expected an object") };
assert_eq!(
    map["a"],
    Value::Array(vec![Value::Number(1.0), Value::String("x".into())])
);
assert_eq!(value.depth(), 3);
```
*/
use serde::Serialize;
use std::collections::HashMap;

/// A parsed value.
#[derive(PartialEq, Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A number, always held as a double-precision float
    Number(f64),
    /// A string, holding the literal text without escape processing
    String(String),
    /// An object with unique string keys and values of any type
    Object(HashMap<String, Value>),
    /// An ordered array containing values of any type
    Array(Vec<Value>),
}

impl Value {
    /// Compute the nesting depth of the value. Scalars and empty containers
    /// have depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Object(map) => {
                1 + map.values().map(Self::depth).max().unwrap_or(0)
            }
            Self::Array(arr) => 1 + arr.iter().map(Self::depth).max().unwrap_or(0),
            Self::Number(_) | Self::String(_) => 1,
        }
    }

    /// Name of the value's variant, e.g. for diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Object(_) => "object",
            Self::Array(_) => "array",
        }
    }

    /// Convert to standard, escaped, compact JSON text. Numbers too large to
    /// be finite are written as `null`.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(value)
    }
}

impl From<HashMap<String, Self>> for Value {
    fn from(value: HashMap<String, Self>) -> Self {
        Self::Object(value)
    }
}
