//! JSON value representation consumed by the path evaluator.
//!
//! A `Value` is the decoded form of a JSON document. It is produced once by
//! [`crate::document::parser`] and only ever read afterwards: compiled paths
//! borrow it and never modify it.
//!
//! # Example
//!
//! ```
//! use jsonpick::document::node::Value;
//! use indexmap::IndexMap;
//!
//! let mut fields = IndexMap::new();
//! fields.insert("name".to_string(), Value::String("jsonpick".to_string()));
//! fields.insert("version".to_string(), Value::Number(1.0));
//! let object = Value::Object(fields);
//!
//! assert!(object.is_object());
//! assert_eq!(object.get("name").and_then(Value::as_str), Some("jsonpick"));
//! ```

use indexmap::IndexMap;
use std::fmt;

/// A decoded JSON value.
///
/// Key order of objects is kept for display purposes only; lookups are by
/// exact key and ordering never affects query results.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON `null`
    Null,
    /// JSON `true` / `false`
    Bool(bool),
    /// Any JSON number, stored as `f64`
    Number(f64),
    /// A JSON string
    String(String),
    /// A JSON object with unique string keys
    Object(IndexMap<String, Value>),
    /// A JSON array
    Array(Vec<Value>),
}

/// The variant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Object,
    Array,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Object => "object",
            ValueKind::Array => "array",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Returns the variant of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Looks up a property of an object. Returns `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(fields) => fields.get(key),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::from(true).kind(), ValueKind::Bool);
        assert_eq!(Value::from(1.5).kind(), ValueKind::Number);
        assert_eq!(Value::from("x").kind(), ValueKind::String);
        assert_eq!(Value::Object(IndexMap::new()).kind(), ValueKind::Object);
        assert_eq!(Value::Array(vec![]).kind(), ValueKind::Array);
    }

    #[test]
    fn test_accessors_reject_other_variants() {
        let v = Value::from("7");
        assert_eq!(v.as_str(), Some("7"));
        assert_eq!(v.as_f64(), None);
        assert_eq!(v.as_bool(), None);
        assert_eq!(v.get("7"), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ValueKind::Bool.to_string(), "boolean");
        assert_eq!(ValueKind::Array.to_string(), "array");
    }
}
