//! Synthesized value representation.
//!
//! [`MockValue`] is the output of a synthesis run: a tree of primitive
//! values and nested objects mirroring the shape of the schema that
//! produced it. The tree is newly allocated per synthesis call, owned by
//! the caller, and never mutated after return.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// A synthesized value: a primitive, a nested object, or the fallback
/// marker for a type the synthesizer could not resolve.
///
/// Object entries preserve the field order of the schema they were
/// synthesized from, so two runs over the same schema produce
/// structurally identical trees (the values differ, the shape does not).
#[derive(Debug, Clone, PartialEq)]
pub enum MockValue {
    /// Boolean value
    Bool(bool),

    /// Integer value
    Int(i64),

    /// Floating-point value
    Float(f64),

    /// Text value
    Text(String),

    /// Nested object, in schema field order
    Object(IndexMap<String, MockValue>),

    /// Fallback marker carrying the name of an unresolvable type
    Unsupported(String),
}

impl MockValue {
    /// The sentinel string an unsupported type renders as.
    pub fn sentinel(type_name: &str) -> String {
        format!("<unsupported type: {type_name}>")
    }

    /// Check whether this value is the unsupported-type fallback.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an object.
    pub fn as_object(&self) -> Option<&IndexMap<String, MockValue>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl Serialize for MockValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Object(map) => map.serialize(serializer),
            Self::Unsupported(type_name) => {
                serializer.serialize_str(&Self::sentinel(type_name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(MockValue::Bool(true).as_bool(), Some(true));
        assert_eq!(MockValue::Int(7).as_i64(), Some(7));
        assert_eq!(MockValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(MockValue::Text("abc".to_string()).as_str(), Some("abc"));

        // Accessors do not cross-convert
        assert_eq!(MockValue::Int(7).as_f64(), None);
        assert_eq!(MockValue::Text("abc".to_string()).as_bool(), None);
    }

    #[test]
    fn test_object_preserves_insertion_order() {
        let mut map = IndexMap::new();
        map.insert("zeta".to_string(), MockValue::Int(1));
        map.insert("alpha".to_string(), MockValue::Int(2));
        let value = MockValue::Object(map);

        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_unsupported_serializes_as_sentinel_string() {
        let value = MockValue::Unsupported("currency".to_string());
        assert!(value.is_unsupported());

        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"<unsupported type: currency>\"");
    }

    #[test]
    fn test_object_serializes_in_order() {
        let mut map = IndexMap::new();
        map.insert("name".to_string(), MockValue::Text("abcd".to_string()));
        map.insert("age".to_string(), MockValue::Int(123));
        let json = serde_json::to_string(&MockValue::Object(map)).unwrap();

        assert_eq!(json, r#"{"name":"abcd","age":123}"#);
    }
}
