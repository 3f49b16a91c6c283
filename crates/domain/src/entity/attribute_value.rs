//! Typed attribute values attached to snapshots.

use serde::{Deserialize, Serialize};

/// A single typed attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<String>),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<S: Into<String>> FromIterator<S> for AttributeValue {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_string_variant_as_plain_string() {
        let json = serde_json::to_string(&AttributeValue::from("Medium")).unwrap();
        assert_eq!(json, "\"Medium\"");
    }

    #[test]
    fn should_serialize_float_variant_as_number() {
        let json = serde_json::to_string(&AttributeValue::from(50.0)).unwrap();
        assert_eq!(json, "50.0");
    }

    #[test]
    fn should_collect_names_into_list() {
        let value: AttributeValue = ["Low", "High"].into_iter().collect();
        assert_eq!(
            value,
            AttributeValue::List(vec!["Low".to_string(), "High".to_string()])
        );
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"["Low","High"]"#);
    }

    #[test]
    fn should_deserialize_array_as_list() {
        let value: AttributeValue = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert!(matches!(value, AttributeValue::List(items) if items.len() == 2));
    }
}
