//! Schema metadata for the matcher type field.
//!
//! External schema tooling reads a [`SchemaDescriptor`] to learn that the field is a
//! string restricted to the canonical names. Numeric codes never appear in it.

use serde::Serialize;

use crate::supported_kinds;

/// Title of the matcher type field.
pub const SCHEMA_TITLE: &str = "type of the matcher";

/// Description of the matcher type field.
pub const SCHEMA_DESCRIPTION: &str =
    "Type of the matcher,enum=status,enum=size,enum=word,enum=regex,enum=binary,enum=dsl";

/// A JSON-schema fragment describing a string field with a fixed set of values.
///
/// Serializes with the JSON Schema keywords `type`, `title`, `description` and `enum`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaDescriptor {
    /// Underlying primitive type. Always `"string"`.
    #[serde(rename = "type")]
    pub primitive: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Allowed values, in ascending kind-code order.
    #[serde(rename = "enum")]
    pub values: Vec<&'static str>,
}

impl SchemaDescriptor {
    /// The descriptor for a matcher type field.
    #[must_use]
    pub fn matcher_kind() -> Self {
        Self {
            primitive: "string",
            title: SCHEMA_TITLE,
            description: SCHEMA_DESCRIPTION,
            values: supported_kinds().iter().map(|kind| kind.as_str()).collect(),
        }
    }

    /// The descriptor as a JSON value, ready to splice into a larger schema.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "type": self.primitive,
            "title": self.title,
            "description": self.description,
            "enum": self.values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatcherKindHolder;

    #[test]
    fn enum_follows_supported_kinds() {
        let descriptor = MatcherKindHolder::schema_descriptor();
        let expected: Vec<&str> = supported_kinds().iter().map(|k| k.as_str()).collect();
        assert_eq!(descriptor.values, expected);
        assert_eq!(
            descriptor.values,
            ["word", "regex", "binary", "status", "size", "dsl"]
        );
    }

    #[test]
    fn declares_string_type() {
        let descriptor = SchemaDescriptor::matcher_kind();
        assert_eq!(descriptor.primitive, "string");
        assert_eq!(descriptor.title, SCHEMA_TITLE);
        assert_eq!(descriptor.description, SCHEMA_DESCRIPTION);
    }

    #[test]
    fn json_value_matches_serialized_form() {
        let descriptor = SchemaDescriptor::matcher_kind();
        let serialized = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(serialized, descriptor.to_json_value());
        assert_eq!(serialized["type"], "string");
        assert_eq!(serialized["enum"][5], "dsl");
    }

    #[test]
    fn no_numeric_codes_leak() {
        let value = SchemaDescriptor::matcher_kind().to_json_value();
        let values = value["enum"].as_array().unwrap();
        assert!(values.iter().all(serde_json::Value::is_string));
    }
}
