//! Field and model descriptions.
//!
//! A [`ModelSchema`] lists the declared fields of an API model in
//! declaration order. Each [`FieldSpec`] carries the Rust-side name, the
//! JSON wire name, whether the property is required, and its type. The same
//! description drives both the hand-written models and the models discovered
//! at runtime from an OpenAPI document.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::SchemaType;

/// A single declared property of a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field identifier on the Rust side (snake_case)
    pub name: String,
    /// JSON object key used on the wire
    pub wire_name: String,
    /// Whether the property must be present and non-null
    pub required: bool,
    /// Declared type; `None` leaves the value unconstrained
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<SchemaType>,
    /// Element type when `ty` is `array`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<SchemaType>,
    /// OpenAPI `format`; `int32` and `int64` bound the range of an integer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Enumerated values; empty means any value of `ty`
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<JsonValue>,
    /// Description from the API definition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldSpec {
    /// A required property of the given type.
    pub fn required(
        name: impl Into<String>,
        wire_name: impl Into<String>,
        ty: SchemaType,
    ) -> Self {
        Self {
            name: name.into(),
            wire_name: wire_name.into(),
            required: true,
            ty: Some(ty),
            items: None,
            format: None,
            allowed_values: Vec::new(),
            description: None,
        }
    }

    /// An optional property of the given type.
    pub fn optional(
        name: impl Into<String>,
        wire_name: impl Into<String>,
        ty: SchemaType,
    ) -> Self {
        Self {
            required: false,
            ..Self::required(name, wire_name, ty)
        }
    }

    /// Set the element type of an array property.
    pub fn with_items(mut self, items: SchemaType) -> Self {
        self.items = Some(items);
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Restrict the property to an enumerated set of values.
    pub fn with_allowed_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<JsonValue>,
    {
        self.allowed_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether a present, non-null value fits this field's declared type.
    pub fn accepts(&self, value: &JsonValue) -> bool {
        if !self.allowed_values.is_empty() && !self.allowed_values.contains(value) {
            return false;
        }
        let Some(ty) = self.ty else {
            return true;
        };
        if !ty.matches(value) {
            return false;
        }
        if ty == SchemaType::Integer && !fits_integer_format(self.format.as_deref(), value) {
            return false;
        }
        match (ty, self.items, value.as_array()) {
            (SchemaType::Array, Some(items), Some(elements)) => {
                elements.iter().all(|element| items.matches(element))
            }
            _ => true,
        }
    }
}

fn fits_integer_format(format: Option<&str>, value: &JsonValue) -> bool {
    match format {
        Some("int32") => value.as_i64().is_some_and(|n| i32::try_from(n).is_ok()),
        Some("int64") => value.is_i64(),
        _ => true,
    }
}

/// Declared shape of an API model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSchema {
    /// Model name as it appears in the API definition
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declared fields, in declaration order
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl ModelSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    /// Append a field; declaration order is the order of calls.
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Look up a field by wire name.
    pub fn field(&self, wire_name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.wire_name == wire_name)
    }

    /// Required fields, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }

    /// Whether `wire_name` is a declared property.
    pub fn declares(&self, wire_name: &str) -> bool {
        self.field(wire_name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ModelSchema {
        ModelSchema::new("Sample")
            .with_field(FieldSpec::required("title", "title", SchemaType::String))
            .with_field(FieldSpec::optional("week_days", "week_days", SchemaType::Array)
                .with_items(SchemaType::String))
            .with_field(FieldSpec::required("document_url", "documentUrl", SchemaType::String))
    }

    #[test]
    fn test_required_fields_keep_declaration_order() {
        let schema = sample();
        let names: Vec<_> = schema
            .required_fields()
            .map(|f| f.wire_name.as_str())
            .collect();
        assert_eq!(names, vec!["title", "documentUrl"]);
        assert!(schema.declares("week_days"));
        assert!(!schema.declares("owner"));
    }

    #[test]
    fn test_accepts_checks_array_items() {
        let schema = sample();
        let week_days = schema.field("week_days").unwrap();
        assert!(week_days.accepts(&json!(["Mon", "Tue"])));
        assert!(!week_days.accepts(&json!(["Mon", 2])));
        assert!(!week_days.accepts(&json!("Mon")));
    }

    #[test]
    fn test_unconstrained_field_accepts_anything() {
        let field = FieldSpec {
            ty: None,
            ..FieldSpec::optional("any", "any", SchemaType::String)
        };
        assert!(field.accepts(&json!({"nested": [1, 2]})));
        assert!(field.accepts(&json!(3)));
    }

    #[test]
    fn test_accepts_checks_enumerated_values() {
        let field = FieldSpec::optional("storage_tier", "storage_tier", SchemaType::String)
            .with_allowed_values(["indexes", "flex"]);
        assert!(field.accepts(&json!("flex")));
        assert!(!field.accepts(&json!("glacier")));
    }

    #[test]
    fn test_accepts_checks_integer_format() {
        let period = FieldSpec::optional("period", "period", SchemaType::Integer).with_format("int32");
        assert!(period.accepts(&json!(-2147483648_i64)));
        assert!(!period.accepts(&json!(4294967296_i64)));
        assert!(!period.accepts(&json!(1.5)));

        let until = FieldSpec::optional("until_date", "until_date", SchemaType::Integer).with_format("int64");
        assert!(until.accepts(&json!(4294967296_i64)));
        assert!(!until.accepts(&json!(u64::MAX)));

        let unbounded = FieldSpec::optional("count", "count", SchemaType::Integer);
        assert!(unbounded.accepts(&json!(u64::MAX)));
    }

    #[test]
    fn test_schema_serializes_type_keyword() {
        let field = FieldSpec::required("title", "title", SchemaType::String);
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value["type"], "string");
        assert_eq!(value["required"], true);
        assert!(value.get("items").is_none());
    }
}
