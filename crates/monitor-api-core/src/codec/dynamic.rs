//! Codec for models described only by a runtime [`ModelSchema`].

use serde::de::Error as _;
use serde_json::{Map as JsonMap, Value as JsonValue};

use super::{json_kind, ModelCodec, Record};
use crate::schema::ModelSchema;
use crate::Result;

/// A record decoded through a [`SchemaCodec`]: declared fields keyed by wire name.
pub type DynamicRecord = Record<JsonMap<String, JsonValue>>;

/// [`ModelCodec`] driven entirely by a schema description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaCodec {
    schema: ModelSchema,
}

impl SchemaCodec {
    pub fn new(schema: ModelSchema) -> Self {
        Self { schema }
    }

    pub fn into_schema(self) -> ModelSchema {
        self.schema
    }
}

impl ModelCodec for SchemaCodec {
    type Fields = JsonMap<String, JsonValue>;

    fn schema(&self) -> &ModelSchema {
        &self.schema
    }

    fn decode_fields(&self, object: &JsonMap<String, JsonValue>) -> serde_json::Result<Self::Fields> {
        let mut fields = JsonMap::new();
        for field in &self.schema.fields {
            match object.get(&field.wire_name) {
                None | Some(JsonValue::Null) if field.required => {
                    return Err(serde_json::Error::custom(format!(
                        "missing field `{}`",
                        field.wire_name
                    )));
                }
                None | Some(JsonValue::Null) => {}
                Some(value) if field.accepts(value) => {
                    fields.insert(field.wire_name.clone(), value.clone());
                }
                Some(value) => {
                    let expected = match (field.ty, field.items, field.format.as_deref()) {
                        (Some(ty), Some(items), _) => format!("{ty} of {items}"),
                        (Some(ty), None, Some(format)) => format!("{ty} ({format})"),
                        (Some(ty), None, None) => ty.to_string(),
                        (None, _, _) => "any".to_string(),
                    };
                    return Err(serde_json::Error::custom(format!(
                        "invalid type: {} for field `{}`, expected {}",
                        json_kind(value),
                        field.wire_name,
                        expected
                    )));
                }
            }
        }
        Ok(fields)
    }

    fn encode_fields(&self, fields: &Self::Fields) -> Result<JsonMap<String, JsonValue>> {
        let mut out = JsonMap::new();
        for field in &self.schema.fields {
            if let Some(value) = fields.get(&field.wire_name) {
                out.insert(field.wire_name.clone(), value.clone());
            }
        }
        for (key, value) in fields {
            if !out.contains_key(key) {
                out.insert(key.clone(), value.clone());
            }
        }
        Ok(out)
    }
}
