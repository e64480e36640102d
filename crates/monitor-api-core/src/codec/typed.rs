//! Codec for serde-derived model structs.

use std::marker::PhantomData;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map as JsonMap, Value as JsonValue};

use super::{ModelCodec, Record};
use crate::schema::ModelSchema;
use crate::{Error, Result};

/// A generated API model: its serde shape plus its schema description.
///
/// The serde derive supplies the shape pass; the schema drives the presence
/// pass. Wire names in the schema must match the serde field names.
pub trait ModelFields: Serialize + DeserializeOwned {
    fn schema() -> &'static ModelSchema;
}

/// [`ModelCodec`] for a [`ModelFields`] type.
pub struct TypedCodec<F> {
    _model: PhantomData<fn() -> F>,
}

impl<F> TypedCodec<F> {
    pub const fn new() -> Self {
        Self {
            _model: PhantomData,
        }
    }
}

impl<F> Default for TypedCodec<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Clone for TypedCodec<F> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<F> Copy for TypedCodec<F> {}

impl<F> std::fmt::Debug for TypedCodec<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedCodec")
            .field("model", &std::any::type_name::<F>())
            .finish()
    }
}

impl<F: ModelFields> ModelCodec for TypedCodec<F> {
    type Fields = F;

    fn schema(&self) -> &ModelSchema {
        F::schema()
    }

    fn decode_fields(&self, object: &JsonMap<String, JsonValue>) -> serde_json::Result<F> {
        serde_json::from_value(JsonValue::Object(object.clone()))
    }

    fn encode_fields(&self, fields: &F) -> Result<JsonMap<String, JsonValue>> {
        match serde_json::to_value(fields)? {
            JsonValue::Object(map) => Ok(map),
            other => Err(Error::Json(serde::ser::Error::custom(format!(
                "model {} encoded as {} instead of an object",
                F::schema().name,
                super::json_kind(&other)
            )))),
        }
    }
}

impl<F: ModelFields> Record<F> {
    /// Decode a model from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        TypedCodec::<F>::new().decode(bytes)
    }

    /// Decode a model from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Self::from_slice(text.as_bytes())
    }

    pub fn to_vec(&self) -> Result<Vec<u8>> {
        TypedCodec::<F>::new().encode(self)
    }

    pub fn to_value(&self) -> Result<JsonValue> {
        TypedCodec::<F>::new().encode_value(self)
    }
}

impl<F: ModelFields> Serialize for Record<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value()
            .map_err(<S::Error as serde::ser::Error>::custom)?
            .serialize(serializer)
    }
}

impl<'de, F: ModelFields> Deserialize<'de> for Record<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let object = JsonMap::<String, JsonValue>::deserialize(deserializer)?;
        TypedCodec::<F>::new()
            .decode_object(object)
            .map_err(D::Error::custom)
    }
}
