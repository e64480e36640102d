//! JSON codec for API model objects.
//!
//! Every model, hand-written or discovered from an OpenAPI document, goes
//! through the same contract:
//!
//! * **Encode** writes an unparsed record's raw object verbatim. A typed
//!   record is written as its declared fields in declaration order, then
//!   every additional property is overlaid (last write wins on a key clash).
//! * **Decode** parses the bytes into a JSON object, runs the presence pass
//!   ([`check_required`]) and then the shape pass
//!   ([`ModelCodec::decode_fields`]). A missing required property is a hard
//!   error. A shape mismatch is not: the payload is kept as an unparsed
//!   record so that data written by a newer server survives a round trip.
//!
//! Properties outside the declared schema are dropped when the shape pass
//! succeeds; they are only kept through the unparsed fallback.
//!
//! # Examples
//!
//! ```
//! use monitor_api_core::codec::{ModelCodec, Record, TypedCodec};
//! use monitor_api_core::models::v2::IncidentAttachmentLinkAttributesAttachmentObject;
//!
//! # fn main() -> monitor_api_core::Result<()> {
//! let codec = TypedCodec::<IncidentAttachmentLinkAttributesAttachmentObject>::new();
//! let record = codec.decode(br#"{"documentUrl": "https://example.com", "title": "Runbook"}"#)?;
//! assert_eq!(record.fields().map(|f| f.title.as_str()), Some("Runbook"));
//!
//! let raw = codec.decode(br#"{"documentUrl": "https://example.com", "title": 123}"#)?;
//! assert!(raw.is_unparsed());
//! # Ok(())
//! # }
//! ```

mod dynamic;
mod record;
mod typed;

pub use dynamic::{DynamicRecord, SchemaCodec};
pub use record::Record;
pub use typed::{ModelFields, TypedCodec};

use serde_json::{Map as JsonMap, Value as JsonValue, error::Category};

use crate::schema::ModelSchema;
use crate::{Error, Result};

/// Trait implemented by every model codec.
///
/// Implementors supply the schema and the shape pass; decoding and encoding
/// of records are provided on top of them.
pub trait ModelCodec {
    /// Typed representation of the declared fields
    type Fields;

    fn schema(&self) -> &ModelSchema;

    /// Shape pass: strict decode of a JSON object into the declared fields.
    ///
    /// An error here means the payload does not fit the declared shape.
    fn decode_fields(&self, object: &JsonMap<String, JsonValue>) -> serde_json::Result<Self::Fields>;

    /// Declared fields as a JSON object keyed by wire name, in declaration order.
    fn encode_fields(&self, fields: &Self::Fields) -> Result<JsonMap<String, JsonValue>>;

    /// Decode a JSON payload.
    fn decode(&self, bytes: &[u8]) -> Result<Record<Self::Fields>> {
        let object: JsonMap<String, JsonValue> =
            serde_json::from_slice(bytes).map_err(Error::MalformedPayload)?;
        self.decode_object(object)
    }

    /// Decode an already parsed JSON object.
    fn decode_object(&self, object: JsonMap<String, JsonValue>) -> Result<Record<Self::Fields>> {
        check_required(self.schema(), &object)?;
        match self.decode_fields(&object) {
            Ok(fields) => Ok(Record::new(fields)),
            Err(e) if e.classify() == Category::Data => {
                log::debug!(
                    "{}: payload does not match the declared shape ({}); keeping it unparsed",
                    self.schema().name,
                    e
                );
                Ok(Record::Unparsed(object))
            }
            Err(e) => Err(Error::MalformedPayload(e)),
        }
    }

    /// Encode a record into a JSON value.
    fn encode_value(&self, record: &Record<Self::Fields>) -> Result<JsonValue> {
        match record {
            Record::Unparsed(object) => Ok(JsonValue::Object(object.clone())),
            Record::Typed {
                fields,
                additional_properties,
            } => {
                let mut out = self.encode_fields(fields)?;
                for (key, value) in additional_properties {
                    out.insert(key.clone(), value.clone());
                }
                Ok(JsonValue::Object(out))
            }
        }
    }

    /// Encode a record into JSON text.
    fn encode(&self, record: &Record<Self::Fields>) -> Result<Vec<u8>> {
        match record {
            Record::Unparsed(object) => Ok(serde_json::to_vec(object)?),
            Record::Typed { .. } => Ok(serde_json::to_vec(&self.encode_value(record)?)?),
        }
    }
}

/// Presence pass: every required property must be present and non-null.
///
/// Fields are checked in declaration order, so the first missing one is
/// reported.
pub fn check_required(schema: &ModelSchema, object: &JsonMap<String, JsonValue>) -> Result<()> {
    for field in schema.required_fields() {
        match object.get(&field.wire_name) {
            None | Some(JsonValue::Null) => return Err(Error::missing_field(&field.wire_name)),
            Some(_) => {}
        }
    }
    Ok(())
}

/// Short JSON kind name used in shape mismatch messages.
pub(crate) fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(n) if n.is_f64() => "number",
        JsonValue::Number(_) => "integer",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
