//! The link attachment of an incident.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::codec::{ModelFields, Record};
use crate::schema::{FieldSpec, ModelSchema, SchemaType};

static SCHEMA: Lazy<ModelSchema> = Lazy::new(|| {
    ModelSchema::new("IncidentAttachmentLinkAttributesAttachmentObject")
        .with_description("The link attachment.")
        .with_field(
            FieldSpec::required("document_url", "documentUrl", SchemaType::String)
                .with_description("The URL of this link attachment."),
        )
        .with_field(
            FieldSpec::required("title", "title", SchemaType::String)
                .with_description("The title of this link attachment."),
        )
});

/// The link attachment.
///
/// Both properties are required: decoding a payload without `documentUrl`
/// or `title` fails with [`crate::Error::MissingRequiredField`].
///
/// ```
/// use monitor_api_core::models::v2::IncidentAttachmentLinkAttributesAttachmentObject;
///
/// # fn main() -> monitor_api_core::Result<()> {
/// let record = IncidentAttachmentLinkAttributesAttachmentObject::new(
///     "https://docs.example.com/postmortem",
///     "Postmortem",
/// )
/// .into_record()
/// .with_additional_property("owner", "team-x");
///
/// let value = record.to_value()?;
/// assert_eq!(value["documentUrl"], "https://docs.example.com/postmortem");
/// assert_eq!(value["owner"], "team-x");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentAttachmentLinkAttributesAttachmentObject {
    /// The URL of this link attachment.
    #[serde(rename = "documentUrl")]
    pub document_url: String,
    /// The title of this link attachment.
    pub title: String,
}

impl IncidentAttachmentLinkAttributesAttachmentObject {
    pub fn new(document_url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            document_url: document_url.into(),
            title: title.into(),
        }
    }

    pub fn set_document_url(&mut self, document_url: impl Into<String>) {
        self.document_url = document_url.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Wrap into a typed record with no additional properties.
    pub fn into_record(self) -> Record<Self> {
        Record::new(self)
    }
}

impl ModelFields for IncidentAttachmentLinkAttributesAttachmentObject {
    fn schema() -> &'static ModelSchema {
        &SCHEMA
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{ModelCodec, TypedCodec};
    use serde_json::json;

    type Link = IncidentAttachmentLinkAttributesAttachmentObject;

    #[test]
    fn test_schema_matches_serde_names() -> crate::Result<()> {
        let value = Link::new("u", "t").into_record().to_value()?;
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        let wire: Vec<_> = Link::schema()
            .fields
            .iter()
            .map(|f| f.wire_name.clone())
            .collect();
        assert_eq!(keys, wire);
        Ok(())
    }

    #[test]
    fn test_setters() {
        let mut link = Link::new("u", "t");
        link.set_document_url("https://example.com/runbook");
        link.set_title("Runbook");
        assert_eq!(link, Link::new("https://example.com/runbook", "Runbook"));
    }

    #[test]
    fn test_fields_mut_on_decoded_record() -> crate::Result<()> {
        let codec = TypedCodec::<Link>::new();
        let mut record = codec.decode(br#"{"documentUrl": "u", "title": "t"}"#)?;
        if let Some(link) = record.fields_mut() {
            link.set_title("renamed");
        }
        assert_eq!(
            codec.encode_value(&record)?,
            json!({"documentUrl": "u", "title": "renamed"})
        );
        Ok(())
    }
}
