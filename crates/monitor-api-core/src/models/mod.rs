//! Generated API models.
//!
//! Each model is a serde struct plus a static [`ModelSchema`] and goes
//! through the shared codec via [`ModelFields`].

pub mod v1;
pub mod v2;

use crate::codec::ModelFields;
use crate::schema::ModelSchema;

/// Schemas of every model bundled with the crate.
pub fn builtin_schemas() -> Vec<&'static ModelSchema> {
    vec![
        v1::DowntimeRecurrence::schema(),
        v2::IncidentAttachmentLinkAttributesAttachmentObject::schema(),
        v2::LogsQueryFilter::schema(),
    ]
}
