//! Models of the v2 API.

mod incident_attachment_link_attributes_attachment_object;
mod logs_query_filter;
mod logs_storage_tier;

pub use incident_attachment_link_attributes_attachment_object::IncidentAttachmentLinkAttributesAttachmentObject;
pub use logs_query_filter::LogsQueryFilter;
pub use logs_storage_tier::LogsStorageTier;
