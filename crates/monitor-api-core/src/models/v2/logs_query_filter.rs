//! Search and filter query settings for log listing.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::LogsStorageTier;
use crate::codec::ModelFields;
use crate::schema::{FieldSpec, ModelSchema, SchemaType};

static SCHEMA: Lazy<ModelSchema> = Lazy::new(|| {
    ModelSchema::new("LogsQueryFilter")
        .with_description("The search and filter query settings")
        .with_field(FieldSpec::optional("from", "from", SchemaType::String))
        .with_field(
            FieldSpec::optional("indexes", "indexes", SchemaType::Array)
                .with_items(SchemaType::String),
        )
        .with_field(FieldSpec::optional("query", "query", SchemaType::String))
        .with_field(
            FieldSpec::optional("storage_tier", "storage_tier", SchemaType::String)
                .with_allowed_values(LogsStorageTier::ALL.map(|tier| tier.as_str())),
        )
        .with_field(FieldSpec::optional("to", "to", SchemaType::String))
});

/// The search and filter query settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogsQueryFilter {
    /// The minimum time for the requested logs; supports date math and timestamps in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// For customers with multiple indexes, the indexes to search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexes: Option<Vec<String>>,
    /// The search query, following the log search syntax.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Specifies storage type as indexes, online-archives or flex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_tier: Option<LogsStorageTier>,
    /// The maximum time for the requested logs; supports date math and timestamps in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl LogsQueryFilter {
    /// An empty filter; the server applies its own defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// A filter carrying the documented default values.
    pub fn with_defaults() -> Self {
        Self {
            from: Some("now-15m".to_string()),
            indexes: Some(vec!["*".to_string()]),
            query: Some("*".to_string()),
            storage_tier: Some(LogsStorageTier::Indexes),
            to: Some("now".to_string()),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_range(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self.to = Some(to.into());
        self
    }
}

impl ModelFields for LogsQueryFilter {
    fn schema() -> &'static ModelSchema {
        &SCHEMA
    }
}
