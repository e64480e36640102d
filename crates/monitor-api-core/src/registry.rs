//! Name-indexed set of model codecs.
//!
//! A registry is built either from the models bundled with the crate or
//! from the object schemas of an OpenAPI document, and decodes/encodes
//! payloads by model name.

use std::collections::BTreeMap;

use crate::codec::{DynamicRecord, ModelCodec, SchemaCodec};
use crate::config::Config;
use crate::models::builtin_schemas;
use crate::openapi::OpenApiContext;
use crate::schema::ModelSchema;
use crate::utils::to_upper_camel_case;
use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    codecs: BTreeMap<String, SchemaCodec>,
}

impl ModelRegistry {
    /// Registry of the models bundled with the crate.
    pub fn builtin() -> Self {
        builtin_schemas().into_iter().cloned().collect()
    }

    /// Registry of the object schemas of an OpenAPI document.
    ///
    /// With an empty `names` list every schema that describes an object is
    /// loaded and the others are skipped. Named models must all exist.
    pub fn from_openapi(spec: &OpenApiContext, names: &[String]) -> Result<Self> {
        if !names.is_empty() {
            return names
                .iter()
                .map(|name| spec.model_schema(name))
                .collect::<Result<Self>>();
        }

        let mut registry = Self::default();
        for name in spec.model_names() {
            match spec.model_schema(&name) {
                Ok(schema) => registry.insert(schema),
                Err(e) => log::debug!("Skipping schema '{}': {}", name, e),
            }
        }
        Ok(registry)
    }

    /// Registry described by a configuration.
    pub async fn load(config: &Config) -> Result<Self> {
        let Some(source) = config.schema_source.as_deref() else {
            return Ok(Self::builtin());
        };
        let spec = OpenApiContext::from_file_or_url(source).await?;
        log::info!(
            "Loaded OpenAPI document '{}' version {}",
            spec.title().unwrap_or("untitled"),
            spec.version().unwrap_or("unknown")
        );
        Self::from_openapi(&spec, &config.models)
    }

    pub fn insert(&mut self, schema: ModelSchema) {
        self.codecs
            .insert(schema.name.clone(), SchemaCodec::new(schema));
    }

    /// Look up a codec by model name; `logs_query_filter` finds `LogsQueryFilter`.
    pub fn get(&self, name: &str) -> Option<&SchemaCodec> {
        self.codecs
            .get(name)
            .or_else(|| self.codecs.get(&to_upper_camel_case(name)))
    }

    /// Model names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.codecs.keys().map(String::as_str)
    }

    pub fn schemas(&self) -> impl Iterator<Item = &ModelSchema> {
        self.codecs.values().map(|codec| codec.schema())
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    pub fn decode(&self, name: &str, bytes: &[u8]) -> Result<DynamicRecord> {
        self.codec(name)?.decode(bytes)
    }

    pub fn encode(&self, name: &str, record: &DynamicRecord) -> Result<Vec<u8>> {
        self.codec(name)?.encode(record)
    }

    fn codec(&self, name: &str) -> Result<&SchemaCodec> {
        self.get(name)
            .ok_or_else(|| Error::config(format!("Unknown model '{}'", name)))
    }
}

impl FromIterator<ModelSchema> for ModelRegistry {
    fn from_iter<I: IntoIterator<Item = ModelSchema>>(iter: I) -> Self {
        let mut registry = Self::default();
        for schema in iter {
            registry.insert(schema);
        }
        registry
    }
}
