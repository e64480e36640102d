//! OpenAPI document loading and model schema discovery.
//!
//! This module loads an OpenAPI 3 or Swagger 2 document and turns the object
//! schemas it declares into [`ModelSchema`]s, so that models the crate does
//! not ship a Rust type for can still go through the model codec.
//!
//! # Examples
//!
//! ```no_run
//! use monitor_api_core::codec::{ModelCodec, SchemaCodec};
//! use monitor_api_core::openapi::OpenApiContext;
//! use monitor_api_core::error::Result;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let spec = OpenApiContext::from_file("openapi.yaml").await?;
//! if let Some(title) = spec.title() {
//!     println!("API Title: {}", title);
//! }
//!
//! let schema = spec.model_schema("IncidentAttachmentLinkAttributesAttachmentObject")?;
//! let record = SchemaCodec::new(schema).decode(br#"{"documentUrl": "u", "title": "t"}"#)?;
//! assert!(record.is_typed());
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::Path;

use crate::schema::{FieldSpec, ModelSchema, SchemaType};
use crate::utils::{http_url, to_snake_case};
use crate::Error;

// External imports (alphabetized)
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value as JsonValue;
use tokio::fs;

static SCHEMA_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#/(?:components/schemas|definitions)/([^/]+)$").expect("schema ref pattern")
});

/// Represents an OpenAPI specification
#[derive(Debug, Clone, serde::Serialize)]
#[serde(transparent)]
pub struct OpenApiContext {
    /// The raw JSON value of the OpenAPI spec
    pub json: JsonValue,
}

impl OpenApiContext {
    /// Load a spec from a file path or an http(s) URL (YAML or JSON)
    pub async fn from_file_or_url(location: &str) -> crate::Result<Self> {
        match http_url(location) {
            Some(url) => Self::from_url(url.as_str()).await,
            None => Self::from_file(location).await,
        }
    }

    /// Load a spec from a file (YAML or JSON)
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        Self::parse_content(&content).map_err(|e| {
            Error::openapi(format!(
                "Failed to parse OpenAPI spec at {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Fetch a spec from a URL (YAML or JSON)
    pub async fn from_url(url: &str) -> crate::Result<Self> {
        let response = reqwest::get(url).await.map_err(|e| {
            Error::openapi(format!("Failed to fetch OpenAPI spec from {}: {}", url, e))
        })?;

        if !response.status().is_success() {
            return Err(Error::openapi(format!(
                "Failed to fetch OpenAPI spec from {}: HTTP {}",
                url,
                response.status()
            )));
        }

        let content = response.text().await.map_err(|e| {
            Error::openapi(format!("Failed to read response from {}: {}", url, e))
        })?;

        Self::parse_content(&content).map_err(|e| {
            Error::openapi(format!("Failed to parse OpenAPI spec from {}: {}", url, e))
        })
    }

    /// Parse content as either JSON or YAML
    pub fn parse_content(content: &str) -> Result<Self, String> {
        if let Ok(json) = serde_json::from_str(content) {
            return Ok(Self { json });
        }
        if let Ok(json) = serde_yaml::from_str(content) {
            return Ok(Self { json });
        }
        Err("content is neither valid JSON nor YAML".to_string())
    }

    /// Get the title of the API
    pub fn title(&self) -> Option<&str> {
        self.json.get("info")?.get("title")?.as_str()
    }

    /// Get the version of the API
    pub fn version(&self) -> Option<&str> {
        self.json.get("info")?.get("version")?.as_str()
    }

    /// Names of all declared schemas, OpenAPI 3 components first, then Swagger 2 definitions
    pub fn model_names(&self) -> Vec<String> {
        let components = self
            .json
            .get("components")
            .and_then(|c| c.get("schemas"))
            .and_then(JsonValue::as_object);
        let definitions = self.json.get("definitions").and_then(JsonValue::as_object);
        components
            .into_iter()
            .chain(definitions)
            .flat_map(|schemas| schemas.keys().cloned())
            .collect()
    }

    /// Build the model schema of a declared object schema.
    ///
    /// Properties keep their document order. Property types come from the
    /// `type` keyword, following one level of `$ref`; composed schemas
    /// (`oneOf`, `allOf`, ...) are left unconstrained.
    pub fn model_schema(&self, name: &str) -> crate::Result<ModelSchema> {
        let def = self
            .schema_definition(name)
            .and_then(JsonValue::as_object)
            .ok_or_else(|| Error::openapi(format!("Schema '{}' not found", name)))?;

        if let Some(typ) = def.get("type").and_then(JsonValue::as_str) {
            if typ != "object" {
                return Err(Error::openapi(format!(
                    "Schema '{}' is of type '{}', not an object model",
                    name, typ
                )));
            }
        }

        let required: Vec<&str> = def
            .get("required")
            .and_then(JsonValue::as_array)
            .map(|arr| arr.iter().filter_map(JsonValue::as_str).collect())
            .unwrap_or_default();

        let mut schema = ModelSchema::new(name);
        if let Some(description) = def.get("description").and_then(JsonValue::as_str) {
            schema = schema.with_description(description);
        }

        if let Some(properties) = def.get("properties").and_then(JsonValue::as_object) {
            for (wire_name, property) in properties {
                schema = schema.with_field(self.field_spec(
                    wire_name,
                    property,
                    required.contains(&wire_name.as_str()),
                ));
            }
        }

        let undeclared: Vec<&str> = required
            .iter()
            .copied()
            .filter(|r| !schema.declares(r))
            .collect();
        for missing in undeclared {
            log::warn!(
                "{}: required property '{}' has no definition; only its presence is checked",
                name,
                missing
            );
            schema = schema.with_field(FieldSpec {
                ty: None,
                ..FieldSpec::required(to_snake_case(missing), missing, SchemaType::Object)
            });
        }

        log::debug!(
            "Discovered schema '{}' with {} fields ({} required)",
            name,
            schema.fields.len(),
            schema.required_fields().count()
        );
        Ok(schema)
    }

    fn schema_definition(&self, name: &str) -> Option<&JsonValue> {
        self.json
            .get("components")
            .and_then(|c| c.get("schemas"))
            .and_then(|s| s.get(name))
            .or_else(|| self.json.get("definitions").and_then(|d| d.get(name)))
    }

    /// Follow a local `$ref`; other schemas are returned unchanged.
    fn resolve<'a>(&'a self, schema: &'a JsonValue) -> Option<&'a JsonValue> {
        match schema.get("$ref").and_then(JsonValue::as_str) {
            Some(reference) => {
                let name = SCHEMA_REF.captures(reference)?.get(1)?.as_str();
                self.schema_definition(name)
            }
            None => Some(schema),
        }
    }

    fn field_spec(&self, wire_name: &str, property: &JsonValue, required: bool) -> FieldSpec {
        let resolved = self.resolve(property);
        let ty = resolved.and_then(declared_type);
        let items = match ty {
            Some(SchemaType::Array) => resolved
                .and_then(|s| s.get("items"))
                .and_then(|items| self.resolve(items))
                .and_then(declared_type),
            _ => None,
        };
        let format = resolved
            .and_then(|s| s.get("format"))
            .and_then(JsonValue::as_str)
            .map(String::from);
        let allowed_values = resolved
            .and_then(|s| s.get("enum"))
            .and_then(JsonValue::as_array)
            .cloned()
            .unwrap_or_default();
        let description = property
            .get("description")
            .or_else(|| resolved.and_then(|s| s.get("description")))
            .and_then(JsonValue::as_str)
            .map(String::from);

        FieldSpec {
            name: to_snake_case(wire_name),
            wire_name: wire_name.to_string(),
            required,
            ty,
            items,
            format,
            allowed_values,
            description,
        }
    }
}

fn declared_type(schema: &JsonValue) -> Option<SchemaType> {
    match schema.get("type") {
        Some(JsonValue::String(keyword)) => SchemaType::from_keyword(keyword),
        Some(_) => None,
        None if schema.get("properties").is_some() => Some(SchemaType::Object),
        None => None,
    }
}
