//! Monitoring API Core Library
//!
//! This library provides the typed API models of the monitoring platform
//! client and the JSON codec every model goes through: required properties
//! are validated, and payloads that do not fit the declared shape are kept
//! verbatim instead of being rejected.

pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod openapi;
pub mod registry;
pub mod schema;
pub mod utils;

pub use crate::{
    codec::{DynamicRecord, ModelCodec, ModelFields, Record, SchemaCodec, TypedCodec},
    config::Config,
    error::{Error, Result},
    openapi::OpenApiContext,
    registry::ModelRegistry,
    schema::{FieldSpec, ModelSchema, SchemaType},
};
