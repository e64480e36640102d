//! Model schema descriptions driving the generic codec

mod model;
mod types;

pub use model::{FieldSpec, ModelSchema};
pub use types::SchemaType;
