//! The decoded form of an API model.

use serde_json::{Map as JsonMap, Value as JsonValue};

/// An API model value, either typed or kept as the raw JSON object.
///
/// `Typed` holds the declared fields plus caller-supplied additional
/// properties that are merged into the encoded object. `Unparsed` holds a
/// payload that was valid JSON but did not fit the declared shape; it is
/// written back exactly as received.
#[derive(Debug, Clone, PartialEq)]
pub enum Record<T> {
    Typed {
        fields: T,
        additional_properties: JsonMap<String, JsonValue>,
    },
    Unparsed(JsonMap<String, JsonValue>),
}

impl<T> Record<T> {
    /// A typed record with no additional properties.
    pub fn new(fields: T) -> Self {
        Self::Typed {
            fields,
            additional_properties: JsonMap::new(),
        }
    }

    /// Wrap a raw object that bypasses the declared shape.
    pub fn unparsed(object: JsonMap<String, JsonValue>) -> Self {
        Self::Unparsed(object)
    }

    pub fn is_typed(&self) -> bool {
        matches!(self, Self::Typed { .. })
    }

    pub fn is_unparsed(&self) -> bool {
        matches!(self, Self::Unparsed(_))
    }

    /// Declared fields, or `None` for an unparsed record.
    pub fn fields(&self) -> Option<&T> {
        match self {
            Self::Typed { fields, .. } => Some(fields),
            Self::Unparsed(_) => None,
        }
    }

    pub fn fields_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Typed { fields, .. } => Some(fields),
            Self::Unparsed(_) => None,
        }
    }

    pub fn into_fields(self) -> Option<T> {
        match self {
            Self::Typed { fields, .. } => Some(fields),
            Self::Unparsed(_) => None,
        }
    }

    /// The raw object kept for an unparsed record.
    pub fn unparsed_object(&self) -> Option<&JsonMap<String, JsonValue>> {
        match self {
            Self::Typed { .. } => None,
            Self::Unparsed(object) => Some(object),
        }
    }

    pub fn additional_properties(&self) -> Option<&JsonMap<String, JsonValue>> {
        match self {
            Self::Typed {
                additional_properties,
                ..
            } => Some(additional_properties),
            Self::Unparsed(_) => None,
        }
    }

    pub fn additional_properties_mut(&mut self) -> Option<&mut JsonMap<String, JsonValue>> {
        match self {
            Self::Typed {
                additional_properties,
                ..
            } => Some(additional_properties),
            Self::Unparsed(_) => None,
        }
    }

    /// Add a property written next to the declared fields on encode.
    ///
    /// Unparsed records are written back verbatim, so the property is
    /// discarded for them.
    pub fn with_additional_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<JsonValue>,
    ) -> Self {
        if let Some(props) = self.additional_properties_mut() {
            props.insert(key.into(), value.into());
        }
        self
    }
}

impl<T> From<T> for Record<T> {
    fn from(fields: T) -> Self {
        Self::new(fields)
    }
}
