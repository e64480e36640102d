use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::codec::ModelFields;
use crate::schema::{FieldSpec, ModelSchema, SchemaType};

static SCHEMA: Lazy<ModelSchema> = Lazy::new(|| {
    ModelSchema::new("DowntimeRecurrence")
        .with_description("An object defining the recurrence of the downtime.")
        .with_field(FieldSpec::optional("period", "period", SchemaType::Integer).with_format("int32"))
        .with_field(FieldSpec::optional("rrule", "rrule", SchemaType::String))
        .with_field(FieldSpec::optional("type_", "type", SchemaType::String))
        .with_field(
            FieldSpec::optional("until_date", "until_date", SchemaType::Integer).with_format("int64"),
        )
        .with_field(
            FieldSpec::optional("until_occurrences", "until_occurrences", SchemaType::Integer)
                .with_format("int32"),
        )
        .with_field(
            FieldSpec::optional("week_days", "week_days", SchemaType::Array)
                .with_items(SchemaType::String),
        )
});

/// An object defining the recurrence of the downtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DowntimeRecurrence {
    /// How often to repeat as an integer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<i32>,
    /// The `RRULE` standard for defining recurring events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rrule: Option<String>,
    /// The type of recurrence: `days`, `weeks`, `months`, `years` or `rrule`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    /// POSIX timestamp at which recurrence ends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until_date: Option<i64>,
    /// How many times the downtime is rescheduled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until_occurrences: Option<i32>,
    /// Days of the week to repeat on, e.g. `["Mon", "Tue"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_days: Option<Vec<String>>,
}

impl DowntimeRecurrence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repeat every `period` units of `type_` (`days`, `weeks`, ...).
    pub fn every(period: i32, type_: impl Into<String>) -> Self {
        Self {
            period: Some(period),
            type_: Some(type_.into()),
            ..Self::default()
        }
    }
}

impl ModelFields for DowntimeRecurrence {
    fn schema() -> &'static ModelSchema {
        &SCHEMA
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Record;
    use serde_json::json;

    #[test]
    fn test_yearly_recurrence() -> crate::Result<()> {
        let record = Record::new(DowntimeRecurrence::every(1, "years"));
        assert_eq!(record.to_value()?, json!({"period": 1, "type": "years"}));

        let decoded = Record::<DowntimeRecurrence>::from_slice(&record.to_vec()?)?;
        assert_eq!(decoded, record);
        Ok(())
    }

    #[test]
    fn test_period_overflow_falls_back() -> crate::Result<()> {
        let record = Record::<DowntimeRecurrence>::from_json(r#"{"period": 4294967296, "type": "days"}"#)?;
        assert!(record.is_unparsed());
        Ok(())
    }

    #[test]
    fn test_null_until_date_is_unset() -> crate::Result<()> {
        let record = Record::<DowntimeRecurrence>::from_json(r#"{"type": "weeks", "until_date": null}"#)?;
        let fields = record.fields().expect("typed");
        assert_eq!(fields.until_date, None);
        assert_eq!(fields.type_.as_deref(), Some("weeks"));
        Ok(())
    }
}
