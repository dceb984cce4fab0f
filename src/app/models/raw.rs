//! Raw record representation used between loading and validation
//!
//! Loaders turn each CSV row or JSON object into a [`RawRecord`]: a label for
//! error reporting plus a map of field values that have already been through
//! the normalization step (renamed columns, parsed dates, missing values
//! removed). The typed accessors here implement the coercion rules that decide
//! whether a record becomes an `Equipment` or `MaintenanceLog`.

use super::dates::parse_calendar_date;
use crate::{Error, Result};
use chrono::NaiveDate;
use std::collections::HashMap;

/// A single normalized field value
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Date(NaiveDate),
    List(Vec<RawValue>),
    Object,
    /// Explicit null; only survives inside lists, top-level nulls are dropped
    Null,
}

impl RawValue {
    /// Short type name used in validation messages
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Text(_) => "text",
            RawValue::Number(_) => "number",
            RawValue::Boolean(_) => "boolean",
            RawValue::Date(_) => "date",
            RawValue::List(_) => "list",
            RawValue::Object => "object",
            RawValue::Null => "null",
        }
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::String(s) => RawValue::Text(s),
            // Numbers outside f64 range are not produced by serde_json
            Value::Number(n) => RawValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::Bool(b) => RawValue::Boolean(b),
            Value::Array(items) => RawValue::List(items.into_iter().map(RawValue::from).collect()),
            Value::Object(_) => RawValue::Object,
            Value::Null => RawValue::Null,
        }
    }
}

/// A labelled map of normalized field values; a missing key means absent
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    label: String,
    fields: HashMap<String, RawValue>,
}

impl RawRecord {
    /// Create an empty record with a label such as `equipment row 3`
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fields: HashMap::new(),
        }
    }

    /// Label identifying the source record in error messages
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Set a field value, replacing any previous value
    pub fn insert(&mut self, field: impl Into<String>, value: RawValue) {
        self.fields.insert(field.into(), value);
    }

    /// Remove a field, returning its value if it was present
    pub fn remove(&mut self, field: &str) -> Option<RawValue> {
        self.fields.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&RawValue> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Required string field
    pub fn required_text(&self, field: &str) -> Result<String> {
        match self.require(field)? {
            RawValue::Text(s) => Ok(s.clone()),
            other => Err(self.type_error(field, "text", other)),
        }
    }

    /// Required calendar date field; text is parsed with the accepted date formats
    pub fn required_date(&self, field: &str) -> Result<NaiveDate> {
        let value = self.require(field)?;
        self.coerce_date(field, value)
    }

    /// Optional calendar date field
    pub fn optional_date(&self, field: &str) -> Result<Option<NaiveDate>> {
        self.fields
            .get(field)
            .map(|value| self.coerce_date(field, value))
            .transpose()
    }

    /// Required number field; numeric text is accepted
    pub fn required_number(&self, field: &str) -> Result<f64> {
        match self.require(field)? {
            RawValue::Number(n) => Ok(*n),
            RawValue::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                Error::validation(
                    &self.label,
                    field,
                    format!("'{}' is not a valid number", s),
                )
            }),
            other => Err(self.type_error(field, "number", other)),
        }
    }

    /// Optional list of strings
    pub fn optional_text_list(&self, field: &str) -> Result<Option<Vec<String>>> {
        let Some(value) = self.fields.get(field) else {
            return Ok(None);
        };

        match value {
            RawValue::List(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| match item {
                    RawValue::Text(s) => Ok(s.clone()),
                    other => Err(Error::validation(
                        &self.label,
                        field,
                        format!("item {} must be text, found {}", i, other.kind()),
                    )),
                })
                .collect::<Result<Vec<_>>>()
                .map(Some),
            other => Err(self.type_error(field, "list of text", other)),
        }
    }

    fn require(&self, field: &str) -> Result<&RawValue> {
        self.fields
            .get(field)
            .ok_or_else(|| Error::validation(&self.label, field, "required field is missing"))
    }

    fn coerce_date(&self, field: &str, value: &RawValue) -> Result<NaiveDate> {
        match value {
            RawValue::Date(date) => Ok(*date),
            RawValue::Text(s) => parse_calendar_date(s).ok_or_else(|| {
                Error::validation(&self.label, field, format!("'{}' is not a valid date", s))
            }),
            other => Err(self.type_error(field, "date", other)),
        }
    }

    fn type_error(&self, field: &str, expected: &str, found: &RawValue) -> Error {
        Error::validation(
            &self.label,
            field,
            format!("expected {}, found {}", expected, found.kind()),
        )
    }
}
