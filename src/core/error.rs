use std::collections::BTreeMap;
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::record::ErrorRecord;
use crate::core::types::Parameter;

/// Errors grouped by field, plus the ones not attached to any field.
///
/// The collection only accumulates; it never rejects input. Field names are
/// kept sorted so the serialized form is deterministic, while the records of
/// each field and the globals keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorCollection {
    #[serde(rename = "Fields", default)]
    fields: BTreeMap<String, Vec<ErrorRecord>>,
    #[serde(rename = "Globals", default)]
    globals: Vec<ErrorRecord>,
}

impl ErrorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// A collection holding a single global error.
    pub fn with_global(message: impl Into<String>, parameters: Vec<Parameter>) -> Self {
        Self {
            fields: BTreeMap::new(),
            globals: vec![ErrorRecord::new(message, parameters)],
        }
    }

    /// Attach an error to `field`.
    ///
    /// A parameter written as `{LANGUAGE_KEY}` is replaced by the label of
    /// `LANGUAGE_KEY` when the message is rendered.
    pub fn add_field(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        parameters: Vec<Parameter>,
    ) {
        let field = field.into();
        let record = ErrorRecord::new(message, parameters);
        trace!(field = %field, message = record.message(), "field error recorded");
        self.fields
            .entry(field)
            .or_insert_with(Vec::new)
            .push(record);
    }

    /// Record an error that isn't tied to a field.
    pub fn add_global(&mut self, message: impl Into<String>, parameters: Vec<Parameter>) {
        let record = ErrorRecord::new(message, parameters);
        trace!(message = record.message(), "global error recorded");
        self.globals.push(record);
    }

    pub fn has_error(&self) -> bool {
        !self.globals.is_empty() || self.fields.values().any(|records| !records.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        !self.has_error()
    }

    /// Total number of records, field and global.
    pub fn len(&self) -> usize {
        self.globals.len() + self.fields.values().map(Vec::len).sum::<usize>()
    }

    pub fn clear(&mut self) {
        debug!(discarded = self.len(), "clearing error collection");
        self.fields.clear();
        self.globals.clear();
    }

    pub fn fields(&self) -> &BTreeMap<String, Vec<ErrorRecord>> {
        &self.fields
    }

    pub fn globals(&self) -> &[ErrorRecord] {
        &self.globals
    }

    /// Records attached to `field`; empty when the field has none.
    pub fn field(&self, field: &str) -> &[ErrorRecord] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append everything from `other` after the records already held.
    pub fn merge(&mut self, other: ErrorCollection) {
        debug!(incoming = other.len(), "merging error collections");
        let ErrorCollection { fields, mut globals } = other;
        self.globals.append(&mut globals);
        for (field, mut records) in fields {
            self.fields
                .entry(field)
                .or_insert_with(Vec::new)
                .append(&mut records);
        }
    }

    /// `Ok(value)` when nothing was recorded, otherwise the collection itself.
    pub fn into_result<T>(self, value: T) -> Result<T, ErrorCollection> {
        if self.has_error() {
            Err(self)
        } else {
            Ok(value)
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let fields: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|(field, records)| {
                let records = records.iter().map(ErrorRecord::to_json).collect();
                (field.clone(), serde_json::Value::Array(records))
            })
            .collect();

        serde_json::json!({
            "Fields": fields,
            "Globals": self.globals.iter().map(ErrorRecord::to_json).collect::<Vec<_>>(),
        })
    }
}

impl fmt::Display for ErrorCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_error() {
            return write!(f, "no errors");
        }

        let globals = self.globals.iter().map(|record| record.to_string());
        let fields = self.fields.iter().flat_map(|(field, records)| {
            records
                .iter()
                .map(move |record| format!("{}: {}", field, record))
        });
        write!(
            f,
            "{} error(s): {}",
            self.len(),
            globals.chain(fields).join("; ")
        )
    }
}

impl std::error::Error for ErrorCollection {}
