use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::core::types::{label_key, Parameter};

/// One error message plus the parameters substituted into it by a renderer.
///
/// Records are immutable once built. `Message` is always serialized before
/// `Parameters`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    #[serde(rename = "Message", default)]
    message: String,
    #[serde(rename = "Parameters", default)]
    parameters: Vec<Parameter>,
}

impl ErrorRecord {
    pub fn new(message: impl Into<String>, parameters: Vec<Parameter>) -> Self {
        Self {
            message: message.into(),
            parameters,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Keys of every `{KEY}` label token among the parameters, in order.
    pub fn label_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.parameters.iter().filter_map(label_key)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "Message": self.message,
            "Parameters": self.parameters,
        })
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parameters.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(
                f,
                "{} ({})",
                self.message,
                self.parameters.iter().map(render_parameter).join(", ")
            )
        }
    }
}

// Strings print bare, everything else as JSON.
fn render_parameter(parameter: &Parameter) -> String {
    match parameter {
        Parameter::String(text) => text.clone(),
        other => other.to_string(),
    }
}
