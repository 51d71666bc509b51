//! Configuration parameter shapes.

use serde::{Deserialize, Serialize};

use crate::value::TemplateValue;

/// A named string parameter written to the parameter store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringParameter {
    /// Hierarchical parameter name (e.g. `/edgestack/dev/...`).
    pub parameter_name: String,
    /// Parameter value, possibly resolved at deploy time.
    pub string_value: TemplateValue,
}

impl StringParameter {
    /// Create a string parameter.
    #[must_use]
    pub fn new(parameter_name: impl Into<String>, string_value: TemplateValue) -> Self {
        Self {
            parameter_name: parameter_name.into(),
            string_value,
        }
    }
}
