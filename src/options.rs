use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Options controlling how a source geometry is converted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Emit each child of a MultiLineString or MultiPolygon as its own geometry instead of
    /// merging all children into one. MultiPoints are always emitted point by point.
    pub flatten_multiparts: bool,
}

impl ConvertOptions {
    pub fn new(flatten_multiparts: bool) -> Self {
        Self { flatten_multiparts }
    }

    pub fn with_flatten_multiparts(self, flatten_multiparts: bool) -> Self {
        Self {
            flatten_multiparts,
            ..self
        }
    }

    /// Parse options from a JSON object. Missing keys take their default.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
