//!
//! A named measurement of a single operation.
//!

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use crate::model::error::Error as ValidationError;

///
/// A named measurement of a single operation.
///
/// The value, range, and unit are kept exactly as the producer wrote them.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bench {
    /// The measured operation, for example `BatchSpanProcessor process span`.
    pub name: String,
    /// The measured value.
    pub value: serde_json::Number,
    /// The variation, for example `±1.23%`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// The unit, for example `ops/sec`.
    pub unit: String,
    /// Free-form details, for example `89 samples`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
    /// Fields written by other producers.
    #[serde(flatten)]
    pub other: IndexMap<String, serde_json::Value>,
}

impl Bench {
    ///
    /// Creates a measurement without range and extra details.
    ///
    pub fn new(name: String, value: serde_json::Number, unit: String) -> Self {
        Self {
            name,
            value,
            range: None,
            unit,
            extra: None,
            other: IndexMap::new(),
        }
    }

    ///
    /// Sets the variation.
    ///
    pub fn with_range(mut self, range: String) -> Self {
        self.range = Some(range);
        self
    }

    ///
    /// Sets the free-form details.
    ///
    pub fn with_extra(mut self, extra: String) -> Self {
        self.extra = Some(extra);
        self
    }

    ///
    /// Checks that the required fields are present.
    ///
    /// `index` is the position of the record in its entry, used for reporting.
    ///
    pub fn validate(&self, index: usize) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyBenchField {
                index,
                field: "name",
            });
        }
        if self.unit.is_empty() {
            return Err(ValidationError::EmptyBenchField {
                index,
                field: "unit",
            });
        }
        Ok(())
    }
}
