//!
//! The result of appending a benchmark run.
//!

use crate::comparison::threshold::Threshold;
use crate::comparison::Comparison;
use crate::model::dataset::Dataset;

///
/// The result of appending a benchmark run.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The dataset as written to the data file.
    pub dataset: Dataset,
    /// The suite the run was appended to.
    pub suite: String,
}

impl Outcome {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(dataset: Dataset, suite: String) -> Self {
        Self { dataset, suite }
    }

    ///
    /// Compares the appended run with the run before it.
    ///
    /// Returns `None` if the suite is empty, which an append never leaves behind.
    ///
    pub fn comparison(&self, threshold: Threshold) -> Option<Comparison<'_>> {
        match self.dataset.suite(self.suite.as_str()) {
            [.., previous, current] => Some(Comparison::new(Some(previous), current, threshold)),
            [current] => Some(Comparison::new(None, current, threshold)),
            [] => None,
        }
    }
}
