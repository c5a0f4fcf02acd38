//!
//! Benchmark entry validation error.
//!

///
/// Benchmark entry validation error.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The suite name is empty.
    #[error("Suite name is empty")]
    EmptySuite,
    /// A required commit field is empty.
    #[error("Commit field `{field}` is empty")]
    EmptyCommitField {
        /// The field name.
        field: &'static str,
    },
    /// A required bench record field is empty.
    #[error("Bench #{index} field `{field}` is empty")]
    EmptyBenchField {
        /// The position of the record in the entry.
        index: usize,
        /// The field name.
        field: &'static str,
    },
}
