//!
//! Benchmark tool output reading error.
//!

use std::path::PathBuf;

///
/// Benchmark tool output reading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the output file.
    #[error("Reading tool output file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the output file.
        path: PathBuf,
    },
    /// Error parsing the output.
    #[error("Parsing tool output: {0}")]
    Parsing(#[from] serde_json::Error),
    /// A measured value is not a finite number.
    #[error("Line {line}: value `{value}` is not a finite number")]
    InvalidValue {
        /// The 1-based line number in the output.
        line: usize,
        /// The offending value.
        value: String,
    },
}
