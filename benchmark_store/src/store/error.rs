//!
//! Benchmark store error.
//!

use std::path::PathBuf;

use crate::model::error::Error as ValidationError;
use crate::store::script::Error as ScriptError;

///
/// Benchmark store error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the data file.
    #[error("Reading data file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the data file.
        path: PathBuf,
    },
    /// Empty file error.
    #[error("Data file {path:?} is empty")]
    EmptyFile {
        /// The path to the data file.
        path: PathBuf,
    },
    /// Error decoding the data file.
    #[error("Decoding data file {path:?}: {error}")]
    Decoding {
        /// The underlying decoding error.
        error: ScriptError,
        /// The path to the data file.
        path: PathBuf,
    },
    /// The appended entry is malformed.
    #[error("Appending to data file {path:?}: {error}")]
    Validation {
        /// The underlying validation error.
        error: ValidationError,
        /// The path to the data file.
        path: PathBuf,
    },
    /// Error encoding the dataset.
    #[error("Encoding data file {path:?}: {error}")]
    Encoding {
        /// The underlying JSON error.
        error: serde_json::Error,
        /// The path to the data file.
        path: PathBuf,
    },
    /// Error writing the data file.
    #[error("Writing data file {path:?}: {error}")]
    Writing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the data file.
        path: PathBuf,
    },
}
