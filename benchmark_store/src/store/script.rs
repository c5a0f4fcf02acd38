//!
//! The data file script encoding.
//!
//! The dataset is stored as a script assigning a JSON object literal to a global variable,
//! so that a static dashboard can load it with a `<script>` tag.
//!

use crate::model::dataset::Dataset;

/// The assignment the data file starts with.
pub const PREFIX: &str = "window.BENCHMARK_DATA = ";

///
/// Data file script decoding error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file does not start with the global variable assignment.
    #[error("Expected the script to start with `{}`", PREFIX.trim_end())]
    MissingPrefix,
    /// The assigned object is not a valid dataset.
    #[error("Parsing the assigned object: {0}")]
    Parsing(#[from] serde_json::Error),
}

///
/// Encodes the dataset as the data file script, pretty-printed with two-space indentation.
///
pub fn encode(dataset: &Dataset) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(dataset)?;
    Ok(format!("{PREFIX}{json}"))
}

///
/// Decodes the dataset from the data file script.
///
/// Surrounding whitespace and a trailing semicolon are accepted.
///
pub fn decode(script: &str) -> Result<Dataset, Error> {
    let object = script
        .trim()
        .strip_prefix(PREFIX.trim_end())
        .ok_or(Error::MissingPrefix)?;
    let object = object.trim();
    let object = object.strip_suffix(';').unwrap_or(object);
    Ok(serde_json::from_str(object)?)
}
