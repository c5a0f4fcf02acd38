//!
//! Benchmark tool output parsing.
//!

pub mod benchmarkjs;
pub mod cargo;
pub mod error;

use std::path::Path;

use crate::model::dataset::entry::bench::Bench;
use crate::tool::Tool;

use self::error::Error;

///
/// Measurements extracted from a benchmark tool output.
///
#[derive(Debug)]
pub struct Input {
    /// The tool that produced the output.
    pub tool: Tool,
    /// The extracted measurements, in output order.
    pub benches: Vec<Bench>,
}

impl Input {
    ///
    /// Extracts the measurements from the tool output text.
    ///
    /// Empty output yields no measurements.
    ///
    pub fn parse(tool: Tool, text: &str) -> Result<Self, Error> {
        let benches = if text.trim().is_empty() {
            log::warn!("The {tool} output is empty");
            vec![]
        } else {
            match tool {
                Tool::Benchmarkjs => benchmarkjs::parse(text)?,
                Tool::Cargo => cargo::parse(text)?,
                Tool::CustomBiggerIsBetter | Tool::CustomSmallerIsBetter => {
                    serde_json::from_str(text)?
                }
            }
        };
        log::debug!("Extracted {} bench(es) from the {tool} output", benches.len());
        Ok(Self { tool, benches })
    }
}

impl TryFrom<(&Path, Tool)> for Input {
    type Error = Error;

    fn try_from((path, tool): (&Path, Tool)) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        Self::parse(tool, text.as_str())
    }
}

///
/// Parses a measured value, dropping thousands separators.
///
/// Integers are kept as integers.
///
pub(crate) fn parse_value(line: usize, value: &str) -> Result<serde_json::Number, Error> {
    let digits = value.replace(',', "");
    if let Ok(integer) = digits.parse::<u64>() {
        return Ok(integer.into());
    }
    digits
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .ok_or_else(|| Error::InvalidValue {
            line,
            value: value.to_owned(),
        })
}
