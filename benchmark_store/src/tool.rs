//!
//! The benchmark tool that produced the measurements.
//!

use std::str::FromStr;

///
/// The benchmark tool that produced the measurements.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// benchmark.js text output.
    Benchmarkjs,
    /// `cargo bench` (libtest) text output.
    Cargo,
    /// JSON array of measurements, where bigger values are better.
    CustomBiggerIsBetter,
    /// JSON array of measurements, where smaller values are better.
    CustomSmallerIsBetter,
}

impl Tool {
    ///
    /// All supported tools.
    ///
    pub const ALL: [Self; 4] = [
        Self::Benchmarkjs,
        Self::Cargo,
        Self::CustomBiggerIsBetter,
        Self::CustomSmallerIsBetter,
    ];

    ///
    /// Whether bigger values mean better performance.
    ///
    pub fn is_bigger_better(&self) -> bool {
        match self {
            Self::Benchmarkjs | Self::CustomBiggerIsBetter => true,
            Self::Cargo | Self::CustomSmallerIsBetter => false,
        }
    }
}

impl FromStr for Tool {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.to_string().eq_ignore_ascii_case(string))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown tool `{}`. Supported tools: {}",
                    string,
                    Self::ALL
                        .into_iter()
                        .map(|tool| tool.to_string())
                        .collect::<Vec<String>>()
                        .join(", ")
                )
            })
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Benchmarkjs => write!(f, "benchmarkjs"),
            Self::Cargo => write!(f, "cargo"),
            Self::CustomBiggerIsBetter => write!(f, "customBiggerIsBetter"),
            Self::CustomSmallerIsBetter => write!(f, "customSmallerIsBetter"),
        }
    }
}
