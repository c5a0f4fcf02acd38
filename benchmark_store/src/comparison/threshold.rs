//!
//! The regression alert threshold.
//!

use std::str::FromStr;

///
/// The regression alert threshold, as a ratio of the previous result.
///
/// Parsed either from a ratio, for example `2.0`, or a percentage, for example `200%`.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(pub f64);

impl Default for Threshold {
    fn default() -> Self {
        Self(2.0)
    }
}

impl FromStr for Threshold {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let string = string.trim();
        let ratio = match string.strip_suffix('%') {
            Some(percentage) => percentage.trim().parse::<f64>().map(|value| value / 100.0),
            None => string.parse::<f64>(),
        }
        .map_err(|error| anyhow::anyhow!("Invalid alert threshold `{string}`: {error}"))?;
        if !ratio.is_finite() || ratio <= 0.0 {
            anyhow::bail!("Invalid alert threshold `{string}`: expected a positive ratio");
        }
        Ok(Self(ratio))
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let percentage = (self.0 * 10_000.0).round() / 100.0;
        write!(f, "{percentage}%")
    }
}
