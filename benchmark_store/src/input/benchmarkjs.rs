//!
//! benchmark.js text output.
//!

use std::sync::OnceLock;

use regex::Regex;

use crate::input::error::Error;
use crate::model::dataset::entry::bench::Bench;

///
/// Matches a result line, for example `fib(20) x 11,465 ops/sec ±1.12% (91 runs sampled)`.
///
fn line_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"^(?P<name>.+) x (?P<value>[0-9,.]+)\s+(?P<unit>\S+)\s+(?P<range>(?:±|\+-)[^%]+%) \((?P<samples>\d+) runs? sampled\)$",
        )
        .expect("Always valid")
    })
}

///
/// Extracts the measurements from benchmark.js output, skipping lines that are not results.
///
pub fn parse(text: &str) -> Result<Vec<Bench>, Error> {
    let mut benches = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let Some(captures) = line_regex().captures(line.trim_end()) else {
            continue;
        };
        let value = super::parse_value(index + 1, &captures["value"])?;
        benches.push(
            Bench::new(
                captures["name"].trim().to_owned(),
                value,
                captures["unit"].to_owned(),
            )
            .with_range(captures["range"].to_owned())
            .with_extra(format!("{} samples", &captures["samples"])),
        );
    }
    Ok(benches)
}
