//!
//! `cargo bench` (libtest) text output.
//!

use std::sync::OnceLock;

use regex::Regex;

use crate::input::error::Error;
use crate::model::dataset::entry::bench::Bench;

///
/// Matches a result line, for example `test bench_fib_20 ... bench:      31,104 ns/iter (+/- 3,204)`.
///
fn line_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"^test (?P<name>.+)\s+\.\.\. bench:\s+(?P<value>[0-9,.]+) (?P<unit>\w+/\w+) \(\+/- (?P<range>[0-9,.]+)\)$",
        )
        .expect("Always valid")
    })
}

///
/// Extracts the measurements from libtest bench output, skipping lines that are not results.
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
            .with_range(format!("± {}", captures["range"].replace(',', ""))),
        );
    }
    Ok(benches)
}
