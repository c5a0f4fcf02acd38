//!
//! Comparison of a benchmark run with the previous run of the same suite.
//!

pub mod row;
pub mod threshold;

use colored::Colorize;

use crate::model::dataset::entry::Entry;
use crate::tool::Tool;

use self::row::Row;
use self::threshold::Threshold;

///
/// Comparison of a benchmark run with the previous run of the same suite.
///
#[derive(Debug)]
pub struct Comparison<'a> {
    /// The previous run, if any.
    pub previous: Option<&'a Entry>,
    /// The current run.
    pub current: &'a Entry,
    /// The alert threshold.
    pub threshold: Threshold,
    /// One row per current measurement, in run order.
    pub rows: Vec<Row<'a>>,
}

impl<'a> Comparison<'a> {
    ///
    /// Compares the current run with the previous one, matching measurements by name.
    ///
    pub fn new(previous: Option<&'a Entry>, current: &'a Entry, threshold: Threshold) -> Self {
        let is_bigger_better = match current.tool.parse::<Tool>() {
            Ok(tool) => tool.is_bigger_better(),
            Err(_) => {
                log::warn!(
                    "Unknown tool `{}`, assuming smaller values are better",
                    current.tool
                );
                false
            }
        };

        let rows = current
            .benches
            .iter()
            .filter_map(|bench| {
                let current_value = bench.value.as_f64()?;
                let previous_value = previous
                    .and_then(|entry| entry.bench(bench.name.as_str()))
                    .and_then(|bench| bench.value.as_f64());
                let ratio = previous_value.and_then(|previous_value| {
                    let (numerator, denominator) = if is_bigger_better {
                        (previous_value, current_value)
                    } else {
                        (current_value, previous_value)
                    };
                    (denominator != 0.0).then_some(numerator / denominator)
                });
                Some(Row {
                    name: bench.name.as_str(),
                    unit: bench.unit.as_str(),
                    previous: previous_value,
                    current: current_value,
                    ratio,
                    is_alert: ratio.is_some_and(|ratio| ratio > threshold.0),
                })
            })
            .collect();

        Self {
            previous,
            current,
            threshold,
            rows,
        }
    }

    ///
    /// Returns the rows whose ratio exceeds the threshold.
    ///
    pub fn alerts(&self) -> impl Iterator<Item = &Row<'a>> {
        self.rows.iter().filter(|row| row.is_alert)
    }

    ///
    /// Whether any measurement regressed beyond the threshold.
    ///
    pub fn has_alerts(&self) -> bool {
        self.alerts().next().is_some()
    }

    ///
    /// Writes the comparison table.
    ///
    pub fn write_all<W>(&self, w: &mut W, suite: &str) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        let commit = &self.current.commit;
        writeln!(
            w,
            "{} {} {}",
            suite.bright_white(),
            commit.short_id().bright_white(),
            commit.summary()
        )?;
        match self.previous {
            Some(previous) => writeln!(
                w,
                "Compared with {}, alert threshold {}",
                previous.commit.short_id(),
                self.threshold
            )?,
            None => writeln!(w, "No previous run to compare with")?,
        }

        for row in self.rows.iter() {
            let previous = row
                .previous
                .map(|value| format!("{value:.3}"))
                .unwrap_or_else(|| "-".to_owned());
            let ratio = match row.ratio {
                Some(ratio) if row.is_alert => format!("{ratio:7.3}").bright_red(),
                Some(ratio) if ratio > 1.0 => format!("{ratio:7.3}").yellow(),
                Some(ratio) => format!("{ratio:7.3}").green(),
                None if row.previous.is_some() => format!("{:>7}", "-").white(),
                None => format!("{:>7}", "new").white(),
            };
            writeln!(
                w,
                "{} {:>16} {:>16.3} {:<12} {}",
                ratio,
                previous,
                row.current,
                row.unit,
                row.name
            )?;
        }
        Ok(())
    }
}
