//!
//! Appending a benchmark run and comparing it with the previous run.
//!

pub mod outcome;

use std::path::PathBuf;

use colored::Colorize;

use crate::comparison::threshold::Threshold;
use crate::input::Input;
use crate::model::dataset::entry::commit::Commit;
use crate::model::dataset::entry::Entry;
use crate::store::Config as StoreConfig;
use crate::store::Store;
use crate::tool::Tool;

use self::outcome::Outcome;

///
/// Appending a benchmark run and comparing it with the previous run.
///
/// The run is stored before it is compared, so an alert never rolls the append back.
///
#[derive(Debug, Clone)]
pub struct Append {
    /// The data file to append to.
    pub store: StoreConfig,
    /// The suite name.
    pub suite: String,
    /// The tool that produced the output file.
    pub tool: Tool,
    /// Path to the benchmark tool output.
    pub output_file: PathBuf,
    /// Path to the commit or push event JSON.
    pub commit_file: PathBuf,
    /// The regression alert threshold.
    pub threshold: Threshold,
    /// Whether alerts are turned into an error.
    pub fail_on_alert: bool,
    /// Suppresses the terminal output.
    pub quiet: bool,
}

impl Append {
    ///
    /// Appends the run dated now and writes the comparison to `w`.
    ///
    pub fn run<W>(self, w: &mut W) -> anyhow::Result<Outcome>
    where
        W: std::io::Write,
    {
        self.run_at(w, chrono::Utc::now().timestamp_millis())
    }

    ///
    /// Appends the run dated `now`, in epoch milliseconds, and writes the comparison to `w`.
    ///
    /// With `fail_on_alert`, returns an error if any measurement regressed beyond the
    /// threshold. The run is already stored at that point.
    ///
    pub fn run_at<W>(self, w: &mut W, now: i64) -> anyhow::Result<Outcome>
    where
        W: std::io::Write,
    {
        let input = Input::try_from((self.output_file.as_path(), self.tool))?;
        if input.benches.is_empty() && !self.quiet {
            writeln!(
                w,
                "{} No measurements found in {:?}, appending an empty run.",
                "Warning:".yellow(),
                self.output_file
            )?;
        }
        let commit = Commit::try_from(self.commit_file.as_path())?;
        let entry = Entry::new(commit, now, input.tool.to_string(), input.benches);

        let dataset = Store::new(self.store).append_at(self.suite.as_str(), entry, now)?;
        let outcome = Outcome::new(dataset, self.suite);

        let alerts = {
            let comparison = outcome.comparison(self.threshold).ok_or_else(|| {
                anyhow::anyhow!("Suite `{}` is empty after appending", outcome.suite)
            })?;
            if !self.quiet {
                comparison.write_all(w, outcome.suite.as_str())?;
            }
            comparison.alerts().count()
        };
        if alerts > 0 {
            if !self.quiet {
                writeln!(
                    w,
                    "{} {alerts} measurement(s) regressed beyond {}",
                    "Alert:".bright_red(),
                    self.threshold
                )?;
            }
            if self.fail_on_alert {
                anyhow::bail!(
                    "{alerts} measurement(s) regressed beyond {}",
                    self.threshold
                );
            }
        }

        Ok(outcome)
    }
}
