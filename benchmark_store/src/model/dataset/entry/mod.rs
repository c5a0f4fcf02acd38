//!
//! A single benchmark run, tied to the benchmarked commit.
//!

pub mod bench;
pub mod commit;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use crate::model::error::Error as ValidationError;

use self::bench::Bench;
use self::commit::Commit;

///
/// A single benchmark run, tied to the benchmarked commit.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The benchmarked commit.
    pub commit: Commit,
    /// Time of the run, in epoch milliseconds.
    pub date: i64,
    /// The tool that produced the measurements, for example `benchmarkjs`.
    pub tool: String,
    /// The measurements.
    pub benches: Vec<Bench>,
    /// Fields written by other producers.
    #[serde(flatten)]
    pub other: IndexMap<String, serde_json::Value>,
}

impl Entry {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(commit: Commit, date: i64, tool: String, benches: Vec<Bench>) -> Self {
        Self {
            commit,
            date,
            tool,
            benches,
            other: IndexMap::new(),
        }
    }

    ///
    /// Checks that the required fields are present.
    ///
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.commit.validate()?;
        for (index, bench) in self.benches.iter().enumerate() {
            bench.validate(index)?;
        }
        Ok(())
    }

    ///
    /// Returns the measurement with the given name.
    ///
    pub fn bench(&self, name: &str) -> Option<&Bench> {
        self.benches.iter().find(|bench| bench.name == name)
    }
}
