//!
//! The benchmark history dataset.
//!

pub mod entry;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use crate::model::error::Error as ValidationError;

use self::entry::Entry;

///
/// Suite name, for example `Benchmark`.
///
pub type Suite = String;

///
/// The benchmark history dataset, assigned to `window.BENCHMARK_DATA` in the data file.
///
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Time of the last append, in epoch milliseconds.
    pub last_update: i64,
    /// URL of the benchmarked repository.
    pub repo_url: String,
    /// Run entries grouped by suite, each group in append order.
    pub entries: IndexMap<Suite, Vec<Entry>>,
    /// Fields written by other producers.
    #[serde(flatten)]
    pub other: IndexMap<String, serde_json::Value>,
}

impl Dataset {
    ///
    /// Creates an empty dataset for the repository.
    ///
    pub fn new(repo_url: String) -> Self {
        Self {
            repo_url,
            ..Self::default()
        }
    }

    ///
    /// Appends the entry to the end of the suite, creating the suite if necessary.
    ///
    /// `last_update` is set to `now`, unless the stored value is already later.
    ///
    pub fn append(&mut self, suite: &str, entry: Entry, now: i64) -> Result<(), ValidationError> {
        if suite.is_empty() {
            return Err(ValidationError::EmptySuite);
        }
        entry.validate()?;

        self.entries.entry(suite.to_owned()).or_default().push(entry);
        self.last_update = self.last_update.max(now);
        Ok(())
    }

    ///
    /// Returns the entries of the suite, or an empty slice if the suite does not exist.
    ///
    pub fn suite(&self, suite: &str) -> &[Entry] {
        self.entries
            .get(suite)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    ///
    /// Returns the latest entry of the suite.
    ///
    pub fn latest(&self, suite: &str) -> Option<&Entry> {
        self.suite(suite).last()
    }
}
