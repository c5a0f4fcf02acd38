//!
//! The benchmarked commit, as reported by the version control host.
//!

pub mod person;

use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use crate::model::error::Error as ValidationError;

use self::person::Person;

///
/// The benchmarked commit, as reported by the version control host.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    /// The commit author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Person>,
    /// The commit committer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committer: Option<Person>,
    /// Whether the commit was new to the pushed branch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinct: Option<bool>,
    /// The commit hash.
    pub id: String,
    /// The full commit message.
    pub message: String,
    /// The commit time, as an ISO 8601 string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// The tree hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree_id: Option<String>,
    /// The commit page URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Fields written by other producers.
    #[serde(flatten)]
    pub other: IndexMap<String, serde_json::Value>,
}

///
/// The commit file contents: either a bare commit or a push event payload.
///
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Source {
    /// A push event payload carrying the head commit.
    Event {
        /// The pushed head commit.
        head_commit: Commit,
    },
    /// A bare commit.
    Commit(Commit),
}

impl Commit {
    ///
    /// Creates a commit with only the required fields.
    ///
    pub fn new(id: String, message: String) -> Self {
        Self {
            author: None,
            committer: None,
            distinct: None,
            id,
            message,
            timestamp: None,
            tree_id: None,
            url: None,
            other: IndexMap::new(),
        }
    }

    ///
    /// Checks that the required fields are present.
    ///
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyCommitField { field: "id" });
        }
        Ok(())
    }

    ///
    /// Returns the first line of the message.
    ///
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    ///
    /// Returns the abbreviated commit hash.
    ///
    pub fn short_id(&self) -> &str {
        self.id.get(..7).unwrap_or(self.id.as_str())
    }
}

impl FromStr for Commit {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let value: serde_json::Value = serde_json::from_str(string)?;
        if value.get("head_commit").is_some_and(serde_json::Value::is_null) {
            anyhow::bail!(
                "The push event has no head commit, for example because it deleted a branch"
            );
        }
        let source: Source = serde_json::from_value(value)?;
        Ok(match source {
            Source::Event { head_commit } => head_commit,
            Source::Commit(commit) => commit,
        })
    }
}

impl TryFrom<&Path> for Commit {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Commit file {path:?} reading: {error}"))?;
        Self::from_str(text.as_str())
            .map_err(|error| anyhow::anyhow!("Commit file {path:?} parsing: {error}"))
    }
}
