//!
//! A commit author or committer.
//!

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

///
/// A commit author or committer.
///
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// E-mail address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Account name on the version control host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Fields written by other producers.
    #[serde(flatten)]
    pub other: IndexMap<String, serde_json::Value>,
}
