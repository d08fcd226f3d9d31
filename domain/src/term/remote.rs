//! Remote classification record

use serde::{Deserialize, Serialize};

/// A term resolved from the remote classification service (ICD-11).
///
/// Built by [`crate::normalize::parse_remote_entities`]; `title` is never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteTerm {
    pub id: String,
    pub uri: String,
    pub code: String,
    pub title: String,
    pub definition: String,
    pub parent: Option<String>,
    pub children: Vec<String>,
    pub synonyms: Vec<String>,
}

impl RemoteTerm {
    /// Whether the record carries a classification code
    pub fn has_code(&self) -> bool {
        !self.code.trim().is_empty()
    }
}
