//! Canonical transport record

use super::{LocalTerm, RemoteTerm};
use serde::{Deserialize, Serialize};

/// The unified record both resolvers are merged into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalTerm {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(rename = "parent", default, skip_serializing_if = "Option::is_none")]
    pub parent_ref: Option<String>,
    #[serde(rename = "children", default)]
    pub child_refs: Vec<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// AYUSH system tag of local records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_system: Option<String>,
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

impl From<LocalTerm> for CanonicalTerm {
    fn from(term: LocalTerm) -> Self {
        Self {
            id: term.id,
            uri: None,
            code: None,
            title: term.term,
            definition: term.description,
            parent_ref: None,
            child_refs: Vec::new(),
            synonyms: term.synonyms,
            origin_system: non_empty(term.system),
        }
    }
}

impl From<RemoteTerm> for CanonicalTerm {
    fn from(term: RemoteTerm) -> Self {
        Self {
            id: term.id,
            uri: non_empty(term.uri),
            code: non_empty(term.code),
            title: term.title,
            // An absent remote definition is reported as an empty string
            definition: Some(term.definition),
            parent_ref: term.parent,
            child_refs: term.children,
            synonyms: term.synonyms,
            origin_system: None,
        }
    }
}
