//! Search query value objects

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which terminology sources a query is resolved against.
///
/// The wire names follow the source systems: `namaste` is the local AYUSH
/// catalog, `icd11` the remote WHO classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceScope {
    /// Local catalog only
    #[serde(rename = "namaste")]
    Local,
    /// Remote classification service only
    #[serde(rename = "icd11")]
    Remote,
    /// Both sources (default)
    #[default]
    Both,
}

impl SourceScope {
    pub fn includes_local(&self) -> bool {
        matches!(self, SourceScope::Local | SourceScope::Both)
    }

    pub fn includes_remote(&self) -> bool {
        matches!(self, SourceScope::Remote | SourceScope::Both)
    }

    /// Wire name used in envelopes and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceScope::Local => "namaste",
            SourceScope::Remote => "icd11",
            SourceScope::Both => "both",
        }
    }
}

impl std::fmt::Display for SourceScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceScope {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "namaste" | "local" => Ok(SourceScope::Local),
            "icd11" | "icd-11" | "remote" => Ok(SourceScope::Remote),
            "both" | "all" => Ok(SourceScope::Both),
            other => Err(DomainError::InvalidScope(other.to_string())),
        }
    }
}

/// A terminology query (Value Object)
///
/// The text is kept as entered so it can be echoed back in the result
/// envelope; resolvers work on [`SearchQuery::trimmed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    text: String,
    scope: SourceScope,
    category: Option<String>,
}

impl SearchQuery {
    /// Create a query, rejecting text that is empty after trimming.
    ///
    /// A blank category filter is treated as no filter.
    pub fn try_new(
        text: impl Into<String>,
        scope: SourceScope,
        category: Option<String>,
    ) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::EmptyQuery);
        }
        let category = category.filter(|c| !c.trim().is_empty());
        Ok(Self {
            text,
            scope,
            category,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn scope(&self) -> SourceScope {
        self.scope
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.text, self.scope)
    }
}
