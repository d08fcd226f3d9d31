//! Local catalog record

use serde::{Deserialize, Serialize};

/// A term from the local AYUSH catalog (NAMASTE).
///
/// Deserializes directly from one entry of the catalog's `results` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalTerm {
    pub id: String,
    pub term: String,
    pub term_hindi: Option<String>,
    pub category: String,
    pub subcategory: Option<String>,
    /// AYUSH system (Ayurveda, Yoga, Unani, Siddha, Homeopathy)
    #[serde(alias = "ayush_system")]
    pub system: String,
    pub description: Option<String>,
    pub synonyms: Vec<String>,
}

impl LocalTerm {
    /// Case-insensitive substring match on the display name, with an optional
    /// case-insensitive exact match on the AYUSH system.
    pub fn matches(&self, query: &str, system: Option<&str>) -> bool {
        if !self.term.to_lowercase().contains(&query.to_lowercase()) {
            return false;
        }
        match system {
            Some(filter) => self.system.to_lowercase() == filter.to_lowercase(),
            None => true,
        }
    }

    /// Placeholder returned when the catalog storage cannot be read.
    ///
    /// The record echoes the query as its display name.
    pub fn fallback(query: &str) -> Self {
        Self {
            id: "NAM001".to_string(),
            term: query.to_string(),
            term_hindi: Some("अनुवाद".to_string()),
            category: "Disease".to_string(),
            subcategory: Some("Fever".to_string()),
            system: "Ayurveda".to_string(),
            description: Some("Fallback mock: traditional terminology example.".to_string()),
            synonyms: vec!["variant1".to_string(), "variant2".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwara() -> LocalTerm {
        LocalTerm {
            id: "NAM101".to_string(),
            term: "Jwara (Fever)".to_string(),
            category: "Disease".to_string(),
            system: "Ayurveda".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_substring_match_ignores_case() {
        assert!(jwara().matches("fev", None));
        assert!(jwara().matches("JWARA", None));
        assert!(!jwara().matches("cough", None));
    }

    #[test]
    fn test_system_filter_is_case_insensitive_equality() {
        assert!(jwara().matches("fever", Some("ayurveda")));
        assert!(!jwara().matches("fever", Some("Yoga")));
        assert!(!jwara().matches("fever", Some("Ayur")));
    }

    #[test]
    fn test_fallback_echoes_query() {
        let term = LocalTerm::fallback("kasa");
        assert_eq!(term.term, "kasa");
        assert_eq!(term.id, "NAM001");
        assert_eq!(term.synonyms.len(), 2);
    }

    #[test]
    fn test_deserialize_catalog_entry_with_missing_optionals() {
        let json = r#"{"id": "NAM7", "term": "Kasa", "category": "Disease", "system": "Ayurveda"}"#;
        let term: LocalTerm = serde_json::from_str(json).unwrap();
        assert_eq!(term.term, "Kasa");
        assert!(term.term_hindi.is_none());
        assert!(term.synonyms.is_empty());
    }
}
