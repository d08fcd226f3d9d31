//! JSON file backed catalog
//!
//! The file is read on every call, so edits are picked up without a restart.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use termbridge_application::{LocalCatalogPort, LocalSearchError};
use termbridge_domain::LocalTerm;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Catalog location relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data/namaste_data.json";

/// On-disk layout: `{"results": [ ... ]}`
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    results: Vec<LocalTerm>,
}

#[derive(Error, Debug)]
enum CatalogReadError {
    #[error("cannot read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// [`LocalCatalogPort`] reading a JSON catalog file.
pub struct JsonCatalogResolver {
    path: PathBuf,
}

impl JsonCatalogResolver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<LocalTerm>, CatalogReadError> {
        // Bytes, not a String: undecodable content is a parse failure, not an io one
        let raw = tokio::fs::read(&self.path).await?;
        let catalog: CatalogFile = serde_json::from_slice(&raw)?;
        debug!(
            "Loaded {} catalog entries from {}",
            catalog.results.len(),
            self.path.display()
        );
        Ok(catalog.results)
    }
}

#[async_trait]
impl LocalCatalogPort for JsonCatalogResolver {
    async fn search(
        &self,
        query: &str,
        system: Option<&str>,
    ) -> Result<Vec<LocalTerm>, LocalSearchError> {
        let terms = match self.load().await {
            Ok(terms) => terms,
            Err(CatalogReadError::Io(e)) => {
                warn!(
                    "Catalog {} unavailable ({}), returning fallback record",
                    self.path.display(),
                    e
                );
                return Ok(vec![LocalTerm::fallback(query)]);
            }
            Err(e) => return Err(LocalSearchError::Fatal(e.to_string())),
        };

        let matches: Vec<LocalTerm> = terms
            .into_iter()
            .filter(|t| t.matches(query, system))
            .collect();
        if matches.is_empty() {
            return Err(LocalSearchError::NotFound {
                query: query.to_string(),
                system: system.map(str::to_string),
            });
        }

        info!("Local catalog search '{}' matched {} terms", query, matches.len());
        Ok(matches)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<LocalTerm>, LocalSearchError> {
        let terms = self
            .load()
            .await
            .map_err(|e| LocalSearchError::Fatal(e.to_string()))?;
        Ok(terms.into_iter().find(|t| t.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CATALOG: &str = r#"{
        "results": [
            {
                "id": "NAM101",
                "term": "Jwara (Fever)",
                "term_hindi": "ज्वर",
                "category": "Disease",
                "subcategory": "Fever",
                "system": "Ayurveda",
                "description": "Elevated body temperature",
                "synonyms": ["Pyrexia", "Taap"]
            },
            {
                "id": "NAM202",
                "term": "Fever relief posture",
                "category": "Therapy",
                "ayush_system": "Yoga"
            },
            {
                "id": "NAM303",
                "term": "Kasa (Cough)",
                "category": "Disease",
                "system": "Ayurveda"
            }
        ]
    }"#;

    fn catalog_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_case_insensitive_substring_in_catalog_order() {
        let file = catalog_file(CATALOG);
        let resolver = JsonCatalogResolver::new(file.path());

        let terms = resolver.search("FEV", None).await.unwrap();
        let ids: Vec<_> = terms.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["NAM101", "NAM202"]);
        assert_eq!(terms[0].synonyms, vec!["Pyrexia", "Taap"]);
        assert_eq!(terms[1].system, "Yoga");
    }

    #[tokio::test]
    async fn test_system_filter_is_case_insensitive_equality() {
        let file = catalog_file(CATALOG);
        let resolver = JsonCatalogResolver::new(file.path());

        let terms = resolver.search("fever", Some("ayurveda")).await.unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].id, "NAM101");

        let err = resolver.search("cough", Some("Yoga")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_no_match_is_not_found() {
        let file = catalog_file(CATALOG);
        let resolver = JsonCatalogResolver::new(file.path());

        assert_eq!(
            resolver.search("diabetes", None).await,
            Err(LocalSearchError::NotFound {
                query: "diabetes".to_string(),
                system: None,
            })
        );
    }

    #[tokio::test]
    async fn test_missing_file_yields_single_fallback_record() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = JsonCatalogResolver::new(dir.path().join("absent.json"));

        let terms = resolver.search("Amavata", None).await.unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].term, "Amavata");
        assert_eq!(terms[0].id, "NAM001");
    }

    #[tokio::test]
    async fn test_malformed_catalog_is_fatal() {
        let file = catalog_file("{ not json");
        let resolver = JsonCatalogResolver::new(file.path());

        assert!(matches!(
            resolver.search("fever", None).await,
            Err(LocalSearchError::Fatal(_))
        ));
    }

    #[tokio::test]
    async fn test_non_utf8_catalog_is_fatal() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\"results\": [{\"id\": \"NAM1\", \"term\": \"\xFF\"}]}")
            .unwrap();
        let resolver = JsonCatalogResolver::new(file.path());

        assert!(matches!(
            resolver.search("zzz", None).await,
            Err(LocalSearchError::Fatal(_))
        ));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let file = catalog_file(CATALOG);
        let resolver = JsonCatalogResolver::new(file.path());

        let term = resolver.find_by_id("NAM303").await.unwrap().unwrap();
        assert_eq!(term.term, "Kasa (Cough)");
        assert_eq!(resolver.find_by_id("NAM999").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_by_id_without_catalog_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = JsonCatalogResolver::new(dir.path().join("absent.json"));

        assert!(matches!(
            resolver.find_by_id("NAM001").await,
            Err(LocalSearchError::Fatal(_))
        ));
    }
}
