//! Remote search with endpoint fallback
//!
//! The service exposes the same search under several paths depending on the
//! release and API surface. Candidates are probed in order and the first one
//! answering 200 with a JSON body wins; results are never merged across
//! endpoints.

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};
use serde_json::Value;
use std::sync::Arc;
use termbridge_application::{RemoteSearchError, RemoteTermSource, TokenProvider};
use termbridge_domain::normalize::entity_list_key;
use termbridge_domain::util::preview;
use termbridge_domain::{RemoteTerm, parse_remote_entities};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default ICD-11 release root
pub const DEFAULT_BASE_URL: &str = "https://id.who.int/icd/release/11/2024-01";

/// One search endpoint, relative to the base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointCandidate {
    pub path: &'static str,
    /// Entity list key this endpoint is expected to answer with
    pub shape: &'static str,
}

/// Probe order
pub const ENDPOINT_CANDIDATES: &[EndpointCandidate] = &[
    EndpointCandidate {
        path: "/mms/search",
        shape: "destinationEntities",
    },
    EndpointCandidate {
        path: "/search",
        shape: "destinationEntities",
    },
    EndpointCandidate {
        path: "/mms/flexisearch",
        shape: "destinationEntities",
    },
    EndpointCandidate {
        path: "/release/11/2024-01/mms/search",
        shape: "destinationEntities",
    },
];

/// Why a single endpoint candidate was skipped
#[derive(Error, Debug)]
enum ProbeError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("response is not JSON: {0}")]
    Body(#[source] reqwest::Error),
}

/// [`RemoteTermSource`] backed by the ICD-11 API.
pub struct IcdRemoteResolver {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl IcdRemoteResolver {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            tokens,
        }
    }

    async fn probe(&self, url: &str, query: &str, token: &str) -> Result<Value, ProbeError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .header(ACCEPT, "application/json")
            .header("API-Version", "v2")
            .header(ACCEPT_LANGUAGE, "en")
            .query(&[
                ("q", query),
                ("subtreeFilterUsesFoundationDescendants", "false"),
                ("includeKeywordResult", "true"),
                ("useFlexisearch", "true"),
            ])
            .send()
            .await
            .map_err(ProbeError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            if status == StatusCode::UNAUTHORIZED {
                self.tokens.invalidate();
            }
            let body = response.text().await.unwrap_or_default();
            return Err(ProbeError::Status {
                status,
                body: preview(&body, 200).to_string(),
            });
        }

        response.json::<Value>().await.map_err(ProbeError::Body)
    }
}

#[async_trait]
impl RemoteTermSource for IcdRemoteResolver {
    async fn try_search(&self, query: &str) -> Result<Vec<RemoteTerm>, RemoteSearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let token = self.tokens.token().await?;

        for (index, candidate) in ENDPOINT_CANDIDATES.iter().enumerate() {
            let url = format!("{}{}", self.base_url, candidate.path);
            debug!("Probing remote endpoint {}: {}", index + 1, url);

            match self.probe(&url, query, &token).await {
                Ok(doc) => {
                    let key = entity_list_key(&doc);
                    if key != Some(candidate.shape) {
                        debug!(
                            "Endpoint {} answered with entity list {:?}, expected {}",
                            candidate.path, key, candidate.shape
                        );
                    }
                    let terms = parse_remote_entities(&doc);
                    info!(
                        "Remote search '{}' returned {} results from {}",
                        query,
                        terms.len(),
                        candidate.path
                    );
                    return Ok(terms);
                }
                Err(e) => warn!("Remote endpoint {} failed: {}", url, e),
            }
        }

        Err(RemoteSearchError::AllEndpointsFailed {
            attempted: ENDPOINT_CANDIDATES.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use termbridge_application::AuthError;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct StaticToken {
        result: Result<String, AuthError>,
        invalidations: Mutex<u32>,
    }

    impl StaticToken {
        fn ok() -> Arc<Self> {
            Arc::new(Self {
                result: Ok("t0k3n".to_string()),
                invalidations: Mutex::new(0),
            })
        }
    }

    #[async_trait]
    impl TokenProvider for StaticToken {
        async fn token(&self) -> Result<String, AuthError> {
            self.result.clone()
        }

        fn invalidate(&self) {
            *self.invalidations.lock().unwrap() += 1;
        }
    }

    fn one_entity() -> serde_json::Value {
        serde_json::json!({
            "destinationEntities": [{
                "id": "http://id.who.int/icd/entity/1",
                "theCode": "MG26",
                "title": {"@value": "Fever"}
            }]
        })
    }

    #[tokio::test]
    async fn test_falls_through_to_next_endpoint_on_500() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mms/search"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(one_entity()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/mms/flexisearch"))
            .respond_with(ResponseTemplate::new(200).set_body_json(one_entity()))
            .expect(0)
            .mount(&server)
            .await;

        let resolver = IcdRemoteResolver::new(reqwest::Client::new(), server.uri(), StaticToken::ok());
        let terms = resolver.try_search("fever").await.unwrap();

        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].code, "MG26");
        assert_eq!(terms[0].title, "Fever");
    }

    #[tokio::test]
    async fn test_sends_query_parameters_and_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mms/search"))
            .and(query_param("q", "fever"))
            .and(query_param("subtreeFilterUsesFoundationDescendants", "false"))
            .and(query_param("includeKeywordResult", "true"))
            .and(query_param("useFlexisearch", "true"))
            .and(header("authorization", "Bearer t0k3n"))
            .and(header("accept", "application/json"))
            .and(header("api-version", "v2"))
            .and(header("accept-language", "en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(one_entity()))
            .expect(1)
            .mount(&server)
            .await;

        let resolver = IcdRemoteResolver::new(reqwest::Client::new(), server.uri(), StaticToken::ok());
        let terms = resolver.try_search("  fever ").await.unwrap();
        assert_eq!(terms.len(), 1);
    }

    #[tokio::test]
    async fn test_all_endpoints_failing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(4)
            .mount(&server)
            .await;

        let resolver = IcdRemoteResolver::new(reqwest::Client::new(), server.uri(), StaticToken::ok());
        assert_eq!(
            resolver.try_search("fever").await,
            Err(RemoteSearchError::AllEndpointsFailed { attempted: 4 })
        );
        assert!(resolver.search("fever").await.is_empty());
    }

    #[tokio::test]
    async fn test_non_json_body_is_skipped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mms/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(one_entity()))
            .mount(&server)
            .await;

        let resolver = IcdRemoteResolver::new(reqwest::Client::new(), server.uri(), StaticToken::ok());
        assert_eq!(resolver.try_search("fever").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_last_endpoint_uses_release_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/release/11/2024-01/mms/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [{"code": "1A00", "name": "Cholera"}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let resolver = IcdRemoteResolver::new(reqwest::Client::new(), server.uri(), StaticToken::ok());
        let terms = resolver.try_search("cholera").await.unwrap();
        assert_eq!(terms[0].title, "Cholera");
    }

    #[tokio::test]
    async fn test_unauthorized_invalidates_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let tokens = StaticToken::ok();
        let resolver = IcdRemoteResolver::new(reqwest::Client::new(), server.uri(), tokens.clone());
        assert!(resolver.search("fever").await.is_empty());
        assert!(*tokens.invalidations.lock().unwrap() >= 1);
    }

    #[tokio::test]
    async fn test_blank_query_makes_no_requests() {
        let server = MockServer::start().await;
        let resolver = IcdRemoteResolver::new(reqwest::Client::new(), server.uri(), StaticToken::ok());

        assert_eq!(resolver.try_search("   ").await, Ok(vec![]));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_token_failure_is_reported() {
        let server = MockServer::start().await;
        let tokens = Arc::new(StaticToken {
            result: Err(AuthError::Configuration("missing".to_string())),
            invalidations: Mutex::new(0),
        });
        let resolver = IcdRemoteResolver::new(reqwest::Client::new(), server.uri(), tokens);

        assert!(matches!(
            resolver.try_search("fever").await,
            Err(RemoteSearchError::Auth(AuthError::Configuration(_)))
        ));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
