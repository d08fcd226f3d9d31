//! OAuth2 client-credentials exchange

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use termbridge_application::AuthError;
use termbridge_domain::util::preview;
use tracing::{debug, info};

/// WHO access management token endpoint
pub const DEFAULT_TOKEN_URL: &str = "https://icdaccessmanagement.who.int/connect/token";

/// Scope requested for the ICD API
pub const DEFAULT_SCOPE: &str = "icdapi_access";

/// A token as issued by the authentication service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub access_token: String,
    /// Lifetime in seconds, when the server declares one
    pub expires_in: Option<u64>,
}

/// Performs one credential exchange per call. No caching, no retry.
#[async_trait]
pub trait TokenExchange: Send + Sync {
    async fn exchange(&self) -> Result<IssuedToken, AuthError>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    /// Servers send integers, floats or numeric strings here
    expires_in: Option<Value>,
}

/// Lifetime in whole seconds; anything unreadable means "no declared expiry".
fn lifetime_secs(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse::<f64>().ok().and_then(|f| {
            (f.is_finite() && f >= 0.0).then_some(f as u64)
        }),
        _ => None,
    }
}

/// Client-credentials grant against a token endpoint (form-encoded POST).
pub struct OAuthClientCredentials {
    client: reqwest::Client,
    token_url: String,
    client_id: Option<String>,
    client_secret: Option<String>,
    scope: String,
}

impl OAuthClientCredentials {
    pub fn new(
        client: reqwest::Client,
        token_url: impl Into<String>,
        client_id: Option<String>,
        client_secret: Option<String>,
    ) -> Self {
        Self {
            client,
            token_url: token_url.into(),
            client_id,
            client_secret,
            scope: DEFAULT_SCOPE.to_string(),
        }
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    fn credentials(&self) -> Result<(&str, &str), AuthError> {
        let id = self.client_id.as_deref().map(str::trim).unwrap_or_default();
        let secret = self
            .client_secret
            .as_deref()
            .map(str::trim)
            .unwrap_or_default();
        if id.is_empty() || secret.is_empty() {
            return Err(AuthError::Configuration(
                "client id and client secret must both be set".to_string(),
            ));
        }
        Ok((id, secret))
    }
}

#[async_trait]
impl TokenExchange for OAuthClientCredentials {
    async fn exchange(&self) -> Result<IssuedToken, AuthError> {
        let (client_id, client_secret) = self.credentials()?;
        debug!("Requesting access token from {}", self.token_url);

        let response = self
            .client
            .post(&self.token_url)
            .form(&[
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("scope", self.scope.as_str()),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::AuthService(format!(
                "token endpoint returned {}: {}",
                status,
                preview(&body, 200)
            )));
        }

        let parsed: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::AuthService(format!("unreadable token response: {e}")))?;
        let access_token = parsed
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                AuthError::AuthService("token response has no access_token".to_string())
            })?;

        info!("Obtained access token for the remote classification service");
        Ok(IssuedToken {
            access_token,
            expires_in: parsed.expires_in.as_ref().and_then(lifetime_secs),
        })
    }
}
