//! Memoized bearer credential

use super::exchange::{IssuedToken, TokenExchange};
use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};
use termbridge_application::{AuthError, TokenProvider};
use tracing::debug;

#[derive(Debug, Clone)]
struct Credential {
    token: String,
    expires_at: Option<Instant>,
}

impl Credential {
    fn issued_at(issued: IssuedToken, now: Instant) -> Self {
        Self {
            token: issued.access_token,
            // Lifetimes past what `Instant` can represent count as no expiry
            expires_at: issued
                .expires_in
                .and_then(|secs| now.checked_add(Duration::from_secs(secs))),
        }
    }

    fn is_valid_at(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|at| now < at)
    }
}

/// Holds at most one bearer credential.
///
/// The first successful exchange is reused until the server-declared expiry
/// passes or [`invalidate`](TokenProvider::invalidate) is called. A token
/// issued without `expires_in` never expires on its own. Concurrent first
/// calls may each exchange; the last write wins.
pub struct TokenCache {
    exchange: Arc<dyn TokenExchange>,
    credential: RwLock<Option<Credential>>,
}

impl TokenCache {
    pub fn new(exchange: Arc<dyn TokenExchange>) -> Self {
        Self {
            exchange,
            credential: RwLock::new(None),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<Credential>> {
        self.credential
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Credential>> {
        self.credential
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn cached(&self) -> Option<String> {
        self.read()
            .as_ref()
            .filter(|c| c.is_valid_at(Instant::now()))
            .map(|c| c.token.clone())
    }
}

#[async_trait]
impl TokenProvider for TokenCache {
    async fn token(&self) -> Result<String, AuthError> {
        if let Some(token) = self.cached() {
            return Ok(token);
        }

        debug!("No valid cached token, exchanging credentials");
        let credential = Credential::issued_at(self.exchange.exchange().await?, Instant::now());
        let token = credential.token.clone();
        *self.write() = Some(credential);
        Ok(token)
    }

    fn invalidate(&self) {
        if self.write().take().is_some() {
            debug!("Cached token invalidated");
        }
    }
}
