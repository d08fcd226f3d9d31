//! Bearer token acquisition for the remote classification service
//!
//! [`OAuthClientCredentials`] performs the OAuth2 client-credentials
//! exchange; [`TokenCache`] memoizes its result behind the
//! [`TokenProvider`](termbridge_application::TokenProvider) port.

mod cache;
mod exchange;

pub use cache::TokenCache;
pub use exchange::{
    DEFAULT_SCOPE, DEFAULT_TOKEN_URL, IssuedToken, OAuthClientCredentials, TokenExchange,
};
