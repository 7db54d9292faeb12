//! REST client for the admin API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthClient` is the session context handed to every page through Leptos
//! context. It owns the login call, token persistence, and the one protected
//! fetch the dashboard makes. Storage and network are injected so the same
//! logic runs against `localStorage` + `fetch` in the browser and against
//! in-memory fakes in tests.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Nothing is retried; callers
//! decide how much of the error to show.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use super::transport::{BrowserTransport, HttpRequest, HttpTransport};
use super::types::{Credentials, LoginResponse, ProtectedMessage};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::state::session::{BrowserSessionStore, SessionStatus, SessionStore};

/// Login, logout, token access, and the protected fetch.
#[derive(Clone)]
pub struct AuthClient {
    config: ApiConfig,
    store: Arc<dyn SessionStore>,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for AuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthClient").field("config", &self.config).finish_non_exhaustive()
    }
}

impl AuthClient {
    pub fn new(config: ApiConfig, store: Arc<dyn SessionStore>, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, store, transport }
    }

    /// Client wired to `localStorage` and `fetch` with the default API origin.
    pub fn browser() -> Self {
        Self::new(
            ApiConfig::default(),
            Arc::new(BrowserSessionStore::default()),
            Arc::new(BrowserTransport),
        )
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Exchange credentials for a token and persist it.
    ///
    /// The token is stored only after a 2xx response with a decodable body.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode failure unchanged.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let body = serde_json::to_value(credentials).map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = self
            .transport
            .send(HttpRequest::post_json(self.config.login_url(), body))
            .await?;
        let payload: LoginResponse = resp.json()?;
        self.store.save(&payload.token);
        Ok(payload)
    }

    pub fn logout(&self) {
        self.store.clear();
    }

    pub fn current_token(&self) -> Option<String> {
        self.store.read()
    }

    pub fn session_status(&self) -> SessionStatus {
        SessionStatus::from_store(&*self.store)
    }

    /// GET the protected resource with the stored bearer token and return
    /// its `message` field.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingToken` without touching the network when no
    /// token is stored; otherwise the transport, status, or decode failure.
    pub async fn fetch_protected_message(&self) -> Result<String, ApiError> {
        let SessionStatus::Authenticated { token } = self.session_status() else {
            return Err(ApiError::MissingToken);
        };
        let resp = self
            .transport
            .send(HttpRequest::get(self.config.resource_url()).bearer(token))
            .await?;
        let body: ProtectedMessage = resp.json()?;
        Ok(body.message)
    }
}
