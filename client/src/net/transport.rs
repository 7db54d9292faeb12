//! HTTP transport seam between the API client and the network.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `BrowserTransport` fails with `ApiError::Unavailable`,
//! since the token only exists in the browser.
//!
//! Requests and responses are plain data so the API client can be driven by
//! mock transports in tests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Outgoing request.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), bearer: None, body: None }
    }

    pub fn post_json(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self { method: Method::Post, url: url.into(), bearer: None, body: Some(body) }
    }

    /// Attach `Authorization: Bearer <token>`.
    #[must_use]
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }
}

/// Value for the `Authorization` header.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Status and raw body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Fail with `Status` on a non-2xx answer, otherwise decode the body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` or `ApiError::Decode`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(ApiError::Status(self.status));
        }
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Sends one request and returns the raw response.
///
/// Futures are `?Send` because browser fetch futures are not `Send`.
#[async_trait(?Send)]
pub trait HttpTransport: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError::Transport` when the request cannot complete.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `fetch`-backed transport used by the hydrated app.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl HttpTransport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let transport_err = |e: gloo_net::Error| ApiError::Transport(e.to_string());

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            };
            if let Some(token) = request.bearer.as_deref() {
                builder = builder.header("Authorization", &bearer_header(token));
            }
            let resp = match request.body {
                Some(body) => builder.json(&body).map_err(transport_err)?.send().await,
                None => builder.send().await,
            }
            .map_err(transport_err)?;

            let status = resp.status();
            let body = resp.text().await.map_err(transport_err)?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}
