//! Errors produced by the admin API client.

/// Failure of a login or protected fetch.
///
/// The dashboard collapses every variant into one generic message; the login
/// page shows the `Display` text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No token in the session store; detected before any network call.
    #[error("token not found")]
    MissingToken,

    /// The request never reached the server or never came back.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server responded with status {0}")]
    Status(u16),

    /// The response body did not have the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}
