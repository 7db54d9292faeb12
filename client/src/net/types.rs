//! Wire types for the admin API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Login form input. Sent once as the request body and then dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub identifier: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self { identifier: identifier.into(), secret: secret.into() }
    }
}

/// Successful login payload: the token plus whatever else the server sends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body of the protected resource.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProtectedMessage {
    pub message: String,
}
