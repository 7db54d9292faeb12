//! Dashboard view model.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard page holds one `DashboardState` signal. It starts empty
//! (loading) and is replaced exactly once by the outcome of the protected
//! fetch started on mount.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::error::ApiError;
use crate::net::api::AuthClient;

/// Shown for every fetch failure; the specific cause is not surfaced.
pub const LOAD_ERROR_MESSAGE: &str = "Erro ao carregar os dados.";
pub const LOADING_MESSAGE: &str = "Carregando...";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub data: Option<String>,
    pub error: Option<String>,
}

/// Mutually exclusive render states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardPhase<'a> {
    Loading,
    Error(&'a str),
    Loaded(&'a str),
}

impl DashboardState {
    pub fn from_result(result: Result<String, ApiError>) -> Self {
        match result {
            Ok(message) => Self { data: Some(message), error: None },
            Err(_) => Self { data: None, error: Some(LOAD_ERROR_MESSAGE.to_owned()) },
        }
    }

    /// Error takes precedence over data.
    pub fn phase(&self) -> DashboardPhase<'_> {
        match (&self.error, &self.data) {
            (Some(error), _) => DashboardPhase::Error(error),
            (None, Some(data)) => DashboardPhase::Loaded(data),
            (None, None) => DashboardPhase::Loading,
        }
    }
}

/// Run the protected fetch and fold the outcome into the next state.
pub async fn load_dashboard(client: &AuthClient) -> DashboardState {
    DashboardState::from_result(client.fetch_protected_message().await)
}
