//! Client configuration: API origin, endpoint paths, routes, storage key.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portal talks to a single admin API origin. Values are compiled in;
//! embedders and tests override them by constructing `ApiConfig` directly.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";
pub const LOGIN_ENDPOINT: &str = "/admin/login";
pub const RESOURCE_ENDPOINT: &str = "/";

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Where the admin API lives and which paths the client calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub login_path: String,
    pub resource_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            login_path: LOGIN_ENDPOINT.to_owned(),
            resource_path: RESOURCE_ENDPOINT.to_owned(),
        }
    }
}

impl ApiConfig {
    /// Config pointing at `base_url` with the default endpoint paths.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }

    pub fn login_url(&self) -> String {
        join_url(&self.base_url, &self.login_path)
    }

    pub fn resource_url(&self) -> String {
        join_url(&self.base_url, &self.resource_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
