use super::*;
use crate::config::ApiConfig;
use crate::net::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::state::session::MemorySessionStore;
use futures::executor::block_on;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================
// Fixtures
// =============================================================

struct FixedTransport {
    response: Result<HttpResponse, ApiError>,
    calls: AtomicUsize,
}

impl FixedTransport {
    fn new(response: Result<HttpResponse, ApiError>) -> Arc<Self> {
        Arc::new(Self { response, calls: AtomicUsize::new(0) })
    }
}

#[async_trait::async_trait(?Send)]
impl HttpTransport for FixedTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

fn client_with(token: Option<&str>, transport: Arc<FixedTransport>) -> AuthClient {
    let store = match token {
        Some(t) => MemorySessionStore::with_token(t),
        None => MemorySessionStore::new(),
    };
    AuthClient::new(ApiConfig::default(), Arc::new(store), transport)
}

// =============================================================
// DashboardState
// =============================================================

#[test]
fn default_state_is_loading() {
    let state = DashboardState::default();
    assert_eq!(state.phase(), DashboardPhase::Loading);
}

#[test]
fn error_wins_over_data() {
    let state = DashboardState { data: Some("hello".to_owned()), error: Some("boom".to_owned()) };
    assert_eq!(state.phase(), DashboardPhase::Error("boom"));
}

#[test]
fn from_result_hides_specific_error() {
    let state = DashboardState::from_result(Err(ApiError::Status(500)));
    assert_eq!(state.data, None);
    assert_eq!(state.phase(), DashboardPhase::Error(LOAD_ERROR_MESSAGE));
}

// =============================================================
// load_dashboard
// =============================================================

#[test]
fn loaded_message_is_displayed() {
    let transport =
        FixedTransport::new(Ok(HttpResponse { status: 200, body: r#"{"message":"hello"}"#.to_owned() }));
    let state = block_on(load_dashboard(&client_with(Some("abc123"), transport)));

    assert_eq!(state.phase(), DashboardPhase::Loaded("hello"));
    assert_eq!(state.error, None);
}

#[test]
fn network_failure_shows_fixed_error_and_no_data() {
    let transport = FixedTransport::new(Err(ApiError::Transport("offline".to_owned())));
    let state = block_on(load_dashboard(&client_with(Some("abc123"), transport)));

    assert_eq!(state.phase(), DashboardPhase::Error("Erro ao carregar os dados."));
    assert_eq!(state.data, None);
}

#[test]
fn rejected_token_shows_fixed_error() {
    let transport = FixedTransport::new(Ok(HttpResponse { status: 403, body: String::new() }));
    let state = block_on(load_dashboard(&client_with(Some("revoked"), transport)));
    assert_eq!(state.phase(), DashboardPhase::Error(LOAD_ERROR_MESSAGE));
}

#[test]
fn missing_token_errors_without_network_call() {
    let transport =
        FixedTransport::new(Ok(HttpResponse { status: 200, body: r#"{"message":"hello"}"#.to_owned() }));
    let state = block_on(load_dashboard(&client_with(None, transport.clone())));

    assert_eq!(state.phase(), DashboardPhase::Error(LOAD_ERROR_MESSAGE));
    assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
}
