use super::*;

#[test]
fn login_failed_message_surfaces_status() {
    assert_eq!(
        login_failed_message(&ApiError::Status(401)),
        "Falha no login: server responded with status 401"
    );
}

#[test]
fn login_failed_message_surfaces_transport_error() {
    assert_eq!(
        login_failed_message(&ApiError::Transport("connection refused".to_owned())),
        "Falha no login: request failed: connection refused"
    );
}
