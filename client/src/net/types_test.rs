use super::*;

#[test]
fn credentials_serialize_with_wire_field_names() {
    let creds = Credentials::new("admin@example.com", "hunter2");
    let json = serde_json::to_value(&creds).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "identifier": "admin@example.com", "secret": "hunter2" })
    );
}

#[test]
fn login_response_keeps_extra_fields() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"token":"abc123","user":{"id":7},"expires_in":3600}"#).unwrap();
    assert_eq!(resp.token, "abc123");
    assert_eq!(resp.extra.get("expires_in"), Some(&serde_json::json!(3600)));
    assert_eq!(resp.extra.get("user"), Some(&serde_json::json!({ "id": 7 })));
    assert!(!resp.extra.contains_key("token"));
}

#[test]
fn login_response_requires_token() {
    let err = serde_json::from_str::<LoginResponse>(r#"{"user":"x"}"#);
    assert!(err.is_err());
}

#[test]
fn protected_message_ignores_unknown_fields() {
    let msg: ProtectedMessage = serde_json::from_str(r#"{"message":"hello","ts":1}"#).unwrap();
    assert_eq!(msg.message, "hello");
}
