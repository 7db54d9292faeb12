use super::*;

#[test]
fn default_config_targets_local_admin_api() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.base_url, "http://localhost:3333");
    assert_eq!(cfg.login_url(), "http://localhost:3333/admin/login");
    assert_eq!(cfg.resource_url(), "http://localhost:3333/");
}

#[test]
fn join_url_collapses_duplicate_slashes() {
    let cfg = ApiConfig::with_base_url("http://api.test/");
    assert_eq!(cfg.login_url(), "http://api.test/admin/login");
    assert_eq!(cfg.resource_url(), "http://api.test/");
}

#[test]
fn join_url_inserts_missing_slash() {
    assert_eq!(join_url("http://a", "b"), "http://a/b");
}

#[test]
fn routes_are_absolute() {
    assert!(LOGIN_ROUTE.starts_with('/'));
    assert!(DASHBOARD_ROUTE.starts_with('/'));
    assert_ne!(LOGIN_ROUTE, DASHBOARD_ROUTE);
}
