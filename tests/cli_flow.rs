//! End-to-end command runs against the mock backend.

mod common;

use clap::Parser;
use common::mock_backend::{MockBackend, MockResponse};
use rentdesk::cli::{run, Cli, CliError};
use rentdesk::console::PageError;
use rentdesk::session::{Role, SessionStore};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("rentdesk").chain(args.iter().copied())).unwrap()
}

/// Login stores the session; later commands send its token.
#[tokio::test]
async fn test_login_then_list() {
    let mock = MockBackend::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = common::config_in(&dir, &mock.base_url());
    let store = SessionStore::new(config.session_path());

    mock.enqueue_response(MockResponse::json(
        r#"{"token": "jwt-1", "role": "ADMIN", "userId": 1, "customerId": null}"#,
    ))
    .await;
    run(parse(&["login", "-u", "admin", "-p", "secret"]), config.clone())
        .await
        .unwrap();

    let session = store.require().unwrap();
    assert_eq!(session.role, Role::Admin);

    mock.enqueue_response(MockResponse::json(r#"[{"branchId": 1, "branchName": "Colombo"}]"#))
        .await;
    run(parse(&["branches", "list"]), config.clone()).await.unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests[1].path, "/api/branches");
    assert_eq!(requests[1].header("authorization"), Some("Bearer jwt-1"));

    run(parse(&["logout"]), config).await.unwrap();
    assert!(store.load().unwrap().is_none());
}

/// Commands that need a session fail cleanly without one.
#[tokio::test]
async fn test_commands_require_login() {
    let mock = MockBackend::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = common::config_in(&dir, &mock.base_url());

    let err = run(parse(&["vehicles", "list"]), config).await.unwrap_err();

    assert!(matches!(err, CliError::Session(_)));
    assert!(mock.captured_requests().await.is_empty());
}

/// `--base-url` wins over the configured URL.
#[tokio::test]
async fn test_base_url_flag_overrides_config() {
    let mock = MockBackend::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = common::config_in(&dir, "http://127.0.0.1:9/api");
    SessionStore::new(config.session_path())
        .save(&common::admin_session())
        .unwrap();

    let base_url = mock.base_url();
    run(parse(&["--base-url", &base_url, "staff", "list"]), config)
        .await
        .unwrap();

    assert_eq!(mock.captured_requests().await[0].path, "/api/staff");
}

/// A refused rental reports the dialog alert.
#[tokio::test]
async fn test_rejected_rental_reports_alert() {
    let mock = MockBackend::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = common::config_in(&dir, &mock.base_url());
    SessionStore::new(config.session_path())
        .save(&common::customer_session())
        .unwrap();
    mock.enqueue_response(MockResponse::text(400, "Vehicle is already rented"))
        .await;

    let json = r#"{"vehicle": {"vehicleId": 3}, "rentalDate": "2099-01-01", "returnDate": "2099-01-05"}"#;
    let err = run(parse(&["rentals", "create", "--json", json]), config)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Vehicle is not available or rental could not be created."
    );
}

/// A failing list command returns the page's error.
#[tokio::test]
async fn test_list_error_fails_command() {
    let mock = MockBackend::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = common::config_in(&dir, &mock.base_url());
    SessionStore::new(config.session_path())
        .save(&common::admin_session())
        .unwrap();
    mock.enqueue_response(MockResponse::text(503, "maintenance window"))
        .await;

    let err = run(parse(&["maintenance", "list"]), config).await.unwrap_err();

    assert_eq!(err.to_string(), "API Error: 503 - maintenance window");
}

/// Customers are stopped before the audit trail is requested.
#[tokio::test]
async fn test_audit_is_admin_only() {
    let mock = MockBackend::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = common::config_in(&dir, &mock.base_url());
    SessionStore::new(config.session_path())
        .save(&common::customer_session())
        .unwrap();

    let err = run(parse(&["audit"]), config).await.unwrap_err();

    assert!(matches!(err, CliError::Access(_)));
    assert!(mock.captured_requests().await.is_empty());
}

/// `rentals mine` asks for the signed-in customer's rentals.
#[tokio::test]
async fn test_mine_uses_customer_id() {
    let mock = MockBackend::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = common::config_in(&dir, &mock.base_url());
    SessionStore::new(config.session_path())
        .save(&common::customer_session())
        .unwrap();

    run(parse(&["rentals", "mine"]), config).await.unwrap();

    assert_eq!(
        mock.captured_requests().await[0].path,
        "/api/rentals/user/42"
    );
}

/// A `--base-url` override is held to the same checks as the config file.
#[tokio::test]
async fn test_invalid_base_url_flag_is_rejected() {
    let mock = MockBackend::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = common::config_in(&dir, &mock.base_url());
    SessionStore::new(config.session_path())
        .save(&common::admin_session())
        .unwrap();

    let err = run(parse(&["--base-url", "ftp://x", "branches", "list"]), config)
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::Config(_)));
    assert!(err.to_string().contains("ftp://x"));
    assert!(mock.captured_requests().await.is_empty());
}

/// Customers cannot rewrite a payment through the generic update command.
#[tokio::test]
async fn test_customer_payment_update_is_refused() {
    let mock = MockBackend::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = common::config_in(&dir, &mock.base_url());
    SessionStore::new(config.session_path())
        .save(&common::customer_session())
        .unwrap();

    let json = r#"{"rental": {"rentalId": 8}, "paymentMethod": "Cash", "amount": 10, "paymentStatus": "Paid"}"#;
    let err = run(parse(&["payments", "update", "5", "--json", json]), config.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::Access(_)));

    let err = run(parse(&["rentals", "delete", "5"]), config)
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::Page(PageError::Access(_))));

    assert!(mock.captured_requests().await.is_empty());
}
