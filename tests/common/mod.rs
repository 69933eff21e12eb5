//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use rentdesk::api::ApiClient;
use rentdesk::config::{ApiConfig, Config};
use rentdesk::session::{Role, SecureString, Session};
use std::path::PathBuf;
use tempfile::TempDir;

/// Client pointed at `base_url` with short timeouts.
pub fn api_client(base_url: &str) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    };
    ApiClient::new(&config).expect("Failed to build client")
}

pub fn admin_session() -> Session {
    Session {
        user_id: 1,
        customer_id: None,
        role: Role::Admin,
        full_name: Some("Admin".to_string()),
        token: SecureString::new("admin-token"),
    }
}

pub fn customer_session() -> Session {
    Session {
        user_id: 7,
        customer_id: Some(42),
        role: Role::Customer,
        full_name: Some("Nimal Perera".to_string()),
        token: SecureString::new("customer-token"),
    }
}

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// A config whose session file lives inside `dir`.
pub fn config_in(dir: &TempDir, base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.session.path = Some(dir.path().join("session.toml"));
    config
}
