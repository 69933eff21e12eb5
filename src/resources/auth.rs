use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, RequestOptions};
use crate::session::{Role, SecureString, Session};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
    pub user_id: i64,
    #[serde(default)]
    pub customer_id: Option<i64>,
}

impl LoginResponse {
    pub fn into_session(self) -> Session {
        Session {
            user_id: self.user_id,
            customer_id: self.customer_id,
            role: Role::parse(&self.role),
            full_name: None,
            token: SecureString::new(self.token),
        }
    }
}

/// New account details; customers also get a customer record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nic_passport_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_no: Option<String>,
}

/// Login and signup calls.
#[derive(Debug, Clone)]
pub struct AuthClient {
    api: ApiClient,
}

impl AuthClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let response: LoginResponse = self
            .api
            .post("/auth/login", &LoginRequest { username, password })
            .await?;
        let session = response.into_session();
        tracing::info!(user_id = session.user_id, role = %session.role, "Signed in");
        Ok(session)
    }

    /// Register an account; the server answers with a plain-text confirmation.
    pub async fn signup(&self, request: &SignupRequest) -> Result<String, ApiError> {
        let options = RequestOptions::new(reqwest::Method::POST).json(request)?;
        let message = self.api.send_text("/auth/signup", options).await?;
        tracing::info!(username = %request.username, "Signed up");
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn customer_login_maps_to_customer_session() {
        let response: LoginResponse = serde_json::from_value(json!({
            "token": "jwt", "role": "CUSTOMER", "userId": 7, "customerId": 42
        }))
        .unwrap();
        let session = response.into_session();
        assert_eq!(session.role, Role::Customer);
        assert_eq!(session.customer_key(), 42);
        assert_eq!(session.token.expose(), "jwt");
    }

    #[test]
    fn null_customer_id_is_accepted() {
        let response: LoginResponse = serde_json::from_value(json!({
            "token": "jwt", "role": "ADMIN", "userId": 1, "customerId": null
        }))
        .unwrap();
        assert_eq!(response.customer_id, None);
        assert!(response.into_session().is_admin());
    }
}
