use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::config::ApiConfig;
use crate::session::{SecureString, Session};

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Outcome of a successful round trip.
///
/// HTTP 204 is reported as [`Payload::NoContent`] instead of attempting to
/// parse an empty body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    Body(T),
    NoContent,
}

impl<T> Payload<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Payload::Body(value) => Some(value),
            Payload::NoContent => None,
        }
    }

    pub fn is_no_content(&self) -> bool {
        matches!(self, Payload::NoContent)
    }
}

/// Method, body and extra headers for one request.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<serde_json::Value>,
    /// Applied after the defaults; a header set here replaces the default of the same name.
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: Vec::new(),
        }
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body).map_err(ApiError::Encode)?);
        Ok(self)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Client for the rental REST API.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<SecureString>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token)
            .finish()
    }
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach the session's bearer token to every subsequent request.
    pub fn with_session(mut self, session: &Session) -> Self {
        self.token = Some(session.token.clone()).filter(|t| !t.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path such as `/vehicles/3`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Defaults first, then caller headers on top.
    pub(crate) fn headers(
        &self,
        json: bool,
        caller: &[(String, String)],
    ) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();

        if json {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }

        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token.expose())).map_err(
                |e| ApiError::InvalidHeader {
                    name: AUTHORIZATION.to_string(),
                    reason: e.to_string(),
                },
            )?;
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in caller {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| ApiError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| ApiError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }

    fn build(&self, path: &str, options: RequestOptions) -> Result<(String, RequestBuilder), ApiError> {
        let url = self.url(path);
        let headers = self.headers(true, &options.headers)?;
        let mut builder = self.http.request(options.method, &url).headers(headers);

        if let Some(body) = options.body {
            let bytes = serde_json::to_vec(&body).map_err(ApiError::Encode)?;
            builder = builder.body(bytes);
        }

        Ok((url, builder))
    }

    /// Send a prepared request and turn non-2xx statuses into errors.
    pub(crate) async fn execute(&self, url: &str, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Request failed to send");
            ApiError::Transport {
                url: url.to_string(),
                source: e,
            }
        })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(url = %url, status = status.as_u16(), "Request succeeded");
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(url = %url, status = status.as_u16(), "Request returned error status");
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    /// Perform one round trip and parse the JSON answer.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Payload<T>, ApiError> {
        tracing::debug!(method = %options.method, path = %path, "API request");
        let (url, builder) = self.build(path, options)?;
        let response = self.execute(&url, builder).await?;
        decode(&url, response).await
    }

    /// Like [`request`](Self::request) but a 204 answer is an error.
    pub async fn request_body<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        match self.request(path, options).await? {
            Payload::Body(value) => Ok(value),
            Payload::NoContent => Err(ApiError::EmptyBody { url: self.url(path) }),
        }
    }

    /// Perform one round trip and ignore whatever body comes back.
    pub async fn request_unit(&self, path: &str, options: RequestOptions) -> Result<(), ApiError> {
        tracing::debug!(method = %options.method, path = %path, "API request");
        let (url, builder) = self.build(path, options)?;
        self.execute(&url, builder).await?;
        Ok(())
    }

    /// Perform one round trip and return the body as plain text.
    pub async fn send_text(&self, path: &str, options: RequestOptions) -> Result<String, ApiError> {
        tracing::debug!(method = %options.method, path = %path, "API request");
        let (url, builder) = self.build(path, options)?;
        let response = self.execute(&url, builder).await?;
        response.text().await.map_err(|e| ApiError::Transport { url, source: e })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request_body(path, RequestOptions::new(Method::GET)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request_body(path, RequestOptions::new(Method::POST).json(body)?)
            .await
    }

    /// POST without a request body (state transitions such as `/complete`).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request_body(path, RequestOptions::new(Method::POST)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request_body(path, RequestOptions::new(Method::PUT).json(body)?)
            .await
    }

    /// PUT without a request body (approve / reject).
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request_body(path, RequestOptions::new(Method::PUT)).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request_unit(path, RequestOptions::new(Method::DELETE))
            .await
    }
}

/// Parse a successful response: 204 short-circuits, anything else is JSON.
pub(crate) async fn decode<T: DeserializeOwned>(
    url: &str,
    response: Response,
) -> Result<Payload<T>, ApiError> {
    if response.status() == StatusCode::NO_CONTENT {
        return Ok(Payload::NoContent);
    }

    let bytes = response.bytes().await.map_err(|e| ApiError::Transport {
        url: url.to_string(),
        source: e,
    })?;

    serde_json::from_slice(&bytes)
        .map(Payload::Body)
        .map_err(|e| ApiError::Decode {
            url: url.to_string(),
            source: e,
        })
}
