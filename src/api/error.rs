use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the request client.
///
/// Callers don't branch on the variant; they surface the message as-is.
/// The status variant keeps the exact `API Error: {status} - {body}` shape
/// so server-side explanations ("Vehicle not available") reach the user.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("API Error: {status} - {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response (DNS, refused, timeout).
    #[error("Network error calling '{url}': {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the JSON shape we expected.
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The endpoint answered 204 where a body was required.
    #[error("Expected a response body from '{url}' but got no content")]
    EmptyBody { url: String },

    /// A caller-supplied header name or value was not valid HTTP.
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Reading an upload or writing a download failed.
    #[error("File error on '{path}': {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
