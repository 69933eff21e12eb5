//! Multipart uploads and binary downloads.
//!
//! These bypass the JSON path: uploads send their own multipart content type
//! and downloads read the body as raw bytes.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::client::{decode, ApiClient, Payload, JSON_CONTENT_TYPE};
use crate::api::error::ApiError;

/// A file to send as one multipart field.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = guess_mime(&file_name).to_string();
        Self {
            file_name,
            mime,
            bytes,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = mime.into();
        self
    }

    pub async fn from_path(path: &Path) -> Result<Self, ApiError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| ApiError::File {
            path: path.to_path_buf(),
            source: e,
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, bytes))
    }

    pub(crate) fn into_part(self) -> Result<Part, ApiError> {
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime)
            .map_err(ApiError::Client)
    }
}

fn guess_mime(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// A JSON value sent as a multipart part with an `application/json` type.
pub(crate) fn json_part<B: Serialize + ?Sized>(value: &B) -> Result<Part, ApiError> {
    let bytes = serde_json::to_vec(value).map_err(ApiError::Encode)?;
    Part::bytes(bytes)
        .mime_str(JSON_CONTENT_TYPE)
        .map_err(ApiError::Client)
}

/// A downloaded file.
#[derive(Debug, Clone, PartialEq)]
pub struct Download {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Download {
    /// Write the file into `dir`, returning the full path.
    pub async fn save_to(&self, dir: &Path) -> Result<PathBuf, ApiError> {
        let path = dir.join(&self.file_name);
        tokio::fs::write(&path, &self.bytes)
            .await
            .map_err(|e| ApiError::File {
                path: path.clone(),
                source: e,
            })?;
        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "Saved download");
        Ok(path)
    }
}

/// Extract the file name hint from a `Content-Disposition` header.
///
/// `filename*=` (RFC 5987, percent-encoded) wins over plain `filename=`.
/// Directory components are stripped so the name is safe to join onto a path.
pub fn filename_from_disposition(header: &str) -> Option<String> {
    let mut plain = None;
    let mut extended = None;

    for param in header.split(';').map(str::trim) {
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        match key.trim().to_ascii_lowercase().as_str() {
            "filename*" => {
                let value = value.trim().trim_matches('"');
                // charset'language'encoded-value
                let encoded = value.splitn(3, '\'').nth(2).unwrap_or(value);
                extended = urlencoding::decode(encoded).ok().map(Cow::into_owned);
            }
            "filename" => {
                plain = Some(value.trim().trim_matches('"').to_string());
            }
            _ => {}
        }
    }

    extended
        .or(plain)
        .map(|name| sanitize_file_name(&name))
        .filter(|name| !name.is_empty())
}

fn sanitize_file_name(name: &str) -> String {
    name.rsplit(['/', '\\']).next().unwrap_or("").trim().to_string()
}

impl ApiClient {
    /// POST a multipart form and parse the JSON answer.
    pub async fn upload<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<Payload<T>, ApiError> {
        let url = self.url(path);
        tracing::debug!(path = %path, "API upload");
        let headers = self.headers(false, &[])?;
        let builder = self
            .http()
            .request(Method::POST, &url)
            .headers(headers)
            .multipart(form);
        let response = self.execute(&url, builder).await?;
        decode(&url, response).await
    }

    /// Upload a single file under `field`.
    pub async fn upload_file<T: DeserializeOwned>(
        &self,
        path: &str,
        field: &str,
        file: FileUpload,
    ) -> Result<Payload<T>, ApiError> {
        let form = Form::new().part(field.to_string(), file.into_part()?);
        self.upload(path, form).await
    }

    /// GET a binary body.
    ///
    /// The file name comes from `Content-Disposition` when the server sends
    /// one, otherwise `fallback_name` is used.
    pub async fn download(&self, path: &str, fallback_name: &str) -> Result<Download, ApiError> {
        let url = self.url(path);
        tracing::debug!(path = %path, "API download");
        let headers = self.headers(false, &[])?;
        let builder = self.http().request(Method::GET, &url).headers(headers);
        let response = self.execute(&url, builder).await?;

        let file_name = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(filename_from_disposition)
            .unwrap_or_else(|| fallback_name.to_string());
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport {
                url: url.clone(),
                source: e,
            })?
            .to_vec();

        Ok(Download {
            file_name,
            content_type,
            bytes,
        })
    }
}
