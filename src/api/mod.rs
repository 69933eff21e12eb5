//! HTTP plumbing for the rental backend.
//!
//! [`ApiClient`] performs exactly one round trip per call and never recovers
//! from a failure locally: every non-2xx status becomes an [`ApiError`] for
//! the caller to surface.

mod client;
mod error;
mod transfer;

pub use client::{ApiClient, Payload, RequestOptions, JSON_CONTENT_TYPE};
pub use error::ApiError;
pub use transfer::{filename_from_disposition, Download, FileUpload};
pub(crate) use transfer::json_part;
