//! Loading/data/error tracking around async operations.
//!
//! [`Fetcher`] wraps a read that may run on mount and can be re-triggered;
//! [`Mutation`] wraps a parameterized write that only runs on demand. Each
//! instance owns its state; two instances over the same endpoint never share
//! or de-duplicate anything.

mod fetch;
mod mutation;

use std::fmt::Display;
use std::future::Future;
use std::pin::Pin;

use crate::mvi::Intent;

pub use fetch::{FetchOptions, FetchReducer, FetchState, Fetcher};
pub use mutation::{Mutation, MutationReducer, MutationState};

/// Message shown when a failure renders as an empty string.
pub const FALLBACK_ERROR: &str = "An error occurred";

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// Lifecycle events of one async call.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncIntent<T> {
    Started,
    Succeeded(T),
    Failed(String),
}

impl<T: Send + 'static> Intent for AsyncIntent<T> {}

/// Display text for a failure, or [`FALLBACK_ERROR`] when it has none.
pub fn error_message<E: Display + ?Sized>(err: &E) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        FALLBACK_ERROR.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_uses_display() {
        assert_eq!(error_message("boom"), "boom");
    }

    #[test]
    fn error_message_falls_back_when_blank() {
        assert_eq!(error_message(""), FALLBACK_ERROR);
        assert_eq!(error_message("  "), FALLBACK_ERROR);
    }
}
