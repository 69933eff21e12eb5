//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (open dialog, submit form)
/// - Async events (request started, succeeded, failed)
pub trait Intent: Send + 'static {}
