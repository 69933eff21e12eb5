//! Base trait for view state in MVI architecture.

/// Marker trait for view state objects.
///
/// States are cloned to produce new states, compared to detect changes,
/// and carry everything needed to render.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
