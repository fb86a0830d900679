//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Cheap to move (reducers take them by value and hand back the next one)
/// - Self-contained (everything a widget needs to render, minus collaborators)
/// - Comparable (PartialEq, so tests can assert whole transitions)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
