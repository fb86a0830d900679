//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Shopper actions (arrow keys, clicks, typed characters)
/// - System events (rotation timer ticks, debounced query commits)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
