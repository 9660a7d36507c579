//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses)
/// - Remote outcomes (a request resolved or failed)
/// - Scheduled work (a deferred pass coming due)
pub trait Intent: Send + 'static {}
