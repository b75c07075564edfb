//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is either a user action (reload key) or the result of
/// background work (a finished fetch). Reducers turn intents into states.
pub trait Intent: Send + 'static {}
