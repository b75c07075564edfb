//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// States are replaced wholesale (`Clone`), hold all data needed to
/// render (`Default` for the pre-fetch screen) and are compared in tests
/// (`PartialEq`).
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
