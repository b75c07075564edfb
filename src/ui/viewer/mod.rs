//! Dog viewer feature module.
//!
//! - `state.rs` - what the screen shows (dog, picture, loading, failure)
//! - `intent.rs` - reload request and fetch outcomes
//! - `reducer.rs` - transitions, including the in-flight guard

mod intent;
mod reducer;
mod state;

pub use intent::ViewerIntent;
pub use reducer::ViewerReducer;
pub use state::{LoadedDog, ViewerState};
