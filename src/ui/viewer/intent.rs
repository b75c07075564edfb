use crate::ui::mvi::Intent;

use super::state::LoadedDog;

#[derive(Debug, Clone)]
pub enum ViewerIntent {
    /// User asked for a new dog. Ignored while a fetch is in flight.
    Reload,
    /// Fetch finished with a usable image URL.
    Loaded { dog: LoadedDog },
    /// Fetch failed for any reason. `detail` is shown under the static message.
    Failed { detail: String },
}

impl Intent for ViewerIntent {}
