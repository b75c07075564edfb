use crate::ui::mvi::Reducer;

use super::intent::ViewerIntent;
use super::state::ViewerState;

/// Viewer state transitions.
///
/// `Reload` only starts a fetch from an idle state, so at most one fetch
/// is in flight. Outcomes arriving while idle are stale and dropped whole,
/// failure detail included.
pub struct ViewerReducer;

impl Reducer for ViewerReducer {
    type State = ViewerState;
    type Intent = ViewerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ViewerIntent::Reload => {
                if state.loading {
                    return state;
                }
                ViewerState {
                    current: state.current,
                    loading: true,
                    load_failed: None,
                }
            }
            ViewerIntent::Loaded { dog } => {
                if !state.loading {
                    return state;
                }
                ViewerState {
                    current: Some(dog),
                    loading: false,
                    load_failed: None,
                }
            }
            ViewerIntent::Failed { detail } => {
                if !state.loading {
                    return state;
                }
                ViewerState {
                    current: None,
                    loading: false,
                    load_failed: Some(detail),
                }
            }
        }
    }
}
