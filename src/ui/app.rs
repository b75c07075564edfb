use crate::dog::FetchError;
use crate::ui::mvi::Reducer;
use crate::ui::viewer::{LoadedDog, ViewerIntent, ViewerReducer, ViewerState};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    FetchDog,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Viewer screen state (MVI pattern).
    viewer: ViewerState,
    command_sender: Option<UiCommandSender>,
    tick: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            viewer: ViewerState::default(),
            command_sender: None,
            tick: 0,
        }
    }

    pub fn attach_commands(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Start a new fetch unless one is already in flight.
    ///
    /// Returns `true` if a fetch command was sent.
    pub fn request_reload(&mut self) -> bool {
        if self.viewer.is_loading() {
            debug!("Reload ignored: fetch already in flight");
            return false;
        }

        let Some(sender) = &self.command_sender else {
            warn!("Reload requested before fetch worker was attached");
            return false;
        };

        if let Err(err) = sender.try_send(UiCommand::FetchDog) {
            error!(error = %err, "Failed to dispatch fetch command");
            return false;
        }

        dispatch_mvi!(self, viewer, ViewerReducer, ViewerIntent::Reload);
        true
    }

    pub fn on_fetch_complete(&mut self, outcome: Result<LoadedDog, FetchError>) {
        match outcome {
            Ok(loaded) => {
                info!(
                    breed = %loaded.dog.breed,
                    picture = loaded.picture.is_some(),
                    "Showing dog"
                );
                dispatch_mvi!(self, viewer, ViewerReducer, ViewerIntent::Loaded { dog: loaded });
            }
            Err(err) => {
                error!(kind = err.kind(), error = %err, "Could not load dog image");
                let detail = err.to_string();
                dispatch_mvi!(self, viewer, ViewerReducer, ViewerIntent::Failed { detail });
            }
        }
    }

    /// Open the displayed image in the system's default viewer.
    ///
    /// Returns `false` when there is nothing to open or the launch failed.
    pub fn open_image(&self) -> bool {
        let Some(url) = self.viewer.image_url() else {
            return false;
        };
        match open::that_detached(url) {
            Ok(()) => {
                info!(url, "Opened image");
                true
            }
            Err(err) => {
                warn!(url, error = %err, "Failed to open image");
                false
            }
        }
    }
}
