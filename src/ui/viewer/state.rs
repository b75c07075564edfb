use crate::dog::{DogImage, DogPicture};
use crate::ui::mvi::UiState;

/// A successful fetch: the image URL with its breed label, plus the
/// decoded picture when the download and decode worked.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDog {
    pub dog: DogImage,
    pub picture: Option<DogPicture>,
}

impl From<DogImage> for LoadedDog {
    fn from(dog: DogImage) -> Self {
        Self { dog, picture: None }
    }
}

/// Everything the viewer screen renders.
///
/// Image URL, breed label and picture travel together inside `current`,
/// so the screen never shows one dog's label with another's picture.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewerState {
    pub current: Option<LoadedDog>,
    pub loading: bool,
    /// Detail of the last failed attempt; cleared by the next reload.
    pub load_failed: Option<String>,
}

impl UiState for ViewerState {}

impl ViewerState {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_failed(&self) -> bool {
        self.load_failed.is_some()
    }

    pub fn failure_detail(&self) -> Option<&str> {
        self.load_failed.as_deref()
    }

    /// Dog to display. Hidden while a newer one is loading.
    pub fn visible(&self) -> Option<&LoadedDog> {
        if self.loading {
            None
        } else {
            self.current.as_ref()
        }
    }

    pub fn visible_dog(&self) -> Option<&DogImage> {
        self.visible().map(|loaded| &loaded.dog)
    }

    pub fn picture(&self) -> Option<&DogPicture> {
        self.visible().and_then(|loaded| loaded.picture.as_ref())
    }

    pub fn image_url(&self) -> Option<&str> {
        self.visible_dog().map(|dog| dog.image_url.as_str())
    }

    pub fn breed(&self) -> Option<&str> {
        self.visible_dog().map(|dog| dog.breed.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pug() -> LoadedDog {
        DogImage {
            image_url: "https://images.dog.ceo/breeds/pug/n.jpg".to_string(),
            breed: "Pug".to_string(),
        }
        .into()
    }

    #[test]
    fn default_is_empty_and_idle() {
        let state = ViewerState::default();
        assert!(!state.is_loading());
        assert!(!state.has_failed());
        assert!(state.image_url().is_none());
        assert!(state.breed().is_none());
    }

    #[test]
    fn dog_is_hidden_while_loading() {
        let state = ViewerState {
            current: Some(pug()),
            loading: true,
            load_failed: None,
        };
        assert!(state.visible_dog().is_none());
        assert!(state.picture().is_none());
    }

    #[test]
    fn idle_state_exposes_url_and_breed() {
        let state = ViewerState {
            current: Some(pug()),
            loading: false,
            load_failed: None,
        };
        assert_eq!(state.breed(), Some("Pug"));
        assert_eq!(state.image_url(), Some("https://images.dog.ceo/breeds/pug/n.jpg"));
        assert!(state.picture().is_none());
    }
}
