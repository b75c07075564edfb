use thiserror::Error;

/// Errors produced while turning an image URL into a breed label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreedError {
    /// The URL has no `/`-separated parent segment to read a slug from.
    #[error("Unparseable image URL '{url}': expected at least two path segments")]
    TooFewSegments { url: String },

    /// The segment in the slug position is empty (e.g. `//` before the file name).
    #[error("Unparseable image URL '{url}': breed segment is empty")]
    EmptySlug { url: String },
}

/// Errors that end a single fetch attempt.
///
/// None of these are retried. The viewer treats every variant the same way.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request could not be sent or the body could not be decoded.
    #[error("Request to '{endpoint}' failed")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// API answered but reported a non-success status.
    #[error("API returned status '{status}': {message}")]
    Api { status: String, message: String },

    /// Image URL is not an absolute http(s) URL.
    #[error("Rejected image URL '{url}': {reason}")]
    UnsupportedImageUrl { url: String, reason: String },

    /// API answered with an image URL the breed extractor cannot parse.
    #[error(transparent)]
    Breed(#[from] BreedError),
}

impl FetchError {
    /// Text shown in place of the image after any failed attempt.
    pub const USER_MESSAGE: &'static str = "Could not load a dog image.";

    pub fn user_message(&self) -> &'static str {
        Self::USER_MESSAGE
    }

    /// Short machine-readable kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "transport",
            FetchError::Api { .. } => "api",
            FetchError::UnsupportedImageUrl { .. } => "image_url",
            FetchError::Breed(_) => "breed",
        }
    }
}
