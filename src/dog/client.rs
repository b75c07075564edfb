use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::dog::breed::extract_breed;
use crate::dog::error::FetchError;
use crate::dog::picture::{DogPicture, PictureError};

/// Value of `status` the API sends with a usable image URL.
pub const STATUS_SUCCESS: &str = "success";

/// JSON envelope returned by `/api/breeds/image/random`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// Image URL on success, error text otherwise.
    pub message: String,
    pub status: String,
}

/// A fetched image together with its derived breed label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DogImage {
    pub image_url: String,
    pub breed: String,
}

impl TryFrom<ApiResponse> for DogImage {
    type Error = FetchError;

    fn try_from(response: ApiResponse) -> Result<Self, Self::Error> {
        if response.status != STATUS_SUCCESS {
            return Err(FetchError::Api {
                status: response.status,
                message: response.message,
            });
        }

        check_image_url(&response.message)?;
        let breed = extract_breed(&response.message)?;
        Ok(DogImage {
            image_url: response.message,
            breed,
        })
    }
}

/// Only absolute http(s) URLs may reach the downloader or the OS opener.
fn check_image_url(image_url: &str) -> Result<(), FetchError> {
    let reason = match reqwest::Url::parse(image_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => return Ok(()),
        Ok(url) => format!("scheme '{}' is not http or https", url.scheme()),
        Err(e) => format!("not a valid URL: {}", e),
    };
    Err(FetchError::UnsupportedImageUrl {
        url: image_url.to_string(),
        reason,
    })
}

/// Client for the random-image endpoint.
///
/// Holds no request state, so callers are responsible for not overlapping
/// calls when that matters to them (see `ui::fetch`).
#[derive(Clone)]
pub struct DogClient {
    client: Client,
    endpoint: String,
}

impl DogClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder.build().map_err(|e| FetchError::Transport {
            endpoint: config.endpoint.clone(),
            source: e,
        })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch one random image and derive its breed label.
    pub async fn fetch_random_dog(&self) -> Result<DogImage, FetchError> {
        debug!(endpoint = %self.endpoint, "Fetching random dog");

        let result = self.request().await.and_then(DogImage::try_from);
        match &result {
            Ok(dog) => debug!(breed = %dog.breed, url = %dog.image_url, "Dog fetched"),
            Err(err) => warn!(kind = err.kind(), error = %err, "Dog fetch failed"),
        }
        result
    }

    /// Download and decode the picture behind `image_url`.
    pub async fn fetch_picture(&self, image_url: &str) -> Result<DogPicture, PictureError> {
        debug!(url = image_url, "Downloading picture");

        let response = self
            .client
            .get(image_url)
            .send()
            .await
            .map_err(|e| PictureError::Download {
                url: image_url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PictureError::HttpStatus {
                url: image_url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| PictureError::Download {
            url: image_url.to_string(),
            source: e,
        })?;

        DogPicture::decode(&bytes).map_err(|e| PictureError::Decode {
            url: image_url.to_string(),
            source: e,
        })
    }

    async fn request(&self) -> Result<ApiResponse, FetchError> {
        // The body is decoded whatever the HTTP status: the API reports
        // failures in-band through the `status` field.
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| self.transport(e))?;

        response
            .json::<ApiResponse>()
            .await
            .map_err(|e| self.transport(e))
    }

    fn transport(&self, source: reqwest::Error) -> FetchError {
        FetchError::Transport {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}
