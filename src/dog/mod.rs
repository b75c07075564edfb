//! Dog CEO API access and breed-label derivation.
//!
//! - `client.rs` - HTTP fetch of a random image (`DogClient`)
//! - `breed.rs` - slug extraction and capitalization
//! - `picture.rs` - image decoding for in-terminal display
//! - `error.rs` - fetch and parse error types

mod breed;
mod client;
mod error;
mod picture;

pub use breed::extract_breed;
pub use client::{ApiResponse, DogClient, DogImage, STATUS_SUCCESS};
pub use error::{BreedError, FetchError};
pub use picture::{DogPicture, PictureError, MAX_PICTURE_EDGE};
