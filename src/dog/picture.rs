use std::fmt;

use thiserror::Error;

/// Longest edge kept after decoding. Terminals rarely show more than this
/// many half-block pixels across.
pub const MAX_PICTURE_EDGE: u32 = 160;

/// Errors from downloading or decoding the image behind a URL.
///
/// These never fail a fetch: the viewer falls back to showing the URL.
#[derive(Debug, Error)]
pub enum PictureError {
    #[error("Image download from '{url}' failed")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Image download from '{url}' returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Could not decode image from '{url}'")]
    Decode {
        url: String,
        #[source]
        source: image::ImageError,
    },
}

/// Decoded, downscaled RGB image ready for cell rendering.
#[derive(Clone, PartialEq, Eq)]
pub struct DogPicture {
    width: u32,
    height: u32,
    /// Row-major RGB triples.
    pixels: Vec<u8>,
}

impl fmt::Debug for DogPicture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DogPicture")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl DogPicture {
    /// Decode any format `image` recognizes and shrink it so neither edge
    /// exceeds `MAX_PICTURE_EDGE`. Aspect ratio is preserved.
    pub fn decode(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let decoded = image::load_from_memory(bytes)?;
        let oversized = decoded.width() > MAX_PICTURE_EDGE || decoded.height() > MAX_PICTURE_EDGE;
        let decoded = if oversized {
            decoded.thumbnail(MAX_PICTURE_EDGE, MAX_PICTURE_EDGE)
        } else {
            decoded
        };
        let rgb = decoded.to_rgb8();
        Ok(Self {
            width: rgb.width(),
            height: rgb.height(),
            pixels: rgb.into_raw(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGB at `(x, y)`, clamped to the picture bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let x = x.min(self.width.saturating_sub(1));
        let y = y.min(self.height.saturating_sub(1));
        let offset = ((y * self.width + x) * 3) as usize;
        match self.pixels.get(offset..offset + 3) {
            Some(rgb) => [rgb[0], rgb[1], rgb[2]],
            None => [0, 0, 0],
        }
    }
}
