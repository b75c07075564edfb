//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_dog_api;

use dogview::config::ApiConfig;
use dogview::dog::{DogClient, DogImage};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Client pointed at `endpoint` with a short timeout.
pub fn client_for(endpoint: &str) -> DogClient {
    let config = ApiConfig {
        endpoint: endpoint.to_string(),
        timeout_seconds: Some(5),
    };
    DogClient::new(&config).expect("Failed to build client")
}

pub fn sample_dog() -> DogImage {
    DogImage {
        image_url: "https://images.dog.ceo/breeds/hound-afghan/n02088094_1003.jpg".to_string(),
        breed: "Hound Afghan".to_string(),
    }
}

/// PNG of a single solid color.
pub fn png(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)))
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("Failed to encode PNG");
    bytes.into_inner()
}
