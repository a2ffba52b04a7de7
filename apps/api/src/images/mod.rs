//! Image host: where uploaded sponsor artwork lives.
//!
//! Handlers only see the `ImageHost` trait. The canonical URL it returns must
//! contain a single `upload/` segment so the layout engine can inject
//! transform parameters after it.

pub mod cloudinary;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub use cloudinary::CloudinaryHost;

#[derive(Debug, Error)]
pub enum ImageHostError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Image host error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Image host response had no URL")]
    MissingUrl,

    #[error("Upload failed after {retries} retries")]
    Exhausted { retries: u32 },
}

#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Stores the image and returns its canonical public URL.
    async fn upload(&self, file_name: &str, data: Bytes) -> Result<String, ImageHostError>;
}
