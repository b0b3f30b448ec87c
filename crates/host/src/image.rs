//! Image load probing.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Serialize;
use tokio::io::AsyncReadExt;
use url::Url;

use crate::error::{HostError, Result};

/// Fetches and decodes an image source.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load(&self, src: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImageStatus {
    #[serde(rename = "ok")]
    Loaded,
    #[serde(rename = "error")]
    Failed,
}

/// Outcome of [`is_image_loaded`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageLoad {
    pub src: String,
    pub status: ImageStatus,
}

impl ImageLoad {
    pub fn is_loaded(&self) -> bool {
        self.status == ImageStatus::Loaded
    }
}

/// Loads `src` once and reports the outcome. Never fails.
pub async fn is_image_loaded<L: ImageLoader + ?Sized>(loader: &L, src: &str) -> ImageLoad {
    let status = match loader.load(src).await {
        Ok(()) => ImageStatus::Loaded,
        Err(error) => {
            tracing::warn!(src, error = %error, "Image failed to load");
            ImageStatus::Failed
        }
    };
    ImageLoad {
        src: src.to_string(),
        status,
    }
}

const SIGNATURES: &[&[u8]] = &[
    b"\x89PNG\r\n\x1a\n",
    b"\xff\xd8\xff",
    b"GIF87a",
    b"GIF89a",
    b"BM",
];

/// Loads images from the local filesystem, accepting `file://` sources.
///
/// A file counts as loaded when it starts with a PNG, JPEG, GIF, WebP or
/// BMP signature.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageLoader;

#[async_trait]
impl ImageLoader for FsImageLoader {
    async fn load(&self, src: &str) -> Result<()> {
        let failed = |reason: String| HostError::ImageLoad {
            src: src.to_string(),
            reason,
        };
        let path = source_path(src).map_err(failed)?;

        let file = tokio::fs::File::open(&path)
            .await
            .map_err(|e| failed(e.to_string()))?;
        let mut header = Vec::with_capacity(12);
        file.take(12)
            .read_to_end(&mut header)
            .await
            .map_err(|e| failed(e.to_string()))?;

        if is_image_header(&header) {
            Ok(())
        } else {
            Err(failed("unrecognized image format".to_string()))
        }
    }
}

/// Local path for a plain path or a `file:` URL (percent-decoded, `localhost` allowed).
fn source_path(src: &str) -> std::result::Result<PathBuf, String> {
    if !src.starts_with("file:") {
        return Ok(PathBuf::from(src));
    }
    let url = Url::parse(src).map_err(|e| e.to_string())?;
    url.to_file_path()
        .map_err(|()| format!("not a local file URL: {url}"))
}

fn is_image_header(header: &[u8]) -> bool {
    let webp = header.len() >= 12 && &header[..4] == b"RIFF" && &header[8..12] == b"WEBP";
    webp || SIGNATURES.iter().any(|signature| header.starts_with(signature))
}
