pub mod detection;
pub mod types;

pub use types::{ImageAttachment, MediaConfig, MediaType};

use crate::error::MediaError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;
use tracing::debug;

/// Read an image file, check it really is an image within the size cap and
/// base64-encode it. Only the MIME type is validated, not the picture itself.
pub async fn load_image(path: &Path, config: &MediaConfig) -> Result<ImageAttachment, MediaError> {
    let metadata = tokio::fs::metadata(path).await?;
    let max = config.max_file_size_bytes();
    if metadata.len() > max {
        return Err(MediaError::TooLarge {
            size: metadata.len(),
            max,
        });
    }

    let data = tokio::fs::read(path).await?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    image_from_bytes(&data, filename, config)
}

/// Same checks as [`load_image`] for bytes already in memory.
pub fn image_from_bytes(
    data: &[u8],
    filename: Option<String>,
    config: &MediaConfig,
) -> Result<ImageAttachment, MediaError> {
    let size = data.len() as u64;
    let max = config.max_file_size_bytes();
    if size > max {
        return Err(MediaError::TooLarge { size, max });
    }

    let (mime_type, media_type) = detection::detect_media_type(data, filename.as_deref());
    if media_type != MediaType::Image {
        return Err(MediaError::NotAnImage { mime: mime_type });
    }

    debug!(
        filename = filename.as_deref().unwrap_or("unnamed"),
        %mime_type,
        size,
        "image accepted"
    );
    Ok(ImageAttachment {
        filename,
        mime_type,
        data_base64: STANDARD.encode(data),
        size_bytes: size,
    })
}
