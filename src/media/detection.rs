use super::types::MediaType;

#[must_use]
pub fn detect_mime(data: &[u8]) -> Option<String> {
    infer::get(data).map(|info| info.mime_type().to_string())
}

#[must_use]
pub fn detect_mime_from_extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    match ext.to_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg".into()),
        "png" => Some("image/png".into()),
        "gif" => Some("image/gif".into()),
        "webp" => Some("image/webp".into()),
        "heic" => Some("image/heic".into()),
        "heif" => Some("image/heif".into()),
        "bmp" => Some("image/bmp".into()),
        "svg" => Some("image/svg+xml".into()),
        "pdf" => Some("application/pdf".into()),
        "txt" => Some("text/plain".into()),
        _ => None,
    }
}

/// Magic bytes first, then the file extension, then `application/octet-stream`.
#[must_use]
pub fn detect_media_type(data: &[u8], filename: Option<&str>) -> (String, MediaType) {
    let mime = detect_mime(data)
        .or_else(|| filename.and_then(detect_mime_from_extension))
        .unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.essence_str().to_string());
    let media_type = MediaType::from_mime(&mime);
    (mime, media_type)
}
