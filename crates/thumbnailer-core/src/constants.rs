//! Application-wide constants.

/// Extensions (lowercase) routed through the image path.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif"];

/// Extension (lowercase) routed through the PDF path.
pub const PDF_EXTENSION: &str = "pdf";

/// Extension used for thumbnails rendered from PDFs.
pub const PDF_THUMBNAIL_EXTENSION: &str = "png";

/// Thumbnail width for landscape sources.
pub const THUMBNAIL_LANDSCAPE_WIDTH: u32 = 250;

/// Thumbnail height for portrait and square sources.
pub const THUMBNAIL_PORTRAIT_HEIGHT: u32 = 200;

/// Notification subject for a completed thumbnail.
pub const SUBJECT_COMPLETE: &str = "thumbnail_complete";

/// Notification subject for a failed thumbnail.
pub const SUBJECT_ERROR: &str = "thumbnail_error";

/// Object name (without extension) of the origin copy.
pub const ORIGIN_NAME: &str = "origin";

/// Object name (without extension) of the thumbnail.
pub const THUMBNAIL_NAME: &str = "thumbnail";

/// Best-effort content type for an extension, used by backends that do not
/// persist object metadata.
pub fn content_type_for_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}
