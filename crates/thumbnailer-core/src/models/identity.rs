use crate::constants::{IMAGE_EXTENSIONS, PDF_EXTENSION, PDF_THUMBNAIL_EXTENSION};
use crate::error::PipelineError;

/// Identifier and extension derived from an object key.
///
/// Only the basename (text after the last `/`) is considered, and it must
/// contain exactly one `.`. `extension` keeps the case found in the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentIdentity {
    pub id: String,
    pub extension: String,
}

impl ContentIdentity {
    pub fn parse(key: &str) -> Result<Self, PipelineError> {
        let file_name = key.rsplit('/').next().unwrap_or(key);
        let mut segments = file_name.split('.');

        match (segments.next(), segments.next(), segments.next()) {
            (Some(id), Some(extension), None) => Ok(ContentIdentity {
                id: id.to_string(),
                extension: extension.to_string(),
            }),
            _ => Err(PipelineError::ExtensionNotFound(key.to_string())),
        }
    }

    /// Lowercase extension used for every comparison.
    pub fn normalized_extension(&self) -> String {
        self.extension.to_ascii_lowercase()
    }

    pub fn media_kind(&self) -> MediaKind {
        MediaKind::from_extension(&self.extension)
    }

    /// Extension of the thumbnail object: PDFs are rendered to PNG, images
    /// keep their own extension.
    pub fn thumbnail_extension(&self) -> &str {
        match self.media_kind() {
            MediaKind::Pdf => PDF_THUMBNAIL_EXTENSION,
            _ => &self.extension,
        }
    }
}

/// Extension family of an uploaded object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Pdf,
    Unsupported,
}

impl MediaKind {
    pub fn from_extension(extension: &str) -> Self {
        let extension = extension.to_ascii_lowercase();
        if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            MediaKind::Image
        } else if extension == PDF_EXTENSION {
            MediaKind::Pdf
        } else {
            MediaKind::Unsupported
        }
    }

    /// Whether orientation metadata must be applied before the origin copy is
    /// written (JPEG only).
    pub fn needs_orientation_fix(extension: &str) -> bool {
        matches!(extension.to_ascii_lowercase().as_str(), "jpg" | "jpeg")
    }
}
