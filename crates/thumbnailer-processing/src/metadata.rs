//! Image metadata types

use serde::{Deserialize, Serialize};

/// Header-level facts about a source image, read without decoding pixels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    pub format: String,
    pub size_bytes: Option<u64>,
    /// EXIF orientation when present and not 1 (normal)
    pub exif_orientation: Option<u8>,
}
