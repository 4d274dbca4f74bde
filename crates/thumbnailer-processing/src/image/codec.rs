//! Encoding thumbnails back into the source format

use crate::error::ProcessingError;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// Map a (case-insensitive) file extension to the format used to re-encode it
pub fn format_for_extension(extension: &str) -> Result<ImageFormat, ProcessingError> {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
        "png" => Ok(ImageFormat::Png),
        "gif" => Ok(ImageFormat::Gif),
        "bmp" => Ok(ImageFormat::Bmp),
        other => Err(ProcessingError::UnsupportedFormat(other.to_string())),
    }
}

/// Encode `img` in `format`.
///
/// JPEG has no alpha channel so the image is flattened to RGB first. GIF is
/// always written from RGBA, and BMP keeps alpha only when the source has it.
pub fn encode(img: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, ProcessingError> {
    let mut buffer = Cursor::new(Vec::new());

    let result = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8()).write_to(&mut buffer, format),
        ImageFormat::Gif => DynamicImage::ImageRgba8(img.to_rgba8()).write_to(&mut buffer, format),
        ImageFormat::Bmp if img.color().has_alpha() => {
            DynamicImage::ImageRgba8(img.to_rgba8()).write_to(&mut buffer, format)
        }
        ImageFormat::Bmp => DynamicImage::ImageRgb8(img.to_rgb8()).write_to(&mut buffer, format),
        ImageFormat::Png => img.write_to(&mut buffer, format),
        other => {
            return Err(ProcessingError::UnsupportedFormat(format!("{:?}", other)));
        }
    };

    result.map_err(ProcessingError::Encode)?;
    Ok(buffer.into_inner())
}
