//! Image processor - decoding, metadata extraction and EXIF orientation lookup

use crate::error::ProcessingError;
use crate::metadata::ImageMetadata;
use image::{DynamicImage, ImageReader};
use std::io::Cursor;

pub struct ImageProcessor;

impl ImageProcessor {
    /// Decode image bytes, guessing the format from the content
    pub fn decode(data: &[u8]) -> Result<DynamicImage, ProcessingError> {
        let reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(ProcessingError::Io)?;
        reader.decode().map_err(ProcessingError::Decode)
    }

    /// Read width/height, format and orientation without keeping the pixels
    pub fn extract_metadata(data: &[u8]) -> Result<ImageMetadata, ProcessingError> {
        let reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(ProcessingError::Io)?;
        let format = reader
            .format()
            .map(|f| format!("{:?}", f))
            .unwrap_or_else(|| "unknown".to_string());
        let (width, height) = reader.into_dimensions().map_err(ProcessingError::Decode)?;

        let exif_orientation = Self::read_exif_orientation(data);

        Ok(ImageMetadata {
            width,
            height,
            format,
            size_bytes: Some(data.len() as u64),
            exif_orientation: (exif_orientation != 1).then_some(exif_orientation),
        })
    }

    /// Read the EXIF orientation tag (1–8) from image data.
    ///
    /// Returns 1 (normal) when the container has no EXIF block, the tag is
    /// missing, or its value is out of range.
    pub fn read_exif_orientation(data: &[u8]) -> u8 {
        let exif = match exif::Reader::new().read_from_container(&mut Cursor::new(data)) {
            Ok(exif) => exif,
            Err(_) => return 1,
        };

        exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .and_then(|value| u8::try_from(value).ok())
            .filter(|value| (1..=8).contains(value))
            .unwrap_or(1)
    }

    /// Rotation and flips that bring an image with the given EXIF orientation
    /// upright. Returns (clockwise rotation, flip horizontal, flip vertical),
    /// applied in that order.
    pub fn orientation_transforms(orientation: u8) -> (Option<u16>, bool, bool) {
        match orientation {
            2 => (None, true, false),
            3 => (Some(180), false, false),
            4 => (None, false, true),
            5 => (Some(90), true, false), // transpose
            6 => (Some(90), false, false),
            7 => (Some(270), true, false), // transverse
            8 => (Some(270), false, false),
            _ => (None, false, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, ImageFormat, Rgba, RgbaImage};

    fn create_test_image(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    /// Minimal JPEG-style APP1 segment carrying only the orientation tag,
    /// spliced in after SOI.
    fn with_exif_orientation(jpeg: &[u8], orientation: u16) -> Vec<u8> {
        let mut tiff = Vec::new();
        tiff.extend_from_slice(b"MM\x00\x2a\x00\x00\x00\x08"); // big-endian header, IFD at 8
        tiff.extend_from_slice(&1u16.to_be_bytes()); // one entry
        tiff.extend_from_slice(&0x0112u16.to_be_bytes()); // Orientation
        tiff.extend_from_slice(&3u16.to_be_bytes()); // SHORT
        tiff.extend_from_slice(&1u32.to_be_bytes()); // count
        tiff.extend_from_slice(&orientation.to_be_bytes());
        tiff.extend_from_slice(&[0, 0]); // value padding
        tiff.extend_from_slice(&0u32.to_be_bytes()); // no next IFD

        let mut payload = b"Exif\x00\x00".to_vec();
        payload.extend_from_slice(&tiff);

        let mut out = jpeg[..2].to_vec(); // SOI
        out.extend_from_slice(&[0xFF, 0xE1]);
        out.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
        out.extend_from_slice(&payload);
        out.extend_from_slice(&jpeg[2..]);
        out
    }

    fn create_test_jpeg(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([0, 128, 255]));
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Jpeg)
            .unwrap();
        buffer
    }

    #[test]
    fn test_decode() {
        let img = ImageProcessor::decode(&create_test_image(40, 20)).unwrap();
        assert_eq!(img.dimensions(), (40, 20));
    }

    #[test]
    fn test_decode_invalid_image() {
        assert!(matches!(
            ImageProcessor::decode(b"not an image"),
            Err(ProcessingError::Decode(_))
        ));
    }

    #[test]
    fn test_extract_metadata() {
        let data = create_test_image(100, 50);
        let metadata = ImageProcessor::extract_metadata(&data).unwrap();

        assert_eq!(metadata.width, 100);
        assert_eq!(metadata.height, 50);
        assert_eq!(metadata.format, "Png");
        assert_eq!(metadata.size_bytes, Some(data.len() as u64));
        assert_eq!(metadata.exif_orientation, None);
    }

    #[test]
    fn test_read_exif_orientation_no_exif() {
        assert_eq!(ImageProcessor::read_exif_orientation(&create_test_image(4, 4)), 1);
        assert_eq!(ImageProcessor::read_exif_orientation(b"garbage"), 1);
    }

    #[test]
    fn test_read_exif_orientation_from_jpeg() {
        let jpeg = with_exif_orientation(&create_test_jpeg(8, 4), 6);
        assert_eq!(ImageProcessor::read_exif_orientation(&jpeg), 6);

        let metadata = ImageProcessor::extract_metadata(&jpeg).unwrap();
        assert_eq!(metadata.exif_orientation, Some(6));
    }

    #[test]
    fn test_read_exif_orientation_out_of_range() {
        let jpeg = with_exif_orientation(&create_test_jpeg(8, 4), 42);
        assert_eq!(ImageProcessor::read_exif_orientation(&jpeg), 1);
    }
}
