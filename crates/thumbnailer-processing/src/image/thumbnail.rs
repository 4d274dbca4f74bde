//! Thumbnail sizing and generation
//!
//! Landscape sources are scaled to a fixed width, everything else (portrait
//! and square) to a fixed height. The other side keeps the aspect ratio.
//! Sources smaller than the target are enlarged.

use super::codec;
use super::processor::ImageProcessor;
use crate::document::PLACEHOLDER_ICON;
use crate::error::ProcessingError;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::path::PathBuf;
use thumbnailer_core::constants::{THUMBNAIL_LANDSCAPE_WIDTH, THUMBNAIL_PORTRAIT_HEIGHT};

/// Target box for thumbnails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailSpec {
    pub landscape_width: u32,
    pub portrait_height: u32,
}

impl Default for ThumbnailSpec {
    fn default() -> Self {
        Self {
            landscape_width: THUMBNAIL_LANDSCAPE_WIDTH,
            portrait_height: THUMBNAIL_PORTRAIT_HEIGHT,
        }
    }
}

impl ThumbnailSpec {
    /// Output dimensions for a `width` x `height` source
    pub fn target_dimensions(&self, width: u32, height: u32) -> Result<(u32, u32), ProcessingError> {
        if width == 0 || height == 0 {
            return Err(ProcessingError::InvalidDimensions { width, height });
        }

        if width > height {
            let scaled = scale_side(self.landscape_width, height, width);
            Ok((self.landscape_width, scaled))
        } else {
            let scaled = scale_side(self.portrait_height, width, height);
            Ok((scaled, self.portrait_height))
        }
    }
}

/// `round(fixed * other / longer)`, never below one pixel
fn scale_side(fixed: u32, other: u32, longer: u32) -> u32 {
    let scaled = (fixed as f64 * other as f64 / longer as f64).round() as u32;
    scaled.max(1)
}

/// Pick a resampling filter from the downscale ratio
pub fn select_filter(orig_width: u32, orig_height: u32, new_width: u32, new_height: u32) -> FilterType {
    let width_ratio = orig_width as f32 / new_width as f32;
    let height_ratio = orig_height as f32 / new_height as f32;
    let max_ratio = width_ratio.max(height_ratio);

    if max_ratio > 2.0 {
        FilterType::Triangle
    } else if max_ratio > 1.5 {
        FilterType::CatmullRom
    } else {
        FilterType::Lanczos3
    }
}

/// An encoded thumbnail
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Where the pixels for a thumbnail come from
#[derive(Debug)]
pub enum ThumbnailSource {
    /// An already decoded (and orientation-corrected) image
    Image(DynamicImage),
    /// An image file on local disk, e.g. a rasterized PDF page
    File(PathBuf),
    /// The bundled PDF icon
    Placeholder,
}

impl ThumbnailSource {
    pub async fn load(self) -> Result<DynamicImage, ProcessingError> {
        match self {
            ThumbnailSource::Image(img) => Ok(img),
            ThumbnailSource::File(path) => {
                let data = tokio::fs::read(&path).await?;
                ImageProcessor::decode(&data)
            }
            ThumbnailSource::Placeholder => ImageProcessor::decode(PLACEHOLDER_ICON),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ThumbnailGenerator {
    spec: ThumbnailSpec,
}

impl ThumbnailGenerator {
    pub fn new(spec: ThumbnailSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &ThumbnailSpec {
        &self.spec
    }

    /// Resize `img` into the thumbnail box and encode it as `format`
    pub fn generate(&self, img: &DynamicImage, format: ImageFormat) -> Result<Thumbnail, ProcessingError> {
        let (orig_width, orig_height) = img.dimensions();
        let (width, height) = self.spec.target_dimensions(orig_width, orig_height)?;
        let filter = select_filter(orig_width, orig_height, width, height);

        let resized = img.resize_exact(width, height, filter);
        let data = codec::encode(&resized, format)?;

        tracing::debug!(
            orig_width,
            orig_height,
            width,
            height,
            format = ?format,
            size_bytes = data.len(),
            "Thumbnail generated"
        );

        Ok(Thumbnail {
            data,
            width,
            height,
        })
    }
}
