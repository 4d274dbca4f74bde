//! Thumbnailer Processing Library
//!
//! Media handling for the thumbnail pipeline:
//! - Image decoding, EXIF orientation normalization and thumbnail generation
//! - PDF first-page rasterization behind the `PdfRasterizer` trait, with a
//!   Ghostscript implementation and a bundled placeholder icon

pub mod document;
pub mod error;
pub mod image;
pub mod metadata;

pub use document::{
    GhostscriptRasterizer, PdfRasterizer, RasterizeError, ScratchSpace, PLACEHOLDER_ICON,
};
pub use error::ProcessingError;
pub use crate::image::{
    ImageOrientation, ImageProcessor, Thumbnail, ThumbnailGenerator, ThumbnailSource,
    ThumbnailSpec,
};
pub use metadata::ImageMetadata;
