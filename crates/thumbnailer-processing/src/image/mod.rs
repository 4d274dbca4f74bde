//! Image processing module
//!
//! - Decoding and metadata (processor)
//! - EXIF orientation normalization (orientation)
//! - Thumbnail sizing and encoding (thumbnail, codec)

pub mod codec;
pub mod orientation;
pub mod processor;
pub mod thumbnail;

pub use orientation::ImageOrientation;
pub use processor::ImageProcessor;
pub use thumbnail::{Thumbnail, ThumbnailGenerator, ThumbnailSource, ThumbnailSpec};
