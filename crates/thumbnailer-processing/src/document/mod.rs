//! Document processing module
//!
//! PDFs are turned into a single raster image of their first page. The
//! rasterizer works on files inside a per-invocation scratch directory.

pub mod ghostscript;
pub mod placeholder;
pub mod rasterizer;
pub mod scratch;

pub use ghostscript::GhostscriptRasterizer;
pub use placeholder::PLACEHOLDER_ICON;
pub use rasterizer::{PdfRasterizer, RasterizeError};
pub use scratch::ScratchSpace;
