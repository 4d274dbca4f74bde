use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterizeError {
    #[error("failed to start rasterizer {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("rasterizer exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("rasterizer timed out after {0:?}")]
    TimedOut(Duration),

    #[error("rasterizer produced no output at {0}")]
    MissingOutput(PathBuf),
}

/// Renders the first page of a PDF into an image file
#[async_trait]
pub trait PdfRasterizer: Send + Sync {
    /// Rasterize page 1 of `input` and return the path of the rendered image.
    ///
    /// The output lives next to `input`, so it is removed together with the
    /// scratch directory that holds the input.
    async fn rasterize_first_page(&self, input: &Path) -> Result<PathBuf, RasterizeError>;
}
