use super::fixtures;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thumbnailer_processing::{PdfRasterizer, RasterizeError};

/// Always fails as a crashing converter would
#[derive(Default)]
pub struct FailingRasterizer {
    inputs: Mutex<Vec<PathBuf>>,
}

impl FailingRasterizer {
    pub fn inputs(&self) -> Vec<PathBuf> {
        self.inputs.lock().unwrap().clone()
    }
}

#[async_trait]
impl PdfRasterizer for FailingRasterizer {
    async fn rasterize_first_page(&self, input: &Path) -> Result<PathBuf, RasterizeError> {
        self.inputs.lock().unwrap().push(input.to_path_buf());
        Err(RasterizeError::Failed {
            status: "exit status: 1".to_string(),
            stderr: "Unrecoverable error".to_string(),
        })
    }
}

/// Renders a solid page of the given size next to the input
pub struct PageRasterizer {
    width: u32,
    height: u32,
    inputs: Mutex<Vec<PathBuf>>,
}

impl PageRasterizer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            inputs: Mutex::new(Vec::new()),
        }
    }

    pub fn inputs(&self) -> Vec<PathBuf> {
        self.inputs.lock().unwrap().clone()
    }
}

#[async_trait]
impl PdfRasterizer for PageRasterizer {
    async fn rasterize_first_page(&self, input: &Path) -> Result<PathBuf, RasterizeError> {
        self.inputs.lock().unwrap().push(input.to_path_buf());
        let output = input.with_file_name("page_1.png");
        std::fs::write(&output, fixtures::png(self.width, self.height)).unwrap();
        Ok(output)
    }
}
