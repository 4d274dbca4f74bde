//! Ghostscript-backed PDF rasterizer

use super::rasterizer::{PdfRasterizer, RasterizeError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

const OUTPUT_FILE_NAME: &str = "page_1.png";

/// Runs the `gs` binary to render page 1 as a 72 dpi PNG
#[derive(Debug, Clone)]
pub struct GhostscriptRasterizer {
    binary: PathBuf,
    timeout: Option<Duration>,
}

impl GhostscriptRasterizer {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            timeout: None,
        }
    }

    /// Kill the process if it runs longer than `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Where the rendered page for `input` is written
    pub fn output_path(input: &Path) -> PathBuf {
        input.with_file_name(OUTPUT_FILE_NAME)
    }

    /// Command line arguments for rendering `input` into `output`
    pub fn build_args(input: &Path, output: &Path) -> Vec<String> {
        vec![
            "-dCompatibilityLevel=1.4".to_string(),
            "-dQUIET".to_string(),
            "-dPARANOIDSAFER".to_string(),
            "-dBATCH".to_string(),
            "-dNOPAUSE".to_string(),
            "-dNOPROMPT".to_string(),
            "-sDEVICE=png16m".to_string(),
            "-dTextAlphaBits=4".to_string(),
            "-dGraphicsAlphaBits=4".to_string(),
            "-r72".to_string(),
            "-dFirstPage=1".to_string(),
            "-dLastPage=1".to_string(),
            format!("-sOutputFile={}", output.to_string_lossy()),
            input.to_string_lossy().to_string(),
        ]
    }
}

#[async_trait]
impl PdfRasterizer for GhostscriptRasterizer {
    #[tracing::instrument(skip(self, input), fields(binary = %self.binary.display(), input = %input.display()))]
    async fn rasterize_first_page(&self, input: &Path) -> Result<PathBuf, RasterizeError> {
        let output_path = Self::output_path(input);
        let args = Self::build_args(input, &output_path);
        let start = std::time::Instant::now();

        let mut command = Command::new(&self.binary);
        command
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        let run = command.output();

        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, run)
                .await
                .map_err(|_| RasterizeError::TimedOut(limit))?,
            None => run.await,
        };

        let output = result.map_err(|source| RasterizeError::Spawn {
            binary: self.binary.display().to_string(),
            source,
        })?;

        if !output.status.success() {
            return Err(RasterizeError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        if !tokio::fs::try_exists(&output_path).await.unwrap_or(false) {
            return Err(RasterizeError::MissingOutput(output_path));
        }

        tracing::debug!(
            input = %input.display(),
            output = %output_path.display(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "PDF first page rasterized"
        );

        Ok(output_path)
    }
}
