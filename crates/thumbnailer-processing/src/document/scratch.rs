use std::path::{Path, PathBuf};
use tempfile::TempDir;

const INPUT_FILE_NAME: &str = "convert.pdf";

/// Private working directory for one invocation.
///
/// Everything written here is removed when the value is dropped, so
/// concurrent invocations never see each other's files.
#[derive(Debug)]
pub struct ScratchSpace {
    dir: TempDir,
}

impl ScratchSpace {
    pub fn new() -> std::io::Result<Self> {
        let dir = tempfile::Builder::new().prefix("thumbnailer-").tempdir()?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write the PDF to rasterize and return its path
    pub async fn write_input(&self, data: &[u8]) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join(INPUT_FILE_NAME);
        tokio::fs::write(&path, data).await?;
        Ok(path)
    }
}
