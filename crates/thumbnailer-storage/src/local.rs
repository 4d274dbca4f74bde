use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use thumbnailer_core::constants::content_type_for_extension;
use thumbnailer_core::ObjectRecord;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
///
/// Objects live at `{base_path}/{bucket}/{key}`. Content types are not
/// persisted; reads infer them from the key's extension.
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory holding one sub-directory per bucket
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Convert bucket and key to a filesystem path
    ///
    /// Rejects anything that could escape the base directory: absolute keys,
    /// `..` components and bucket names containing separators.
    fn object_path(&self, bucket: &str, key: &str) -> StorageResult<PathBuf> {
        if bucket.is_empty() || bucket.contains('/') || bucket.contains("..") {
            return Err(StorageError::InvalidKey(format!("invalid bucket name: {}", bucket)));
        }

        let relative = Path::new(key);
        let escapes = key.is_empty()
            || relative
                .components()
                .any(|c| !matches!(c, Component::Normal(_)));
        if escapes {
            return Err(StorageError::InvalidKey(format!(
                "storage key contains invalid components: {}",
                key
            )));
        }

        Ok(self.base_path.join(bucket).join(relative))
    }

    /// Ensure parent directory exists
    async fn ensure_parent_dir(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn get_object(&self, bucket: &str, key: &str) -> StorageResult<ObjectRecord> {
        let path = self.object_path(bucket, key)?;
        let start = std::time::Instant::now();

        let data = match fs::read(&path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                })
            }
            Err(e) => {
                return Err(StorageError::DownloadFailed(format!(
                    "Failed to read file {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let content_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(content_type_for_extension)
            .map(str::to_string);

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage read successful"
        );

        Ok(ObjectRecord::new(data, content_type))
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        _content_type: Option<&str>,
    ) -> StorageResult<()> {
        let path = self.object_path(bucket, key)?;
        let size = data.len();

        self.ensure_parent_dir(&path).await?;

        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage write successful"
        );

        Ok(())
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> StorageResult<()> {
        let path = self.object_path(bucket, key)?;

        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!(path = %path.display(), key = %key, "Local storage delete successful");
                Ok(())
            }
            // Deleting a missing object succeeds, as it does on S3.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::DeleteFailed(format!(
                "Failed to delete file {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_storage() -> (LocalStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path()).await.unwrap();
        (storage, temp_dir)
    }

    #[tokio::test]
    async fn test_put_get_delete() {
        let (storage, _temp_dir) = create_test_storage().await;

        storage
            .put_object("bucket", "deploy/abc/origin.png", b"png-bytes".to_vec(), Some("image/png"))
            .await
            .unwrap();

        let record = storage.get_object("bucket", "deploy/abc/origin.png").await.unwrap();
        assert_eq!(record.data, b"png-bytes");
        assert_eq!(record.content_type.as_deref(), Some("image/png"));

        storage.delete_object("bucket", "deploy/abc/origin.png").await.unwrap();
        assert!(matches!(
            storage.get_object("bucket", "deploy/abc/origin.png").await,
            Err(StorageError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_unknown_extension_has_no_content_type() {
        let (storage, _temp_dir) = create_test_storage().await;
        storage.put_object("bucket", "notes.txt", b"hi".to_vec(), None).await.unwrap();

        let record = storage.get_object("bucket", "notes.txt").await.unwrap();
        assert_eq!(record.content_type, None);
    }

    #[tokio::test]
    async fn test_delete_missing_object_succeeds() {
        let (storage, _temp_dir) = create_test_storage().await;
        assert!(storage.delete_object("bucket", "missing.jpg").await.is_ok());
    }

    #[tokio::test]
    async fn test_rejects_path_traversal() {
        let (storage, _temp_dir) = create_test_storage().await;

        for key in ["../escape.jpg", "/etc/passwd", "a/../../b.jpg", ""] {
            assert!(
                matches!(
                    storage.put_object("bucket", key, vec![1], None).await,
                    Err(StorageError::InvalidKey(_))
                ),
                "{:?} should be rejected",
                key
            );
        }

        assert!(matches!(
            storage.get_object("../other", "a.jpg").await,
            Err(StorageError::InvalidKey(_))
        ));
    }

    #[tokio::test]
    async fn test_objects_are_scoped_by_bucket() {
        let (storage, temp_dir) = create_test_storage().await;
        storage.put_object("one", "a.gif", vec![1, 2, 3], None).await.unwrap();

        assert!(temp_dir.path().join("one").join("a.gif").exists());
        assert!(storage.get_object("two", "a.gif").await.is_err());
        assert_eq!(storage.backend_type(), StorageBackend::Local);
    }
}
