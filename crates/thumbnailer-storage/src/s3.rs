use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use thumbnailer_core::ObjectRecord;

/// S3 storage implementation
#[derive(Clone)]
pub struct S3Storage {
    client: Client,
    endpoint_url: Option<String>, // Custom endpoint for S3-compatible providers
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// # Arguments
    /// * `region` - Region override; the default provider chain is used when `None`
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:4566" for LocalStack, "http://localhost:9000" for MinIO)
    ///
    /// Path-style addressing is always enabled.
    pub async fn new(region: Option<String>, endpoint_url: Option<String>) -> StorageResult<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(ref region) = region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        let mut s3_config_builder =
            aws_sdk_s3::config::Builder::from(&sdk_config).force_path_style(true);
        if let Some(ref endpoint) = endpoint_url {
            s3_config_builder = s3_config_builder.endpoint_url(endpoint);
        }

        let client = Client::from_conf(s3_config_builder.build());

        tracing::debug!(
            region = ?region,
            endpoint = ?endpoint_url,
            "S3 client configured"
        );

        Ok(S3Storage {
            client,
            endpoint_url,
        })
    }

    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn get_object(&self, bucket: &str, key: &str) -> StorageResult<ObjectRecord> {
        let start = std::time::Instant::now();

        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                get_object_error(
                    e.into_service_error(),
                    message,
                    bucket,
                    key,
                    start.elapsed().as_secs_f64() * 1000.0,
                )
            })?;

        let content_type = output.content_type().map(str::to_string);
        let data = output
            .body
            .collect()
            .await
            .map_err(|e| StorageError::DownloadFailed(e.to_string()))?
            .into_bytes()
            .to_vec();

        tracing::info!(
            bucket = %bucket,
            key = %key,
            content_type = ?content_type,
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 get_object successful"
        );

        Ok(ObjectRecord::new(data, content_type))
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        content_type: Option<&str>,
    ) -> StorageResult<()> {
        let start = std::time::Instant::now();
        let size = data.len();

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(data))
            .set_content_type(content_type.map(str::to_string))
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                tracing::error!(
                    error = %message,
                    bucket = %bucket,
                    key = %key,
                    size_bytes = size,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 put_object failed"
                );
                StorageError::UploadFailed(message)
            })?;

        tracing::info!(
            bucket = %bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 put_object successful"
        );

        Ok(())
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> StorageResult<()> {
        let start = std::time::Instant::now();

        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                tracing::error!(
                    error = %message,
                    bucket = %bucket,
                    key = %key,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 delete_object failed"
                );
                StorageError::DeleteFailed(message)
            })?;

        tracing::info!(
            bucket = %bucket,
            key = %key,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 delete_object successful"
        );

        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}

fn get_object_error(
    error: GetObjectError,
    message: String,
    bucket: &str,
    key: &str,
    duration_ms: f64,
) -> StorageError {
    if error.is_no_such_key() {
        tracing::warn!(
            bucket = %bucket,
            key = %key,
            duration_ms = duration_ms,
            "S3 object not found"
        );
        return StorageError::NotFound {
            bucket: bucket.to_string(),
            key: key.to_string(),
        };
    }

    tracing::error!(
        error = %message,
        bucket = %bucket,
        key = %key,
        duration_ms = duration_ms,
        "S3 get_object failed"
    );
    StorageError::DownloadFailed(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::error::ErrorMetadata;
    use aws_sdk_s3::types::error::NoSuchKey;

    #[tokio::test]
    async fn test_new_with_endpoint_override() {
        let storage = S3Storage::new(
            Some("us-east-1".to_string()),
            Some("http://localhost:4566".to_string()),
        )
        .await
        .unwrap();

        assert_eq!(storage.backend_type(), StorageBackend::S3);
        assert_eq!(storage.endpoint_url(), Some("http://localhost:4566"));
    }

    #[test]
    fn test_missing_key_maps_to_not_found() {
        let error = GetObjectError::NoSuchKey(NoSuchKey::builder().build());

        let mapped = get_object_error(error, "no such key".to_string(), "uploads", "a.jpg", 3.0);

        assert!(matches!(
            mapped,
            StorageError::NotFound { ref bucket, ref key } if bucket == "uploads" && key == "a.jpg"
        ));
    }

    #[test]
    fn test_other_get_failures_map_to_download_failed() {
        let error = GetObjectError::generic(ErrorMetadata::builder().code("AccessDenied").build());

        let mapped = get_object_error(error, "access denied".to_string(), "uploads", "a.jpg", 3.0);

        assert!(matches!(mapped, StorageError::DownloadFailed(ref m) if m == "access denied"));
    }
}
