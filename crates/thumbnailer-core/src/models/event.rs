use crate::error::PipelineError;

/// A storage-upload notification for a single object.
///
/// `key` is stored decoded: S3 delivers keys form-urlencoded, so `+` stands
/// for a space and everything else is percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadEvent {
    pub bucket: String,
    pub key: String,
}

impl UploadEvent {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Build an event from the raw bucket name and URL-encoded key of a
    /// notification record.
    pub fn from_encoded(bucket: &str, encoded_key: &str) -> Result<Self, PipelineError> {
        if bucket.is_empty() {
            return Err(PipelineError::InvalidEvent(
                "record has no bucket name".to_string(),
            ));
        }

        let key = decode_key(encoded_key)?;
        if key.is_empty() {
            return Err(PipelineError::InvalidEvent("record has no object key".to_string()));
        }

        Ok(Self::new(bucket, key))
    }
}

/// Decode an S3 event object key (`+` to space, then percent-decoding).
pub fn decode_key(encoded_key: &str) -> Result<String, PipelineError> {
    let spaced = encoded_key.replace('+', " ");
    percent_encoding::percent_decode_str(&spaced)
        .decode_utf8()
        .map(|key| key.into_owned())
        .map_err(|e| PipelineError::InvalidEvent(format!("undecodable key {}: {}", encoded_key, e)))
}
