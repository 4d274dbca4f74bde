//! Error types module
//!
//! `PipelineError` is the terminal failure of one pipeline run. Every variant
//! except `ExtensionNotFound` and `InvalidEvent` is raised after the source
//! object was fetched (or its fetch attempted) and is therefore paired with an
//! Error notification by the worker.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Input the pipeline refuses to touch
    Warn,
    /// Failure of a storage, decode or encode step
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("extension not found: {0}")]
    ExtensionNotFound(String),

    #[error("invalid event: {0}")]
    InvalidEvent(String),

    #[error("get object failed: {0}")]
    GetObjectFailed(String),

    #[error("copy object failed: {0}")]
    OriginWriteFailed(String),

    #[error("resize failed: {0}")]
    ResizeFailed(String),

    #[error("error put object: {0}")]
    ThumbnailWriteFailed(String),
}

impl PipelineError {
    /// Machine-readable error code (e.g., "GET_OBJECT_FAILED")
    pub fn error_code(&self) -> &'static str {
        match self {
            PipelineError::ExtensionNotFound(_) => "EXTENSION_NOT_FOUND",
            PipelineError::InvalidEvent(_) => "INVALID_EVENT",
            PipelineError::GetObjectFailed(_) => "GET_OBJECT_FAILED",
            PipelineError::OriginWriteFailed(_) => "ORIGIN_WRITE_FAILED",
            PipelineError::ResizeFailed(_) => "RESIZE_FAILED",
            PipelineError::ThumbnailWriteFailed(_) => "THUMBNAIL_WRITE_FAILED",
        }
    }

    /// Whether this failure is reported through the Error notification.
    ///
    /// Malformed input is rejected before any storage call and never cleaned up.
    pub fn is_notified(&self) -> bool {
        !matches!(
            self,
            PipelineError::ExtensionNotFound(_) | PipelineError::InvalidEvent(_)
        )
    }

    pub fn log_level(&self) -> LogLevel {
        if self.is_notified() {
            LogLevel::Error
        } else {
            LogLevel::Warn
        }
    }

    /// Whether the invocation itself is reported as failed.
    ///
    /// An origin-write failure ends with the Error notification alone: the
    /// source is already deleted, so a redelivered event could only fail the
    /// fetch and publish a second Error.
    pub fn fails_invocation(&self) -> bool {
        !matches!(self, PipelineError::OriginWriteFailed(_))
    }
}
