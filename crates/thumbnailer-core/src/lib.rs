//! Thumbnailer Core Library
//!
//! Domain types, key parsing, configuration and the error taxonomy shared by
//! every thumbnailer crate.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{Config, NotificationBackend};
pub use error::{LogLevel, PipelineError};
pub use models::{ContentIdentity, InvocationOutcome, MediaKind, ObjectRecord, Outcome, UploadEvent};
pub use storage_types::StorageBackend;
