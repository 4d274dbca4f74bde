//! Thumbnailer Storage Library
//!
//! This crate provides the object storage capability used by the pipeline:
//! the `Storage` trait and implementations for S3 and the local filesystem.
//!
//! # Derived key format
//!
//! Artifacts derived from an upload live under the configured deploy path:
//!
//! - **Origin copy**: `{deploy_path}/{id}/origin.{ext}`
//! - **Thumbnail**: `{deploy_path}/{id}/thumbnail.{ext}`
//!
//! Key generation is centralized in the `keys` module so every caller agrees
//! on the layout.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use thumbnailer_core::StorageBackend;
pub use traits::{Storage, StorageError, StorageResult};
