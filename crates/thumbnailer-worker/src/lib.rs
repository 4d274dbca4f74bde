//! Thumbnailer Worker
//!
//! Runs the thumbnail pipeline for storage-upload notifications:
//! - `pipeline`: the per-object workflow (parse, fetch, origin copy, thumbnail)
//! - `outcome`: source deletion and outcome notification
//! - `handler`: adapter from S3 event notifications
//! - `context`: service clients built once per process

pub mod context;
pub mod handler;
pub mod outcome;
pub mod pipeline;

pub use context::WorkerContext;
pub use handler::handle_s3_event;
pub use outcome::{notify_and_cleanup, Delivery};
pub use pipeline::ThumbnailPipeline;
