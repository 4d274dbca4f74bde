//! Test helpers: in-memory collaborators and a pipeline wired to them.
//!
//! Run from workspace root: `cargo test -p thumbnailer-worker`.

#![allow(dead_code)]

pub mod fixtures;
pub mod notifier;
pub mod rasterizer;
pub mod storage;

use notifier::RecordingNotifier;
use std::sync::Arc;
use storage::MockStorage;
use thumbnailer_infra::NotificationTopics;
use thumbnailer_processing::PdfRasterizer;
use thumbnailer_worker::{ThumbnailPipeline, WorkerContext};

pub const BUCKET: &str = "uploads";
pub const DEPLOY_PATH: &str = "deploy";
pub const TOPIC_SUCCESS: &str = "arn:aws:sns:ap-northeast-1:000000000000:thumbnail-ok";
pub const TOPIC_ERROR: &str = "arn:aws:sns:ap-northeast-1:000000000000:thumbnail-ng";

/// Pipeline plus handles on its fakes
pub struct TestWorker {
    pub pipeline: ThumbnailPipeline,
    pub storage: Arc<MockStorage>,
    pub notifier: Arc<RecordingNotifier>,
}

pub fn setup_worker(rasterizer: Arc<dyn PdfRasterizer>) -> TestWorker {
    let storage = Arc::new(MockStorage::new());
    let notifier = Arc::new(RecordingNotifier::new());

    let context = WorkerContext::new(
        storage.clone(),
        notifier.clone(),
        rasterizer,
        DEPLOY_PATH,
        NotificationTopics::new(TOPIC_SUCCESS, TOPIC_ERROR),
    );

    TestWorker {
        pipeline: ThumbnailPipeline::new(context),
        storage,
        notifier,
    }
}

/// Worker whose rasterizer always fails
pub fn setup_default_worker() -> TestWorker {
    setup_worker(Arc::new(rasterizer::FailingRasterizer::default()))
}
