//! Worker context
//!
//! Service clients are created once at process start and shared by every
//! invocation the process handles.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use thumbnailer_core::Config;
use thumbnailer_infra::{create_notifier, NotificationTopics, Notifier};
use thumbnailer_processing::{GhostscriptRasterizer, PdfRasterizer};
use thumbnailer_storage::{create_storage, Storage};

/// Capabilities the pipeline is allowed to use
#[derive(Clone)]
pub struct WorkerContext {
    pub storage: Arc<dyn Storage>,
    pub notifier: Arc<dyn Notifier>,
    pub rasterizer: Arc<dyn PdfRasterizer>,
    /// Prefix for origin copies and thumbnails, without a trailing `/`
    pub deploy_path: String,
    pub topics: NotificationTopics,
}

impl WorkerContext {
    pub fn new(
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
        rasterizer: Arc<dyn PdfRasterizer>,
        deploy_path: impl Into<String>,
        topics: NotificationTopics,
    ) -> Self {
        Self {
            storage,
            notifier,
            rasterizer,
            deploy_path: deploy_path.into(),
            topics,
        }
    }

    /// Build the configured storage, notification and rasterizer backends
    pub async fn from_config(config: &Config) -> Result<Self> {
        let storage = create_storage(config)
            .await
            .context("Failed to initialize storage backend")?;

        let notifier = create_notifier(config)
            .await
            .context("Failed to initialize notification backend")?;

        let mut rasterizer = GhostscriptRasterizer::new(&config.ghostscript_path);
        if let Some(secs) = config.rasterizer_timeout_secs {
            rasterizer = rasterizer.with_timeout(Duration::from_secs(secs));
        }

        tracing::info!(
            storage_backend = %config.storage_backend,
            notification_backend = %config.notification_backend,
            ghostscript = %config.ghostscript_path.display(),
            rasterizer_timeout_secs = ?config.rasterizer_timeout_secs,
            deploy_path = %config.deploy_path,
            "Worker context initialized"
        );

        Ok(Self::new(
            storage,
            notifier,
            Arc::new(rasterizer),
            config.deploy_path.clone(),
            NotificationTopics::from_config(config),
        ))
    }
}
