//! Thumbnail pipeline
//!
//! One run per uploaded object:
//!
//! ```text
//! parse key -> fetch -> image | pdf | skip -> origin copy -> thumbnail -> notify
//! ```
//!
//! A key that does not parse stops the run before any storage call. An
//! unsupported extension stops it after the fetch. Every other run ends in
//! exactly one call to [`notify_and_cleanup`].

use crate::context::WorkerContext;
use crate::outcome::notify_and_cleanup;
use image::ImageFormat;
use std::path::PathBuf;
use thumbnailer_core::{
    ContentIdentity, InvocationOutcome, LogLevel, MediaKind, ObjectRecord, Outcome,
    PipelineError, UploadEvent,
};
use thumbnailer_processing::image::codec;
use thumbnailer_processing::{
    ImageOrientation, ImageProcessor, ScratchSpace, ThumbnailGenerator, ThumbnailSource,
};
use thumbnailer_storage::keys::{origin_key, thumbnail_key};

pub struct ThumbnailPipeline {
    ctx: WorkerContext,
    generator: ThumbnailGenerator,
}

impl ThumbnailPipeline {
    pub fn new(ctx: WorkerContext) -> Self {
        Self {
            ctx,
            generator: ThumbnailGenerator::default(),
        }
    }

    /// Process one uploaded object.
    ///
    /// Returns `Completed` once the thumbnail is stored and the source was
    /// handed to [`notify_and_cleanup`], `Skipped` for extensions outside the
    /// image and PDF families, and `Reported` for a failure that ends with the
    /// Error notification alone (see [`PipelineError::fails_invocation`]).
    #[tracing::instrument(skip(self, event), fields(bucket = %event.bucket, key = %event.key))]
    pub async fn run(&self, event: &UploadEvent) -> Result<InvocationOutcome, PipelineError> {
        let start = std::time::Instant::now();

        let identity = ContentIdentity::parse(&event.key).map_err(|e| {
            log_failure(&e);
            e
        })?;

        let object = match self.ctx.storage.get_object(&event.bucket, &event.key).await {
            Ok(object) => object,
            Err(e) => {
                return self
                    .fail(event, PipelineError::GetObjectFailed(e.to_string()))
                    .await
            }
        };

        tracing::info!(
            id = %identity.id,
            extension = %identity.extension,
            content_type = ?object.content_type,
            size_bytes = object.size_bytes(),
            "Source object fetched"
        );

        let result = match identity.media_kind() {
            MediaKind::Image => self.process_image(event, &identity, object).await,
            MediaKind::Pdf => self.process_pdf(event, &identity, object).await,
            MediaKind::Unsupported => {
                tracing::info!(extension = %identity.extension, "Not a thumbnail target; skipped");
                return Ok(InvocationOutcome::Skipped);
            }
        };

        if let Err(e) = result {
            return self.fail(event, e).await;
        }

        notify_and_cleanup(
            self.ctx.storage.as_ref(),
            self.ctx.notifier.as_ref(),
            &self.ctx.topics,
            event,
            Outcome::Complete,
        )
        .await;

        tracing::info!(
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Thumbnail pipeline completed"
        );
        Ok(InvocationOutcome::Completed)
    }

    async fn fail(
        &self,
        event: &UploadEvent,
        error: PipelineError,
    ) -> Result<InvocationOutcome, PipelineError> {
        log_failure(&error);

        if error.is_notified() {
            notify_and_cleanup(
                self.ctx.storage.as_ref(),
                self.ctx.notifier.as_ref(),
                &self.ctx.topics,
                event,
                Outcome::Error,
            )
            .await;
        }

        if error.fails_invocation() {
            Err(error)
        } else {
            Ok(InvocationOutcome::Reported)
        }
    }

    async fn process_image(
        &self,
        event: &UploadEvent,
        identity: &ContentIdentity,
        object: ObjectRecord,
    ) -> Result<(), PipelineError> {
        let ObjectRecord { data, content_type } = object;

        let metadata = ImageProcessor::extract_metadata(&data)
            .map_err(|e| PipelineError::ResizeFailed(e.to_string()))?;
        tracing::debug!(
            width = metadata.width,
            height = metadata.height,
            format = %metadata.format,
            exif_orientation = ?metadata.exif_orientation,
            "Source image inspected"
        );

        let decoded =
            ImageProcessor::decode(&data).map_err(|e| PipelineError::ResizeFailed(e.to_string()))?;

        // JPEG origins are stored upright and re-encoded; other formats verbatim.
        let (origin, image) = if MediaKind::needs_orientation_fix(&identity.extension) {
            let orientation = metadata.exif_orientation.unwrap_or(1);
            let upright = ImageOrientation::apply_orientation(decoded, orientation);
            let encoded = codec::encode(&upright, ImageFormat::Jpeg)
                .map_err(|e| PipelineError::ResizeFailed(e.to_string()))?;
            (encoded, upright)
        } else {
            (data, decoded)
        };

        self.write_origin(event, identity, origin, content_type.as_deref())
            .await?;

        self.write_thumbnail(
            event,
            identity,
            ThumbnailSource::Image(image),
            identity.thumbnail_extension(),
        )
        .await
    }

    async fn process_pdf(
        &self,
        event: &UploadEvent,
        identity: &ContentIdentity,
        object: ObjectRecord,
    ) -> Result<(), PipelineError> {
        let ObjectRecord { data, content_type } = object;

        // Staged before the origin write takes ownership of the bytes.
        let staged = stage_pdf(&data).await;

        self.write_origin(event, identity, data, content_type.as_deref())
            .await?;

        let source = match &staged {
            Ok((_, input)) => match self.ctx.rasterizer.rasterize_first_page(input).await {
                Ok(page) => ThumbnailSource::File(page),
                Err(e) => {
                    tracing::warn!(error = %e, "PDF rasterization failed; using placeholder icon");
                    ThumbnailSource::Placeholder
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "Could not stage PDF for rasterization; using placeholder icon");
                ThumbnailSource::Placeholder
            }
        };

        // `staged` owns the scratch directory and must outlive the load.
        let result = self
            .write_thumbnail(event, identity, source, identity.thumbnail_extension())
            .await;
        drop(staged);
        result
    }

    async fn write_origin(
        &self,
        event: &UploadEvent,
        identity: &ContentIdentity,
        data: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<(), PipelineError> {
        let key = origin_key(&self.ctx.deploy_path, identity);
        let size = data.len();

        self.ctx
            .storage
            .put_object(&event.bucket, &key, data, content_type)
            .await
            .map_err(|e| PipelineError::OriginWriteFailed(e.to_string()))?;

        tracing::info!(origin_key = %key, size_bytes = size, "Origin copy written");
        Ok(())
    }

    async fn write_thumbnail(
        &self,
        event: &UploadEvent,
        identity: &ContentIdentity,
        source: ThumbnailSource,
        extension: &str,
    ) -> Result<(), PipelineError> {
        let image = source
            .load()
            .await
            .map_err(|e| PipelineError::ResizeFailed(e.to_string()))?;
        let format = codec::format_for_extension(extension)
            .map_err(|e| PipelineError::ResizeFailed(e.to_string()))?;
        let thumbnail = self
            .generator
            .generate(&image, format)
            .map_err(|e| PipelineError::ResizeFailed(e.to_string()))?;

        let key = thumbnail_key(&self.ctx.deploy_path, identity, extension);
        let size = thumbnail.data.len();

        self.ctx
            .storage
            .put_object(&event.bucket, &key, thumbnail.data, None)
            .await
            .map_err(|e| PipelineError::ThumbnailWriteFailed(e.to_string()))?;

        tracing::info!(
            thumbnail_key = %key,
            width = thumbnail.width,
            height = thumbnail.height,
            size_bytes = size,
            "Thumbnail written"
        );
        Ok(())
    }
}

fn log_failure(error: &PipelineError) {
    match error.log_level() {
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_code = error.error_code(), "Thumbnail pipeline rejected input")
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_code = error.error_code(), "Thumbnail pipeline failed")
        }
    }
}

async fn stage_pdf(data: &[u8]) -> std::io::Result<(ScratchSpace, PathBuf)> {
    let scratch = ScratchSpace::new()?;
    let input = scratch.write_input(data).await?;
    Ok((scratch, input))
}
