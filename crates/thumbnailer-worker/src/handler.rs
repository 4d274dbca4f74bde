//! S3 event adapter

use crate::pipeline::ThumbnailPipeline;
use aws_lambda_events::event::s3::{S3Event, S3EventRecord};
use thumbnailer_core::{InvocationOutcome, PipelineError, UploadEvent};

/// Build an upload event from one notification record, decoding its key.
pub fn upload_event(record: &S3EventRecord) -> Result<UploadEvent, PipelineError> {
    let bucket = record.s3.bucket.name.as_deref().unwrap_or_default();
    let key = record.s3.object.key.as_deref().unwrap_or_default();
    UploadEvent::from_encoded(bucket, key)
}

/// Run the pipeline for every record of `event`, one after another.
///
/// A failing record does not stop the ones after it. The first failure is
/// returned once all records have been processed.
pub async fn handle_s3_event(
    pipeline: &ThumbnailPipeline,
    event: &S3Event,
) -> Result<Vec<InvocationOutcome>, PipelineError> {
    let mut outcomes = Vec::with_capacity(event.records.len());
    let mut first_error = None;

    for (index, record) in event.records.iter().enumerate() {
        let result = match upload_event(record) {
            Ok(upload) => pipeline.run(&upload).await,
            Err(e) => {
                tracing::warn!(record = index, error = %e, "Skipping malformed S3 record");
                Err(e)
            }
        };

        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => {
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(outcomes),
    }
}
