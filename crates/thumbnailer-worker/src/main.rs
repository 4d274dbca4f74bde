//! Lambda entry point: one invocation per S3 upload notification.

use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::{json, Value};
use std::sync::Arc;
use thumbnailer_core::{Config, InvocationOutcome};
use thumbnailer_infra::{init_telemetry, TelemetryConfig};
use thumbnailer_worker::{handle_s3_event, ThumbnailPipeline, WorkerContext};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;

    init_telemetry(&TelemetryConfig::from_config(&config))
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    let context = WorkerContext::from_config(&config).await?;
    let pipeline = Arc::new(ThumbnailPipeline::new(context));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<S3Event>| {
        let pipeline = Arc::clone(&pipeline);
        async move { handle(&pipeline, event).await }
    }))
    .await
}

async fn handle(pipeline: &ThumbnailPipeline, event: LambdaEvent<S3Event>) -> Result<Value, Error> {
    let (payload, context) = event.into_parts();

    tracing::info!(
        request_id = %context.request_id,
        records = payload.records.len(),
        "Invocation received"
    );

    let outcomes = handle_s3_event(pipeline, &payload).await.map_err(|e| {
        tracing::error!(request_id = %context.request_id, error_code = e.error_code(), error = %e, "Invocation failed");
        e
    })?;

    let count = |wanted: InvocationOutcome| outcomes.iter().filter(|o| **o == wanted).count();

    Ok(json!({
        "completed": count(InvocationOutcome::Completed),
        "skipped": count(InvocationOutcome::Skipped),
        "reported": count(InvocationOutcome::Reported),
    }))
}
