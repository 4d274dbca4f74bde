//! Run the thumbnail pipeline for a single stored object using the
//! configured backends (set `STORAGE_BACKEND=local` and
//! `NOTIFICATION_BACKEND=log` for a fully local run).

use anyhow::{Context, Result};
use clap::Parser;
use thumbnailer_core::{Config, UploadEvent};
use thumbnailer_infra::{init_telemetry, TelemetryConfig};
use thumbnailer_worker::{ThumbnailPipeline, WorkerContext};

#[derive(Parser, Debug)]
#[command(name = "process_object")]
#[command(about = "Create the origin copy and thumbnail for one uploaded object")]
struct Args {
    /// Bucket holding the object
    #[arg(long)]
    bucket: String,

    /// Object key, URL-encoded as in S3 event notifications
    key: String,

    /// Use KEY as-is instead of URL-decoding it
    #[arg(long)]
    raw_key: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;

    init_telemetry(&TelemetryConfig::from_config(&config))
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    let event = if args.raw_key {
        UploadEvent::new(args.bucket, args.key)
    } else {
        UploadEvent::from_encoded(&args.bucket, &args.key)?
    };

    let context = WorkerContext::from_config(&config).await?;
    let outcome = ThumbnailPipeline::new(context)
        .run(&event)
        .await
        .with_context(|| format!("Failed to process {}/{}", event.bucket, event.key))?;

    println!(
        "{}",
        serde_json::json!({
            "bucket": event.bucket,
            "key": event.key,
            "outcome": format!("{:?}", outcome),
        })
    );
    Ok(())
}
