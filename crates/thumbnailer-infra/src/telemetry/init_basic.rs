use thumbnailer_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "thumbnailer=info,thumbnailer_worker=info,thumbnailer_processing=info,thumbnailer_storage=info,thumbnailer_infra=info";

/// Settings for the global tracing subscriber
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub service_name: String,
    pub environment: String,
    /// Emit one JSON object per line (CloudWatch friendly) instead of the pretty format
    pub json: bool,
}

impl TelemetryConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            service_name: config.service_name.clone(),
            environment: config.environment.clone(),
            json: config.json_logs(),
        }
    }
}

/// Initialize tracing
///
/// `RUST_LOG` overrides the default filter. Fails if a global subscriber is
/// already installed.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_current_span(true)
                    .with_target(true),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()?;
    }

    tracing::info!(
        service = %config.service_name,
        environment = %config.environment,
        json = config.json,
        "Tracing initialized"
    );
    Ok(())
}
