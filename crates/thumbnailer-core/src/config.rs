//! Configuration module
//!
//! Settings are read once at process start from the environment (and an
//! optional `.env` file). Service clients are built from them and injected
//! into the pipeline.

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::str::FromStr;

use crate::storage_types::StorageBackend;

const DEFAULT_GHOSTSCRIPT_PATH: &str = "gs";
const DEFAULT_SERVICE_NAME: &str = "thumbnailer";

/// Notification backend types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationBackend {
    /// Amazon SNS topics
    Sns,
    /// Log publications only (local development)
    Log,
}

impl FromStr for NotificationBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sns" => Ok(NotificationBackend::Sns),
            "log" => Ok(NotificationBackend::Log),
            _ => Err(anyhow::anyhow!("Invalid notification backend: {}", s)),
        }
    }
}

impl Display for NotificationBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            NotificationBackend::Sns => write!(f, "sns"),
            NotificationBackend::Log => write!(f, "log"),
        }
    }
}

/// Thumbnailer configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: String,
    pub service_name: String,
    pub log_format: String,
    /// Prefix under which origin copies and thumbnails are written
    pub deploy_path: String,
    // Storage configuration
    pub storage_backend: StorageBackend,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, LocalStack, etc.)
    pub s3_region: Option<String>,
    pub local_storage_path: Option<PathBuf>,
    // Notification configuration
    pub notification_backend: NotificationBackend,
    pub sns_endpoint: Option<String>,
    pub sns_region: Option<String>,
    pub topic_arn_success: Option<String>,
    pub topic_arn_error: Option<String>,
    // Rasterizer configuration
    pub ghostscript_path: PathBuf,
    pub rasterizer_timeout_secs: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let deploy_path = env::var("DEPLOY_PATH")
            .map_err(|_| anyhow::anyhow!("DEPLOY_PATH must be set"))?;

        let storage_backend = match non_empty_var("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None => StorageBackend::S3,
        };

        let notification_backend = match non_empty_var("NOTIFICATION_BACKEND") {
            Some(value) => value.parse()?,
            None => NotificationBackend::Sns,
        };

        let rasterizer_timeout_secs = match non_empty_var("RASTERIZER_TIMEOUT_SECS") {
            Some(value) => Some(value.parse::<u64>().map_err(|_| {
                anyhow::anyhow!("RASTERIZER_TIMEOUT_SECS must be a whole number of seconds")
            })?),
            None => None,
        };

        let config = Config {
            environment,
            service_name: non_empty_var("SERVICE_NAME")
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
            log_format: non_empty_var("LOG_FORMAT")
                .unwrap_or_else(|| "pretty".to_string())
                .to_lowercase(),
            deploy_path: normalize_deploy_path(&deploy_path),
            storage_backend,
            s3_endpoint: non_empty_var("S3_ENDPOINT"),
            s3_region: non_empty_var("S3_REGION"),
            local_storage_path: non_empty_var("LOCAL_STORAGE_PATH").map(PathBuf::from),
            notification_backend,
            sns_endpoint: non_empty_var("SNS_ENDPOINT"),
            sns_region: non_empty_var("SNS_REGION"),
            topic_arn_success: non_empty_var("TOPIC_ARN_SUCCESS"),
            topic_arn_error: non_empty_var("TOPIC_ARN_ERROR"),
            ghostscript_path: non_empty_var("GHOSTSCRIPT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_GHOSTSCRIPT_PATH)),
            rasterizer_timeout_secs,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.deploy_path.is_empty() {
            return Err(anyhow::anyhow!("DEPLOY_PATH must not be empty"));
        }

        match self.storage_backend {
            StorageBackend::S3 => {
                if self.s3_endpoint.is_some() && self.s3_region.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_REGION must be set when S3_ENDPOINT overrides the S3 endpoint"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH must be set when using local storage backend"
                    ));
                }
            }
        }

        if self.notification_backend == NotificationBackend::Sns {
            if self.topic_arn_success.is_none() || self.topic_arn_error.is_none() {
                return Err(anyhow::anyhow!(
                    "TOPIC_ARN_SUCCESS and TOPIC_ARN_ERROR must be set when using SNS notifications"
                ));
            }
            if self.sns_endpoint.is_some() && self.sns_region.is_none() {
                return Err(anyhow::anyhow!(
                    "SNS_REGION must be set when SNS_ENDPOINT overrides the SNS endpoint"
                ));
            }
        }

        if self.rasterizer_timeout_secs == Some(0) {
            return Err(anyhow::anyhow!(
                "RASTERIZER_TIMEOUT_SECS must be greater than zero when set"
            ));
        }

        Ok(())
    }

    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Trailing slashes would produce `//` in derived keys.
fn normalize_deploy_path(path: &str) -> String {
    path.trim().trim_end_matches('/').to_string()
}
