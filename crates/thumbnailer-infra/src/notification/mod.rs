//! Outcome notifications
//!
//! The pipeline reports every terminal outcome to one of two destinations
//! (success or error). Delivery is fire-and-forget: callers log failures and
//! move on.

mod log_only;
#[cfg(feature = "notification-sns")]
mod sns;

pub use log_only::LogNotifier;
#[cfg(feature = "notification-sns")]
pub use sns::SnsNotifier;

use async_trait::async_trait;
use std::sync::Arc;
use thumbnailer_core::{Config, NotificationBackend, Outcome};

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Publish failed: {0}")]
    PublishFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Publishes a message to a named destination.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(
        &self,
        topic: &str,
        subject: &str,
        message: &str,
    ) -> Result<(), NotificationError>;
}

/// Destinations selected by outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationTopics {
    pub success: String,
    pub error: String,
}

impl NotificationTopics {
    pub fn new(success: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: success.into(),
            error: error.into(),
        }
    }

    /// Topics from configuration. Unset topics fall back to the outcome
    /// subject, which is only meaningful for the log backend (SNS
    /// configuration is validated to carry both ARNs).
    pub fn from_config(config: &Config) -> Self {
        Self {
            success: config
                .topic_arn_success
                .clone()
                .unwrap_or_else(|| Outcome::Complete.subject().to_string()),
            error: config
                .topic_arn_error
                .clone()
                .unwrap_or_else(|| Outcome::Error.subject().to_string()),
        }
    }

    pub fn topic_for(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::Complete => &self.success,
            Outcome::Error => &self.error,
        }
    }
}

/// Create a notifier based on configuration
pub async fn create_notifier(config: &Config) -> Result<Arc<dyn Notifier>, NotificationError> {
    match config.notification_backend {
        #[cfg(feature = "notification-sns")]
        NotificationBackend::Sns => {
            let notifier =
                SnsNotifier::new(config.sns_region.clone(), config.sns_endpoint.clone()).await;
            Ok(Arc::new(notifier))
        }

        #[cfg(not(feature = "notification-sns"))]
        NotificationBackend::Sns => Err(NotificationError::ConfigError(
            "SNS notifications not available (notification-sns feature not enabled)".to_string(),
        )),

        NotificationBackend::Log => Ok(Arc::new(LogNotifier)),
    }
}
