//! Thumbnailer Infrastructure Library
//!
//! Shared infrastructure for the thumbnailer binaries:
//! - Telemetry initialization (tracing subscriber)
//! - Outcome notifications (SNS topics, or log-only for development)

#[cfg(feature = "observability-basic")]
pub mod telemetry;

pub mod notification;

// Re-export commonly used types
#[cfg(feature = "observability-basic")]
pub use telemetry::{init_telemetry, TelemetryConfig};

pub use notification::{
    create_notifier, LogNotifier, NotificationError, NotificationTopics, Notifier,
};

#[cfg(feature = "notification-sns")]
pub use notification::SnsNotifier;
