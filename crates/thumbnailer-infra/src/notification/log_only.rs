use super::{NotificationError, Notifier};
use async_trait::async_trait;

/// Notifier that only logs publications (local development)
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn publish(
        &self,
        topic: &str,
        subject: &str,
        message: &str,
    ) -> Result<(), NotificationError> {
        tracing::info!(
            topic = %topic,
            subject = %subject,
            message = %message,
            "Notification published (log backend)"
        );
        Ok(())
    }
}
