use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use thumbnailer_infra::{NotificationError, Notifier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub topic: String,
    pub subject: String,
    pub message: String,
}

/// Notifier that keeps every publish attempt, optionally failing them
#[derive(Default)]
pub struct RecordingNotifier {
    published: Mutex<Vec<Published>>,
    fail: AtomicBool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_publishes(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    /// Attempts, including failed ones
    pub fn published(&self) -> Vec<Published> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn publish(
        &self,
        topic: &str,
        subject: &str,
        message: &str,
    ) -> Result<(), NotificationError> {
        self.published.lock().unwrap().push(Published {
            topic: topic.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        });
        if self.fail.load(Ordering::SeqCst) {
            return Err(NotificationError::PublishFailed("injected failure".to_string()));
        }
        Ok(())
    }
}
