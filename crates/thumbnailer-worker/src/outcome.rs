//! Terminal step of every run that got past the fetch: delete the source
//! object, then report the outcome.

use thumbnailer_core::{Outcome, UploadEvent};
use thumbnailer_infra::{NotificationTopics, Notifier};
use thumbnailer_storage::Storage;

/// What happened to the outcome notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Published,
    /// Publish was attempted and failed. Logged only.
    PublishFailed,
    /// The source could not be deleted, so nothing was published.
    SourceNotDeleted,
}

/// Delete the source object and publish `outcome` for it.
///
/// Publishing depends on the delete: when the delete fails the notification
/// is skipped entirely. Neither step is retried and neither failure is
/// returned to the caller.
pub async fn notify_and_cleanup(
    storage: &dyn Storage,
    notifier: &dyn Notifier,
    topics: &NotificationTopics,
    event: &UploadEvent,
    outcome: Outcome,
) -> Delivery {
    if let Err(e) = storage.delete_object(&event.bucket, &event.key).await {
        tracing::error!(
            error = %e,
            bucket = %event.bucket,
            key = %event.key,
            outcome = %outcome,
            "Failed to delete source object; outcome notification skipped"
        );
        return Delivery::SourceNotDeleted;
    }

    let topic = topics.topic_for(outcome);
    match notifier.publish(topic, outcome.subject(), &event.key).await {
        Ok(()) => {
            tracing::info!(
                topic = %topic,
                subject = %outcome.subject(),
                key = %event.key,
                "Outcome notification published"
            );
            Delivery::Published
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                topic = %topic,
                subject = %outcome.subject(),
                key = %event.key,
                "Failed to publish outcome notification"
            );
            Delivery::PublishFailed
        }
    }
}
