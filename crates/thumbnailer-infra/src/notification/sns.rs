use super::{NotificationError, Notifier};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sns::error::DisplayErrorContext;
use aws_sdk_sns::Client as SnsClient;

/// Amazon SNS notifier
#[derive(Clone)]
pub struct SnsNotifier {
    client: SnsClient,
}

impl SnsNotifier {
    /// Create a new SnsNotifier
    ///
    /// # Arguments
    /// * `region` - Region override; the default provider chain is used when `None`
    /// * `endpoint_url` - Optional custom endpoint (e.g., "http://localhost:4566" for LocalStack)
    pub async fn new(region: Option<String>, endpoint_url: Option<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(ref region) = region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        let mut sns_config_builder = aws_sdk_sns::config::Builder::from(&sdk_config);
        if let Some(ref endpoint) = endpoint_url {
            sns_config_builder = sns_config_builder.endpoint_url(endpoint);
        }

        tracing::debug!(region = ?region, endpoint = ?endpoint_url, "SNS client configured");

        Self {
            client: SnsClient::from_conf(sns_config_builder.build()),
        }
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(
        &self,
        topic: &str,
        subject: &str,
        message: &str,
    ) -> Result<(), NotificationError> {
        let output = self
            .client
            .publish()
            .topic_arn(topic)
            .subject(subject)
            .message(message)
            .send()
            .await
            .map_err(|e| NotificationError::PublishFailed(DisplayErrorContext(&e).to_string()))?;

        tracing::info!(
            topic = %topic,
            subject = %subject,
            message_id = ?output.message_id(),
            "SNS publish successful"
        );

        Ok(())
    }
}
