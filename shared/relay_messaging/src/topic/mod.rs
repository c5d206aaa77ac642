//! Topic operations for the relay
//!
//! Publishes payloads to a single AWS SNS topic. Fan-out to subscribers is
//! entirely the service's concern; this module only owns the publish call.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

mod error;

use aws_sdk_sns::Client as SnsClient;
use std::sync::Arc;

pub use error::{TopicError, TopicResult};

/// SNS publisher bound to a single topic ARN
pub struct SnsTopic {
    sns_client: Arc<SnsClient>,
    topic_arn: String,
}

impl SnsTopic {
    /// Creates a new topic publisher
    ///
    /// # Arguments
    ///
    /// * `sns_client` - Pre-configured SNS client
    /// * `topic_arn` - ARN of the topic to publish to
    #[must_use]
    pub fn new(sns_client: Arc<SnsClient>, topic_arn: impl Into<String>) -> Self {
        Self {
            sns_client,
            topic_arn: topic_arn.into(),
        }
    }

    /// Publishes one payload to the topic
    ///
    /// # Returns
    ///
    /// The message ID assigned by SNS, or an empty string
    ///
    /// # Errors
    ///
    /// Returns `TopicError` if the publish operation fails
    pub async fn publish(&self, message: &str) -> TopicResult<String> {
        let result = self
            .sns_client
            .publish()
            .topic_arn(&self.topic_arn)
            .message(message)
            .send()
            .await?;

        Ok(result
            .message_id()
            .map(std::string::ToString::to_string)
            .unwrap_or_default())
    }
}
