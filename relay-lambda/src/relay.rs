//! Queue drain loop
//!
//! Repeatedly fetches a bounded batch from the queue, aggregates the decoded
//! bodies into one JSON array, publishes that array as a single notification,
//! and only then acknowledges the consumed messages. Terminates when a fetch
//! comes back empty.

use std::sync::Arc;

use aws_sdk_sns::Client as SnsClient;
use aws_sdk_sqs::Client as SqsClient;
use relay_messaging::queue::{QueueConfig, QueueError, SqsQueue};
use relay_messaging::topic::{SnsTopic, TopicError};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::types::environment::RelayEnvironment;

/// Maximum messages fetched per poll
const MAX_BATCH_SIZE: i32 = 3;
/// Long-poll wait per fetch, in seconds
const RECEIVE_WAIT_SECONDS: i32 = 3;

/// Error types for a drain run
///
/// Any failure aborts the invocation: messages of the failed batch were not
/// acknowledged and the queue redelivers them after the visibility timeout.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Queue receive, decode, or delete failure
    #[error(transparent)]
    Queue(#[from] QueueError),

    /// Topic publish failure
    #[error(transparent)]
    Topic(#[from] TopicError),

    /// Batch aggregation failure
    #[error("Failed to encode batch payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Relay from one SQS queue to one SNS topic
pub struct Relay {
    queue: SqsQueue<Value>,
    topic: SnsTopic,
}

impl Relay {
    /// Creates a relay over pre-configured clients
    #[must_use]
    pub fn new(
        sqs_client: Arc<SqsClient>,
        sns_client: Arc<SnsClient>,
        environment: &RelayEnvironment,
    ) -> Self {
        let config = QueueConfig {
            queue_url: environment.queue_url.clone(),
            max_messages: MAX_BATCH_SIZE,
            wait_time_seconds: RECEIVE_WAIT_SECONDS,
        };

        Self {
            queue: SqsQueue::new(sqs_client, config),
            topic: SnsTopic::new(sns_client, environment.topic_arn.clone()),
        }
    }

    /// Drains the queue until a fetch returns no messages
    ///
    /// Returns every message body forwarded during this run, in consumption
    /// order. An empty queue yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns `RelayError` on the first receive, decode, publish, or delete
    /// failure. Messages are acknowledged only after their batch published
    /// successfully, so a failed batch stays on the queue.
    pub async fn drain(&self) -> Result<Vec<Value>, RelayError> {
        let mut forwarded = Vec::new();

        loop {
            let batch = self.queue.poll_messages().await?;
            if batch.is_empty() {
                info!("No messages in the queue");
                break;
            }

            let bodies: Vec<Value> = batch.iter().map(|message| message.body.clone()).collect();
            let payload = serde_json::to_string_pretty(&bodies)?;

            self.topic.publish(&payload).await?;
            info!("Result message = \n{}", payload);

            for message in &batch {
                self.queue.ack_message(&message.receipt_handle).await?;
            }

            forwarded.extend(bodies);
        }

        Ok(forwarded)
    }
}
