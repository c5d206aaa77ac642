//! Generic SQS queue implementation
//!
//! This module provides a generic queue implementation that can be used
//! with any JSON message type. Retrieval is bounded by the configured batch
//! size and long-poll wait; deletion is a separate, explicit acknowledgment
//! so that a message is only removed after its consumer has finished with it.

use crate::queue::{
    error::{QueueError, QueueResult},
    types::{QueueConfig, QueueMessage},
};
use aws_sdk_sqs::Client as SqsClient;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Generic SQS queue for handling any JSON message type
pub struct SqsQueue<T> {
    sqs_client: Arc<SqsClient>,
    config: QueueConfig,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> SqsQueue<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    /// Creates a new generic SQS queue
    ///
    /// # Arguments
    ///
    /// * `sqs_client` - Pre-configured SQS client
    /// * `config` - Queue configuration including URL and poll parameters
    #[must_use]
    pub const fn new(sqs_client: Arc<SqsClient>, config: QueueConfig) -> Self {
        Self {
            sqs_client,
            config,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Sends a message to the queue
    ///
    /// # Arguments
    ///
    /// * `message` - The message to send
    ///
    /// # Returns
    ///
    /// The message ID if successful or an empty string
    ///
    /// # Errors
    ///
    /// Returns `QueueError` if the send operation fails
    pub async fn send_message(&self, message: &T) -> QueueResult<String> {
        // Serialize the message
        let body = serde_json::to_string(message)?;

        // Send to SQS
        let result = self
            .sqs_client
            .send_message()
            .queue_url(&self.config.queue_url)
            .message_body(body)
            .send()
            .await?;

        Ok(result
            .message_id()
            .map(std::string::ToString::to_string)
            .unwrap_or_default())
    }

    /// Polls one batch of messages from the queue
    ///
    /// Issues a single `ReceiveMessage` call bounded by the configured batch
    /// size and wait time. An empty result means the queue had nothing to
    /// deliver within the wait window.
    ///
    /// # Returns
    ///
    /// A vector of decoded messages with metadata
    ///
    /// # Errors
    ///
    /// Returns `QueueError` if the poll operation fails or if any received
    /// body cannot be decoded as `T`. A decode failure aborts the batch: the
    /// affected messages stay in the queue and reappear after their
    /// visibility timeout expires.
    pub async fn poll_messages(&self) -> QueueResult<Vec<QueueMessage<T>>> {
        // Receive messages from SQS
        let result = self
            .sqs_client
            .receive_message()
            .queue_url(&self.config.queue_url)
            .max_number_of_messages(self.config.max_messages)
            .wait_time_seconds(self.config.wait_time_seconds)
            .send()
            .await?;

        // Parse messages
        let mut messages = Vec::new();
        for msg in result.messages() {
            let (Some(body), Some(receipt_handle), Some(message_id)) =
                (msg.body(), msg.receipt_handle(), msg.message_id())
            else {
                return Err(QueueError::InvalidMessage(
                    "received message without body or receipt handle".to_string(),
                ));
            };

            let parsed = serde_json::from_str::<T>(body).map_err(|e| {
                tracing::error!("Failed to deserialize message {}: {}", message_id, e);
                QueueError::Deserialization(format!("message {message_id}: {e}"))
            })?;

            messages.push(QueueMessage {
                body: parsed,
                receipt_handle: receipt_handle.to_string(),
                message_id: message_id.to_string(),
            });
        }

        Ok(messages)
    }

    /// Acknowledges receipt of a message by deleting it from the queue
    ///
    /// # Arguments
    ///
    /// * `receipt_handle` - The receipt handle from the received message
    ///
    /// # Errors
    ///
    /// Returns `QueueError` if the acknowledgment fails
    pub async fn ack_message(&self, receipt_handle: &str) -> QueueResult<()> {
        self.sqs_client
            .delete_message()
            .queue_url(&self.config.queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await?;

        Ok(())
    }
}
