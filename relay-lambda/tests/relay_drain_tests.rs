//! Integration tests for the drain loop
//!
//! These run against a LocalStack endpoint on localhost:4566 and are ignored
//! by default.

use std::sync::Arc;

use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_sns::Client as SnsClient;
use aws_sdk_sqs::Client as SqsClient;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use relay_lambda::relay::Relay;
use relay_lambda::types::environment::RelayEnvironment;

struct DrainTestContext {
    sqs_client: Arc<SqsClient>,
    sns_client: Arc<SnsClient>,
    environment: RelayEnvironment,
}

impl DrainTestContext {
    async fn new(test_name: &str) -> Self {
        let suffix = Uuid::new_v4();

        let credentials = Credentials::from_keys("test", "test", None);
        let config = aws_config::defaults(BehaviorVersion::latest())
            .endpoint_url("http://localhost:4566")
            .credentials_provider(credentials)
            .region("us-east-1")
            .load()
            .await;

        let sqs_client = Arc::new(SqsClient::new(&config));
        let sns_client = Arc::new(SnsClient::new(&config));

        let queue_url = sqs_client
            .create_queue()
            .queue_name(format!("{test_name}-{suffix}"))
            .send()
            .await
            .expect("Failed to create test queue")
            .queue_url()
            .expect("Queue URL not returned")
            .to_string();

        let topic_arn = sns_client
            .create_topic()
            .name(format!("{test_name}-{suffix}"))
            .send()
            .await
            .expect("Failed to create test topic")
            .topic_arn()
            .expect("Topic ARN not returned")
            .to_string();

        Self {
            sqs_client,
            sns_client,
            environment: RelayEnvironment {
                queue_url,
                topic_arn,
            },
        }
    }

    async fn seed(&self, body: &str) {
        self.sqs_client
            .send_message()
            .queue_url(&self.environment.queue_url)
            .message_body(body)
            .send()
            .await
            .expect("Failed to seed message");
    }

    async fn remaining_messages(&self) -> usize {
        self.sqs_client
            .receive_message()
            .queue_url(&self.environment.queue_url)
            .max_number_of_messages(10)
            .send()
            .await
            .expect("Failed to receive")
            .messages()
            .len()
    }
}

impl Drop for DrainTestContext {
    fn drop(&mut self) {
        let sqs_client = self.sqs_client.clone();
        let sns_client = self.sns_client.clone();
        let queue_url = self.environment.queue_url.clone();
        let topic_arn = self.environment.topic_arn.clone();

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                let _ = sqs_client.delete_queue().queue_url(&queue_url).send().await;
                let _ = sns_client.delete_topic().topic_arn(&topic_arn).send().await;
            });
        }
    }
}

#[tokio::test]
#[ignore = "requires LocalStack on localhost:4566"]
async fn test_drain_forwards_and_deletes_every_message() {
    let ctx = DrainTestContext::new("drain-forward").await;

    for i in 0..5 {
        ctx.seed(&json!({ "order_id": format!("order-{i}") }).to_string())
            .await;
    }

    let relay = Relay::new(
        ctx.sqs_client.clone(),
        ctx.sns_client.clone(),
        &ctx.environment,
    );

    let forwarded = relay.drain().await.expect("Drain should succeed");
    assert_eq!(forwarded.len(), 5, "Every seeded body should be forwarded");

    // Each consumed message was deleted: the queue is empty afterwards
    assert_eq!(ctx.remaining_messages().await, 0);
}

#[tokio::test]
#[ignore = "requires LocalStack on localhost:4566"]
async fn test_drain_of_empty_queue_returns_no_bodies() {
    let ctx = DrainTestContext::new("drain-empty").await;

    let relay = Relay::new(
        ctx.sqs_client.clone(),
        ctx.sns_client.clone(),
        &ctx.environment,
    );

    let forwarded = relay.drain().await.expect("Drain should succeed");
    assert!(forwarded.is_empty());
}

#[tokio::test]
#[ignore = "requires LocalStack on localhost:4566"]
async fn test_drain_leaves_undecodable_batch_in_queue() {
    let ctx = DrainTestContext::new("drain-bad-body").await;
    ctx.seed("definitely not json").await;

    let relay = Relay::new(
        ctx.sqs_client.clone(),
        ctx.sns_client.clone(),
        &ctx.environment,
    );

    let result = relay.drain().await;
    assert!(result.is_err(), "Decode failure must abort the drain");
}
