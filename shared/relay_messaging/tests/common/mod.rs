//! Messaging test setup utilities

#![allow(dead_code)]

use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_sns::Client as SnsClient;
use aws_sdk_sqs::Client as SqsClient;
use std::sync::Arc;
use uuid::Uuid;

/// Test context that provides SQS/SNS clients plus a unique queue and topic
pub struct MessagingTestContext {
    pub sqs_client: Arc<SqsClient>,
    pub sns_client: Arc<SnsClient>,
    pub queue_url: String,
    pub topic_arn: String,
}

impl MessagingTestContext {
    /// Creates a new test context with a unique standard queue and topic
    pub async fn new(test_name: &str) -> Self {
        let suffix = Uuid::new_v4();
        let queue_name = format!("{test_name}-{suffix}");
        let topic_name = format!("{test_name}-{suffix}");

        // Setup LocalStack clients with hardcoded credentials for CI
        let credentials = Credentials::from_keys(
            "test", // AWS_ACCESS_KEY_ID
            "test", // AWS_SECRET_ACCESS_KEY
            None,   // no session token
        );

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
            .queue_name(&queue_name)
            .send()
            .await
            .expect("Failed to create test queue")
            .queue_url()
            .expect("Queue URL not returned")
            .to_string();

        let topic_arn = sns_client
            .create_topic()
            .name(&topic_name)
            .send()
            .await
            .expect("Failed to create test topic")
            .topic_arn()
            .expect("Topic ARN not returned")
            .to_string();

        Self {
            sqs_client,
            sns_client,
            queue_url,
            topic_arn,
        }
    }
}

impl Drop for MessagingTestContext {
    fn drop(&mut self) {
        // Clean up the queue and topic
        let sqs_client = self.sqs_client.clone();
        let sns_client = self.sns_client.clone();
        let queue_url = self.queue_url.clone();
        let topic_arn = self.topic_arn.clone();

        let handle = tokio::runtime::Handle::try_current();
        if let Ok(handle) = handle {
            handle.spawn(async move {
                let _ = sqs_client.delete_queue().queue_url(&queue_url).send().await;
                let _ = sns_client.delete_topic().topic_arn(&topic_arn).send().await;
            });
        }
    }
}
