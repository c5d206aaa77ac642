//! Environment configuration for the relay function

use anyhow::{Context, Result};
use std::env;

/// Queue and topic identifiers resolved from the process environment
#[derive(Debug, Clone)]
pub struct RelayEnvironment {
    /// URL of the queue to drain
    pub queue_url: String,
    /// ARN of the topic to publish batches to
    pub topic_arn: String,
}

impl RelayEnvironment {
    /// Reads `SQS_QUEUE_URL` and `SNS_TOPIC_ARN` from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is not set
    pub fn from_env() -> Result<Self> {
        let queue_url =
            env::var("SQS_QUEUE_URL").context("SQS_QUEUE_URL environment variable not set")?;
        let topic_arn =
            env::var("SNS_TOPIC_ARN").context("SNS_TOPIC_ARN environment variable not set")?;

        Ok(Self {
            queue_url,
            topic_arn,
        })
    }
}
