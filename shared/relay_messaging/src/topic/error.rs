use aws_sdk_sns::error::SdkError;
use aws_sdk_sns::operation::publish::PublishError;
use thiserror::Error;

/// Result type alias for topic operations
pub type TopicResult<T> = Result<T, TopicError>;

/// Error types for topic operations
#[derive(Error, Debug)]
pub enum TopicError {
    /// Error publishing a message to SNS
    #[error("Failed to publish message to SNS")]
    Publish(#[from] SdkError<PublishError>),
}
