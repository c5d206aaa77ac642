//! Error types for bucket operations

use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::{
    get_object::GetObjectError, list_objects_v2::ListObjectsV2Error, put_object::PutObjectError,
};
use thiserror::Error;

/// Result type for bucket operations
pub type BucketResult<T> = Result<T, BucketError>;

/// Errors that can occur during bucket operations
#[derive(Error, Debug)]
pub enum BucketError {
    /// Error listing objects under a prefix
    #[error("Failed to list objects in bucket")]
    ListObjects(#[from] SdkError<ListObjectsV2Error>),

    /// Error downloading an object
    #[error("Failed to download object")]
    GetObject(#[from] SdkError<GetObjectError>),

    /// Error uploading an object
    #[error("Failed to upload object")]
    PutObject(#[from] SdkError<PutObjectError>),

    /// Error streaming an object body
    #[error("Failed to read object body: {0}")]
    Body(String),

    /// Local filesystem error
    #[error("Local file error: {0}")]
    Io(#[from] std::io::Error),
}
