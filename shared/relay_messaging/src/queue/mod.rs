//! Queue operations for the relay
//!
//! This module provides functionality for interacting with AWS SQS standard
//! queues: bounded batch retrieval, acknowledgment, and sending.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Error types for queue operations
pub mod error;
/// Generic SQS queue implementation
pub mod sqs_queue;
/// Common types for queue operations
pub mod types;

pub use error::{QueueError, QueueResult};
pub use sqs_queue::SqsQueue;
pub use types::{QueueConfig, QueueMessage};
