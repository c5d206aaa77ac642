//! SQS to SNS relay function
//!
//! Drains a queue in bounded batches and republishes each batch as a single
//! notification on an SNS topic. Packaged as a Lambda handler; every
//! invocation runs one full drain and returns a summary response.

pub mod handler;
pub mod relay;
pub mod types;
