//! Messaging plumbing for the queue relay
//!
//! This crate provides the thin, typed wrappers over AWS SQS and SNS that
//! the relay function and its tests share: a generic queue for bounded
//! batch consumption and a publisher bound to a single topic.

pub mod queue;
pub mod topic;
