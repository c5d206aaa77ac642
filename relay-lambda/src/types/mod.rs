//! Shared types for the relay function

pub mod environment;
