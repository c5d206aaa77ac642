//! S3 bucket operations for the transfer tasks

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

mod client;
mod error;

pub use client::BucketClient;
pub use error::{BucketError, BucketResult};
