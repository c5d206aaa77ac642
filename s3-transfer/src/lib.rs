//! Standalone S3 file-transfer tasks
//!
//! Two manual jobs run with pre-configured credentials: mirroring every
//! object under a bucket prefix into a local directory tree, and uploading a
//! single local file to a bucket key.

pub mod aws;
pub mod bucket;
pub mod paths;
