//! Single-file upload
//!
//! Writes one local file to a bucket key. Runs with pre-configured
//! credentials (default chain, or a named profile).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use s3_transfer::aws;
use s3_transfer::bucket::BucketClient;

#[derive(Debug, Parser)]
#[command(name = "s3-upload", about = "Upload a single file to a bucket key")]
struct Args {
    /// Local file to upload
    file: PathBuf,

    /// Bucket to upload to
    #[arg(long, env = "S3_BUCKET")]
    bucket: String,

    /// Destination key; defaults to the file name
    #[arg(long)]
    key: Option<String>,

    /// Named credentials profile
    #[arg(long, env = "AWS_PROFILE")]
    profile: Option<String>,

    /// AWS region
    #[arg(long, env = "AWS_REGION")]
    region: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let key = match &args.key {
        Some(key) => key.clone(),
        None => args
            .file
            .file_name()
            .context("File path has no file name")?
            .to_string_lossy()
            .into_owned(),
    };

    let client = aws::client(args.profile.as_deref(), args.region.clone()).await;
    let bucket = BucketClient::new(client, &args.bucket);

    bucket.upload_file(&args.file, &key).await?;
    info!(
        "Successfully uploaded {} to s3://{}/{}",
        args.file.display(),
        args.bucket,
        key
    );

    Ok(())
}
