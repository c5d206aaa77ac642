//! Recursive folder download
//!
//! Mirrors every object under a bucket prefix into a local directory tree.
//! Runs with pre-configured credentials (default chain, or a named profile).

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use s3_transfer::aws;
use s3_transfer::bucket::BucketClient;

#[derive(Debug, Parser)]
#[command(name = "s3-download", about = "Mirror a bucket prefix into a local directory")]
struct Args {
    /// Bucket to download from
    #[arg(long, env = "S3_BUCKET")]
    bucket: String,

    /// Key prefix to mirror
    #[arg(long, env = "S3_PREFIX", default_value = "")]
    prefix: String,

    /// Local destination root
    #[arg(long, default_value = ".")]
    dest: PathBuf,

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

    let client = aws::client(args.profile.as_deref(), args.region.clone()).await;
    let bucket = BucketClient::new(client, &args.bucket);

    let downloaded = bucket.download_prefix(&args.prefix, &args.dest).await?;
    info!(
        "Mirrored {} objects from s3://{}/{} into {}",
        downloaded,
        args.bucket,
        args.prefix,
        args.dest.display()
    );

    Ok(())
}
