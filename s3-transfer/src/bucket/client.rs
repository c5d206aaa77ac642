//! S3 bucket client implementation

use std::path::Path;

use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use tracing::{debug, info};

use crate::paths;

use super::{BucketError, BucketResult};

/// S3 bucket client for the transfer operations
pub struct BucketClient {
    client: Client,
    bucket_name: String,
}

impl BucketClient {
    /// Creates a new bucket client over a pre-configured S3 client
    #[must_use]
    pub fn new(client: Client, bucket_name: impl Into<String>) -> Self {
        Self {
            client,
            bucket_name: bucket_name.into(),
        }
    }

    /// Mirrors every object under `prefix` into `dest_root`
    ///
    /// Pages through the bucket listing and downloads objects sequentially,
    /// one at a time, recreating the relative directory structure beneath
    /// the destination root. Folder placeholder keys are skipped.
    ///
    /// # Returns
    ///
    /// The number of objects downloaded
    ///
    /// # Errors
    ///
    /// Returns `BucketError` on the first listing, download, or filesystem
    /// failure; objects already written stay on disk.
    pub async fn download_prefix(&self, prefix: &str, dest_root: &Path) -> BucketResult<usize> {
        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket_name)
            .prefix(prefix)
            .into_paginator()
            .send();

        let mut downloaded = 0;
        while let Some(page) = pages.next().await.transpose()? {
            for object in page.contents() {
                let Some(key) = object.key() else { continue };

                let Some(local_path) = paths::local_path_for_key(dest_root, prefix, key) else {
                    debug!("Skipping folder placeholder: {}", key);
                    continue;
                };

                self.download_object(key, &local_path).await?;
                downloaded += 1;
            }
        }

        Ok(downloaded)
    }

    /// Downloads one object to a local path, creating parent directories
    async fn download_object(&self, key: &str, local_path: &Path) -> BucketResult<()> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket_name)
            .key(key)
            .send()
            .await?;

        let bytes = output
            .body
            .collect()
            .await
            .map_err(|e| BucketError::Body(e.to_string()))?;

        write_local(local_path, &bytes.into_bytes()).await?;

        info!(
            "Downloaded s3://{}/{} to {}",
            self.bucket_name,
            key,
            local_path.display()
        );
        Ok(())
    }

    /// Uploads a single local file to `key`
    ///
    /// # Errors
    ///
    /// Returns `BucketError` if the file cannot be read or the upload fails
    pub async fn upload_file(&self, path: &Path, key: &str) -> BucketResult<()> {
        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| BucketError::Body(e.to_string()))?;

        self.client
            .put_object()
            .bucket(&self.bucket_name)
            .key(key)
            .body(body)
            .send()
            .await?;

        info!(
            "Uploaded {} to s3://{}/{}",
            path.display(),
            self.bucket_name,
            key
        );
        Ok(())
    }
}

/// Writes bytes to `path`, creating missing parent directories first
async fn write_local(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, bytes).await
}
