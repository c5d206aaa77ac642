//! AWS client construction for the transfer binaries

use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;

/// Builds an S3 client from the default credential chain, optionally pinned
/// to a named profile and region
pub async fn client(profile: Option<&str>, region: Option<String>) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(profile) = profile {
        loader = loader.profile_name(profile);
    }
    if let Some(region) = region {
        loader = loader.region(Region::new(region));
    }

    Client::new(&loader.load().await)
}
