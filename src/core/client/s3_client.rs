use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::Client;
use tracing::debug;

use crate::core::config::AuditConfig;
use crate::core::storage::object_lister_trait::ObjectLister;
use crate::errors::{storage_error, AuditError};

/// Creates an S3 client from the shared AWS configuration (`~/.aws/config`)
/// using the configured profile and region.
///
/// Credentials are resolved lazily, so a bad profile only shows up on the
/// first listing call.
pub async fn build_s3_client(config: &AuditConfig) -> Client {
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .profile_name(&config.profile)
        .region(Region::new(config.region.clone()))
        .load()
        .await;

    debug!(
        profile = %config.profile,
        region = %config.region,
        "S3 client initialized"
    );
    Client::new(&sdk_config)
}

/// `ObjectLister` backed by `ListObjectsV2`.
pub struct S3ObjectLister {
    client: Client,
}

impl S3ObjectLister {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectLister for S3ObjectLister {
    async fn list_keys(&self, bucket: &str, prefix: &str) -> Result<Vec<String>, AuditError> {
        let output = self
            .client
            .list_objects_v2()
            .bucket(bucket)
            .prefix(prefix)
            .send()
            .await
            .map_err(|e| storage_error(prefix, DisplayErrorContext(e)))?;

        Ok(output
            .contents()
            .iter()
            .filter_map(|object| object.key().map(str::to_string))
            .collect())
    }
}
