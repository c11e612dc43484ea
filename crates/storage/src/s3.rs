//! S3-compatible object store client.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::primitives::ByteStream;

use haven_core::error::CoreError;

use crate::ObjectStore;

/// Object storage configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Custom endpoint for S3-compatible stores (MinIO, Supabase, R2).
    /// `None` targets AWS S3 proper.
    pub endpoint: Option<String>,
    /// Bucket holding property images.
    pub bucket: String,
    /// Region name (ignored by most S3-compatible stores, required by the SDK).
    pub region: String,
    /// Base URL under which stored keys are publicly reachable.
    pub public_base_url: String,
    /// Path-style addressing; required by most non-AWS endpoints.
    pub force_path_style: bool,
}

impl StorageConfig {
    /// Load storage configuration from environment variables.
    ///
    /// | Env Var               | Default                                      |
    /// |-----------------------|----------------------------------------------|
    /// | `S3_ENDPOINT`         | -- (AWS S3)                                  |
    /// | `S3_BUCKET`           | `property-images`                            |
    /// | `S3_REGION`           | `us-east-1`                                  |
    /// | `S3_PUBLIC_URL`       | derived from endpoint/bucket/region          |
    /// | `S3_FORCE_PATH_STYLE` | `true` when an endpoint is set, else `false` |
    pub fn from_env() -> Self {
        let endpoint = std::env::var("S3_ENDPOINT").ok().filter(|e| !e.is_empty());
        let bucket = std::env::var("S3_BUCKET").unwrap_or_else(|_| "property-images".into());
        let region = std::env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".into());

        let public_base_url = std::env::var("S3_PUBLIC_URL").unwrap_or_else(|_| match &endpoint {
            Some(endpoint) => format!("{}/{bucket}", endpoint.trim_end_matches('/')),
            None => format!("https://{bucket}.s3.{region}.amazonaws.com"),
        });

        let force_path_style = std::env::var("S3_FORCE_PATH_STYLE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(endpoint.is_some());

        Self {
            endpoint,
            bucket,
            region,
            public_base_url,
            force_path_style,
        }
    }
}

/// Production [`ObjectStore`] backed by an S3-compatible service.
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl S3ObjectStore {
    /// Build a client from configuration. Credentials come from the
    /// standard AWS environment/profile chain.
    pub async fn connect(config: &StorageConfig) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared)
            .force_path_style(config.force_path_style);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        Self {
            client: aws_sdk_s3::Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), CoreError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(key, error = %e, "Object store write failed");
                CoreError::Storage(format!("Failed to store object '{key}': {e}"))
            })?;
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{key}", self.public_base_url)
    }
}
