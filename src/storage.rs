//! Object storage trait and the AWS S3 backend.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use std::path::Path;
use tracing::debug;

use crate::{Result, SaverError};

/// Object storage backend with a bucket/key/body upload model.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload a single object from a byte stream.
    async fn put_object(&self, bucket: &str, key: &str, body: ByteStream) -> Result<()>;

    /// Upload a single object from in-memory bytes.
    async fn put_bytes(&self, bucket: &str, key: &str, data: Bytes) -> Result<()> {
        self.put_object(bucket, key, ByteStream::from(data)).await
    }
}

#[async_trait]
impl ObjectStorage for Client {
    async fn put_object(&self, bucket: &str, key: &str, body: ByteStream) -> Result<()> {
        Client::put_object(self)
            .bucket(bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(|e| SaverError::Storage(e.to_string()))?;

        debug!(bucket = %bucket, key = %key, "Uploaded to S3");
        Ok(())
    }
}

/// Derive the object key for a local artifact: its final path segment.
pub fn object_key(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Build an S3 client from the ambient AWS environment (env vars, profile,
/// IAM role).
pub async fn client_from_env() -> Client {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    Client::new(&config)
}
