//! Adapter configuration.

use serde::{Deserialize, Serialize};

/// Region used when credentials omit one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Static credentials for the S3 client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3ClientCredentials {
    /// AWS access key ID.
    pub access_key_id: String,
    /// AWS secret access key.
    pub secret_access_key: String,
    /// AWS region; defaults to [`DEFAULT_REGION`] when omitted.
    #[serde(default)]
    pub region: Option<String>,
}

impl S3ClientCredentials {
    /// Create credentials with the default region.
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            region: None,
        }
    }

    /// Set an explicit region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// The region to connect to, falling back to [`DEFAULT_REGION`].
    pub fn region_or_default(&self) -> String {
        self.region
            .clone()
            .unwrap_or_else(|| DEFAULT_REGION.to_string())
    }
}

/// Configuration bundle consumed by
/// [`S3Saver::new_with_configuration`](crate::S3Saver::new_with_configuration).
///
/// Used only at construction time; the adapter does not retain it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3SaverConfig {
    /// Credentials the S3 client is built from.
    pub s3_client_credentials: S3ClientCredentials,
    /// Bucket uploads are written to.
    pub bucket_name: String,
}

impl S3SaverConfig {
    /// Create a configuration bundle.
    pub fn new(credentials: S3ClientCredentials, bucket_name: impl Into<String>) -> Self {
        Self {
            s3_client_credentials: credentials,
            bucket_name: bucket_name.into(),
        }
    }
}
