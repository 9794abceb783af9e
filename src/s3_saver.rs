//! S3 upload decorator around a screenshot saver.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use std::ops::{Deref, DerefMut};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

use crate::{ObjectStorage, Result, S3SaverConfig, Saver, SaverError, object_key};

/// Decorator that uploads saved snapshot artifacts to an S3 bucket.
///
/// Wraps any [`Saver`]; after delegating [`save`](S3Saver::save) to it, every
/// artifact the wrapped saver reports as written is uploaded to the bucket
/// under its file name as the object key. The adapter itself implements
/// [`Saver`], so it is a drop-in replacement for the saver it wraps; any
/// further capability of the concrete saver stays reachable through `Deref`
/// or [`inner`](S3Saver::inner).
pub struct S3Saver<S, C = Client> {
    saver: S,
    client: C,
    bucket_name: String,
}

impl<S, C> S3Saver<S, C> {
    /// Wrap a saver with an existing storage client and bucket.
    pub fn new(saver: S, client: C, bucket_name: impl Into<String>) -> Self {
        Self {
            saver,
            client,
            bucket_name: bucket_name.into(),
        }
    }

    /// Bucket uploads are written to.
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    /// The storage client uploads go through.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// The wrapped saver.
    pub fn inner(&self) -> &S {
        &self.saver
    }

    /// The wrapped saver, mutably.
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.saver
    }

    /// Unwrap, discarding the upload layer.
    pub fn into_inner(self) -> S {
        self.saver
    }
}

impl<S> S3Saver<S, Client> {
    /// Build the S3 client from a configuration bundle and wrap `saver`.
    ///
    /// Credentials missing a region default to
    /// [`DEFAULT_REGION`](crate::DEFAULT_REGION).
    pub fn new_with_configuration(saver: S, config: S3SaverConfig) -> Self {
        let credentials = Credentials::from_keys(
            config.s3_client_credentials.access_key_id.clone(),
            config.s3_client_credentials.secret_access_key.clone(),
            None,
        );

        let s3_config = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.s3_client_credentials.region_or_default()))
            .credentials_provider(credentials)
            .build();

        let client = Client::from_conf(s3_config);

        info!(bucket = %config.bucket_name, "Initialized S3 saver");

        Self::new(saver, client, config.bucket_name)
    }
}

impl<S: Saver, C: ObjectStorage> S3Saver<S, C> {
    /// Delegate to the wrapped saver, then upload whatever it wrote.
    ///
    /// The HTML snapshot is uploaded before the image snapshot; either, both,
    /// or neither may exist for a given call. An upload failure surfaces to
    /// the caller unchanged; locally saved artifacts are never rolled back.
    pub async fn save(&mut self) -> Result<()> {
        self.saver.save().await?;

        if self.saver.html_saved() {
            self.upload(self.saver.html_path()).await?;
        }

        if self.saver.screenshot_saved() {
            self.upload(self.saver.screenshot_path()).await?;
        }

        Ok(())
    }

    /// Upload one artifact under its file name. The file handle backing the
    /// body is released once the put call completes, on every exit path.
    async fn upload(&self, path: &Path) -> Result<()> {
        let key = object_key(path);

        let file = fs::File::open(path).await?;
        let body = ByteStream::read_from()
            .file(file)
            .build()
            .await
            .map_err(|e| SaverError::Storage(e.to_string()))?;

        debug!(path = ?path, key = %key, bucket = %self.bucket_name, "Uploading artifact");

        self.client.put_object(&self.bucket_name, &key, body).await
    }
}

#[async_trait]
impl<S: Saver + Sync, C: ObjectStorage> Saver for S3Saver<S, C> {
    async fn save(&mut self) -> Result<()> {
        S3Saver::save(self).await
    }

    fn html_saved(&self) -> bool {
        self.saver.html_saved()
    }

    fn html_path(&self) -> &Path {
        self.saver.html_path()
    }

    fn screenshot_saved(&self) -> bool {
        self.saver.screenshot_saved()
    }

    fn screenshot_path(&self) -> &Path {
        self.saver.screenshot_path()
    }
}

impl<S, C> Deref for S3Saver<S, C> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.saver
    }
}

impl<S, C> DerefMut for S3Saver<S, C> {
    fn deref_mut(&mut self) -> &mut S {
        &mut self.saver
    }
}
