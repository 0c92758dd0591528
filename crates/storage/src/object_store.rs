// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Content-addressable blob storage, facaded over
//! `async_nats::jetstream::object_store`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_nats::jetstream;
use async_trait::async_trait;
use futures_util::StreamExt;
use tokio::io::AsyncReadExt;

use crate::error::StorageError;

/// Bucket creation options; mirrors the handful of fields this system
/// actually uses out of `jetstream::object_store::Config`.
#[derive(Debug, Clone, Default)]
pub struct BucketConfig {
    pub description: Option<String>,
    pub max_age: Option<Duration>,
}

/// The blob-storage facade every bus handler that touches `system.store`
/// or app archives goes through.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn create_bucket(&self, bucket: &str, config: BucketConfig) -> Result<(), StorageError>;
    async fn drop_bucket(&self, bucket: &str) -> Result<(), StorageError>;
    async fn list_buckets(&self) -> Result<Vec<String>, StorageError>;

    /// When `overwrite` is false and the object already exists, returns
    /// `Ok(())` without writing. Preserved exactly as the original's
    /// behavior, not "fixed": see the Open Question entry in `DESIGN.md`.
    async fn put_bytes(
        &self,
        bucket: &str,
        name: &str,
        bytes: Vec<u8>,
        overwrite: bool,
    ) -> Result<(), StorageError>;

    /// Streams a file from disk into the object store. Same `overwrite`
    /// no-op semantics as [`ObjectStore::put_bytes`].
    async fn new_object(
        &self,
        bucket: &str,
        name: &str,
        path: &Path,
        overwrite: bool,
    ) -> Result<(), StorageError>;

    async fn get_bytes(&self, bucket: &str, name: &str) -> Result<Vec<u8>, StorageError>;
    async fn list_objects(&self, bucket: &str) -> Result<Vec<String>, StorageError>;
    async fn delete_object(&self, bucket: &str, name: &str) -> Result<(), StorageError>;

    /// Downloads an object into `{dest_dir}/{name}`, creating `dest_dir` if
    /// it doesn't exist.
    async fn download_object(
        &self,
        bucket: &str,
        name: &str,
        dest_dir: &Path,
    ) -> Result<PathBuf, StorageError>;

    async fn object_exists(&self, bucket: &str, name: &str) -> Result<bool, StorageError> {
        match self.get_bytes(bucket, name).await {
            Ok(_) => Ok(true),
            Err(StorageError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// The real NATS-backed implementation, one JetStream context per daemon.
pub struct NatsObjectStore {
    jetstream: jetstream::Context,
}

impl NatsObjectStore {
    pub fn new(jetstream: jetstream::Context) -> Self {
        Self { jetstream }
    }

    async fn bucket(&self, bucket: &str) -> Result<jetstream::object_store::ObjectStore, StorageError> {
        self.jetstream.get_object_store(bucket).await.map_err(StorageError::bus)
    }
}

#[async_trait]
impl ObjectStore for NatsObjectStore {
    async fn create_bucket(&self, bucket: &str, config: BucketConfig) -> Result<(), StorageError> {
        tracing::debug!(bucket, "creating object store bucket");
        if self.jetstream.get_object_store(bucket).await.is_ok() {
            return Ok(());
        }
        let cfg = jetstream::object_store::Config {
            bucket: bucket.to_string(),
            description: config.description.unwrap_or_default(),
            max_age: config.max_age.unwrap_or_default(),
            ..Default::default()
        };
        self.jetstream.create_object_store(cfg).await.map_err(StorageError::bus)?;
        Ok(())
    }

    async fn drop_bucket(&self, bucket: &str) -> Result<(), StorageError> {
        tracing::debug!(bucket, "dropping object store bucket");
        self.jetstream.delete_object_store(bucket).await.map_err(StorageError::bus)
    }

    async fn list_buckets(&self) -> Result<Vec<String>, StorageError> {
        let mut names = self.jetstream.stream_names();
        let mut buckets = Vec::new();
        while let Some(name) = names.next().await {
            let name = name.map_err(StorageError::bus)?;
            if let Some(bucket) = name.strip_prefix("OBJ_") {
                buckets.push(bucket.to_string());
            }
        }
        Ok(buckets)
    }

    async fn put_bytes(
        &self,
        bucket: &str,
        name: &str,
        bytes: Vec<u8>,
        overwrite: bool,
    ) -> Result<(), StorageError> {
        let store = self.bucket(bucket).await?;
        if !overwrite && self.object_exists(bucket, name).await? {
            tracing::debug!(bucket, name, "object exists, skipping (overwrite=false)");
            return Ok(());
        }
        let _ = store.delete(name).await;
        let mut cursor = std::io::Cursor::new(bytes);
        store.put(name, &mut cursor).await.map_err(StorageError::bus)?;
        tracing::debug!(bucket, name, "object written");
        Ok(())
    }

    async fn new_object(
        &self,
        bucket: &str,
        name: &str,
        path: &Path,
        overwrite: bool,
    ) -> Result<(), StorageError> {
        if !overwrite && self.object_exists(bucket, name).await? {
            tracing::debug!(bucket, name, "object exists, skipping (overwrite=false)");
            return Ok(());
        }
        let bytes = tokio::fs::read(path).await?;
        self.put_bytes(bucket, name, bytes, true).await
    }

    async fn get_bytes(&self, bucket: &str, name: &str) -> Result<Vec<u8>, StorageError> {
        let store = self.bucket(bucket).await?;
        let mut object =
            store.get(name).await.map_err(|_| StorageError::NotFound(name.to_string()))?;
        let mut buf = Vec::new();
        object.read_to_end(&mut buf).await?;
        Ok(buf)
    }

    async fn list_objects(&self, bucket: &str) -> Result<Vec<String>, StorageError> {
        let store = self.bucket(bucket).await?;
        let mut list = store.list().await.map_err(StorageError::bus)?;
        let mut names = Vec::new();
        while let Some(info) = list.next().await {
            let info = info.map_err(StorageError::bus)?;
            names.push(info.name);
        }
        Ok(names)
    }

    async fn delete_object(&self, bucket: &str, name: &str) -> Result<(), StorageError> {
        let store = self.bucket(bucket).await?;
        store.delete(name).await.map_err(StorageError::bus)
    }

    async fn download_object(
        &self,
        bucket: &str,
        name: &str,
        dest_dir: &Path,
    ) -> Result<PathBuf, StorageError> {
        if dest_dir.exists() && !dest_dir.is_dir() {
            return Err(StorageError::NotADirectory(dest_dir.to_path_buf()));
        }
        tokio::fs::create_dir_all(dest_dir).await?;
        let bytes = self.get_bytes(bucket, name).await?;
        let dest = dest_dir.join(name);
        tokio::fs::write(&dest, bytes).await?;
        Ok(dest)
    }
}
