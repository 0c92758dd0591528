// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! An in-memory [`ObjectStore`] for tests that don't need a running NATS
//! server, mirroring `flexbios-core`'s own `test-support` convention.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::StorageError;
use crate::object_store::{BucketConfig, ObjectStore};

#[derive(Default)]
pub struct FakeObjectStore {
    buckets: Mutex<HashMap<String, HashMap<String, Vec<u8>>>>,
}

impl FakeObjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ObjectStore for FakeObjectStore {
    async fn create_bucket(&self, bucket: &str, _config: BucketConfig) -> Result<(), StorageError> {
        self.buckets.lock().entry(bucket.to_string()).or_default();
        Ok(())
    }

    async fn drop_bucket(&self, bucket: &str) -> Result<(), StorageError> {
        self.buckets.lock().remove(bucket);
        Ok(())
    }

    async fn list_buckets(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.buckets.lock().keys().cloned().collect())
    }

    async fn put_bytes(
        &self,
        bucket: &str,
        name: &str,
        bytes: Vec<u8>,
        overwrite: bool,
    ) -> Result<(), StorageError> {
        let mut buckets = self.buckets.lock();
        let objects = buckets.entry(bucket.to_string()).or_default();
        if !overwrite && objects.contains_key(name) {
            return Ok(());
        }
        objects.insert(name.to_string(), bytes);
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
            return Ok(());
        }
        let bytes = tokio::fs::read(path).await?;
        self.put_bytes(bucket, name, bytes, true).await
    }

    async fn get_bytes(&self, bucket: &str, name: &str) -> Result<Vec<u8>, StorageError> {
        self.buckets
            .lock()
            .get(bucket)
            .and_then(|objects| objects.get(name))
            .cloned()
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }

    async fn list_objects(&self, bucket: &str) -> Result<Vec<String>, StorageError> {
        Ok(self.buckets.lock().get(bucket).map(|o| o.keys().cloned().collect()).unwrap_or_default())
    }

    async fn delete_object(&self, bucket: &str, name: &str) -> Result<(), StorageError> {
        if let Some(objects) = self.buckets.lock().get_mut(bucket) {
            objects.remove(name);
        }
        Ok(())
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

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
