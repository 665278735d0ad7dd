//! In-memory implementation of [`BlobStore`].
//!
//! Plays the role the storage emulator plays for the real client: the whole
//! walkthrough runs against it without a cloud account. The test suite
//! drives the lifecycle through this store.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::{Error, Result};
use crate::store::{BlobRef, BlobStore};

type Containers = BTreeMap<String, BTreeMap<String, Bytes>>;

/// Shared in-memory storage account. Cheap to clone; all clones see the same
/// containers.
#[derive(Debug, Clone, Default)]
pub struct MemoryAccount {
    containers: Arc<Mutex<Containers>>,
}

impl MemoryAccount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Container-scoped store, analogous to the SDK's container client.
    pub fn container(&self, container_name: impl Into<String>) -> MemoryBlobStore {
        MemoryBlobStore {
            account: self.clone(),
            container_name: container_name.into(),
        }
    }

    /// Whether the container currently exists.
    pub fn container_exists(&self, container_name: &str) -> bool {
        self.containers.lock().unwrap().contains_key(container_name)
    }
}

/// One container inside a [`MemoryAccount`].
#[derive(Debug, Clone)]
pub struct MemoryBlobStore {
    account: MemoryAccount,
    container_name: String,
}

impl MemoryBlobStore {
    fn blob_url(&self, blob_name: &str) -> String {
        format!("memory://{}/{}", self.container_name, blob_name)
    }

    fn container_resource(&self) -> String {
        format!("container {}", self.container_name)
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    fn container_name(&self) -> &str {
        &self.container_name
    }

    async fn ensure_container(&self) -> Result<()> {
        let mut containers = self.account.containers.lock().unwrap();
        containers.entry(self.container_name.clone()).or_default();
        Ok(())
    }

    async fn upload_block_blob(&self, blob_name: &str, content: Bytes) -> Result<BlobRef> {
        let mut containers = self.account.containers.lock().unwrap();
        let container = containers
            .get_mut(&self.container_name)
            .ok_or_else(|| Error::NotFound(self.container_resource()))?;
        let size = content.len() as u64;
        container.insert(blob_name.to_owned(), content);
        Ok(BlobRef {
            name: blob_name.to_owned(),
            url: self.blob_url(blob_name),
            size,
        })
    }

    async fn list_blobs(&self) -> Result<Vec<BlobRef>> {
        let containers = self.account.containers.lock().unwrap();
        let container = containers
            .get(&self.container_name)
            .ok_or_else(|| Error::NotFound(self.container_resource()))?;
        Ok(container
            .iter()
            .map(|(name, content)| BlobRef {
                name: name.clone(),
                url: self.blob_url(name),
                size: content.len() as u64,
            })
            .collect())
    }

    async fn delete_blob(&self, blob_name: &str) -> Result<()> {
        let mut containers = self.account.containers.lock().unwrap();
        let container = containers
            .get_mut(&self.container_name)
            .ok_or_else(|| Error::NotFound(self.container_resource()))?;
        container
            .remove(blob_name)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(format!("blob {blob_name}")))
    }

    async fn delete_container(&self) -> Result<()> {
        let mut containers = self.account.containers.lock().unwrap();
        // Removing the container drops whatever blobs are still in it, the
        // same cascade the Azure delete-container call performs.
        containers
            .remove(&self.container_name)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(self.container_resource()))
    }
}
