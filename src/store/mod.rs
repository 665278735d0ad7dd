//! The typed client abstraction the driver runs against.

mod azure;
mod memory;

pub use azure::AzureBlobStore;
pub use memory::{MemoryAccount, MemoryBlobStore};

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;

/// A URI-addressable reference to a stored blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobRef {
    /// Blob name within its container.
    pub name: String,
    /// Full URI of the blob.
    pub url: String,
    /// Content length in bytes.
    pub size: u64,
}

/// Container-scoped view of a blob storage backend.
///
/// The shape follows the SDK's container client: one value is bound to one
/// container for its whole life. [`AzureBlobStore`] talks to Azure Blob
/// Storage, [`MemoryBlobStore`] keeps everything in process.
#[async_trait]
pub trait BlobStore {
    /// Name of the container this store is bound to.
    fn container_name(&self) -> &str;

    /// Creates the container if it does not exist yet. Idempotent: calling
    /// it again is a no-op, never a duplicate and never an error.
    async fn ensure_container(&self) -> Result<()>;

    /// Creates or replaces a block blob with the given content.
    async fn upload_block_blob(&self, blob_name: &str, content: Bytes) -> Result<BlobRef>;

    /// All blobs currently in the container, in listing order.
    async fn list_blobs(&self) -> Result<Vec<BlobRef>>;

    /// Deletes one blob. `Error::NotFound` if it is already gone.
    async fn delete_blob(&self, blob_name: &str) -> Result<()>;

    /// Deletes the container together with any blobs still in it.
    /// `Error::NotFound` if the container is already gone.
    async fn delete_container(&self) -> Result<()>;
}
