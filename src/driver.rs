//! The walkthrough itself: one linear pass over the blob lifecycle.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use bytes::Bytes;
use log::debug;

use crate::console::Confirm;
use crate::error::Result;
use crate::store::{BlobRef, BlobStore};

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct LifecycleReport {
    /// The blob as uploaded.
    pub uploaded: BlobRef,
    /// Container listing taken after the upload, before any deletion.
    pub listed: Vec<BlobRef>,
}

/// Executes the fixed sequence: ensure the container, upload one file as a
/// block blob, list the container, then delete the blob and the container,
/// pausing for confirmation before each destructive step.
///
/// Strictly linear and fail-fast: the first error aborts the run and
/// propagates to the caller, nothing is retried or rolled back.
pub struct BlobLifecycleDriver<S, C> {
    store: S,
    confirm: C,
    blob_name: String,
}

impl<S: BlobStore, C: Confirm> BlobLifecycleDriver<S, C> {
    pub fn new(store: S, confirm: C, blob_name: impl Into<String>) -> Self {
        Self {
            store,
            confirm,
            blob_name: blob_name.into(),
        }
    }

    /// Runs the whole lifecycle, uploading the file at `path`.
    pub async fn run(&mut self, path: &Path) -> Result<LifecycleReport> {
        self.store.ensure_container().await?;
        println!("Container '{}' is ready", self.store.container_name());

        let content = read_file(path)?;
        let uploaded = self
            .store
            .upload_block_blob(&self.blob_name, content)
            .await?;
        println!(
            "Uploaded '{}' as block blob '{}'",
            path.display(),
            uploaded.name
        );

        let listed = self.store.list_blobs().await?;
        for blob in &listed {
            println!("{}", blob.url);
        }

        self.confirm.confirm("Press enter to delete blob")?;
        self.store.delete_blob(&self.blob_name).await?;
        println!("Blob deleted");

        self.confirm.confirm("Press enter to delete container")?;
        self.store.delete_container().await?;
        println!("Container deleted");

        self.confirm.confirm("Press enter to exit")?;

        Ok(LifecycleReport { uploaded, listed })
    }
}

/// Reads the upload source in one scope; the handle is closed when this
/// returns, whatever the outcome.
fn read_file(path: &Path) -> Result<Bytes> {
    let mut file = File::open(path)?;
    let mut content = Vec::new();
    file.read_to_end(&mut content)?;
    debug!("read {} bytes from {}", content.len(), path.display());
    Ok(Bytes::from(content))
}
