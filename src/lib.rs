//! Walkthrough of the Azure Blob Storage blob lifecycle.
//!
//! The program authenticates with a `StorageConnectionString`, creates a
//! container, uploads a local file as a block blob, lists the container
//! (printing each blob's URI), then deletes the blob and the container,
//! pausing for user confirmation before each destructive step.
//!
//! The sequence itself lives in [`driver::BlobLifecycleDriver`], which only
//! sees the [`store::BlobStore`] trait. [`store::AzureBlobStore`] is the real
//! implementation on top of `azure_storage_blobs`;
//! [`store::MemoryBlobStore`] keeps everything in process and backs the test
//! suite.
//!
//! Fail-fast throughout: the first storage error aborts the run and is
//! printed by the binary, which exits non-zero.

pub mod config;
pub mod console;
pub mod driver;
mod error;
pub mod store;

pub use error::{Error, Result};
