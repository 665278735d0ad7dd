//! Azure Blob Storage implementation of [`BlobStore`].

use async_trait::async_trait;
use azure_storage::ConnectionString;
use azure_storage_blobs::prelude::{ClientBuilder, ContainerClient};
use bytes::Bytes;
use futures::StreamExt;
use log::debug;

use crate::error::{map_storage_error, Error, Result};
use crate::store::{BlobRef, BlobStore};

/// Container-scoped client built from a `StorageConnectionString`.
#[derive(Debug)]
pub struct AzureBlobStore {
    container_client: ContainerClient,
}

impl AzureBlobStore {
    /// Parses the connection string and builds the container client.
    ///
    /// A malformed string or one without usable credentials fails here with
    /// [`Error::Authentication`], before any request is sent; rejected
    /// credentials surface on the first operation instead.
    /// `UseDevelopmentStorage=true` routes to the Azurite emulator endpoint.
    pub fn from_connection_string(connection_string: &str, container_name: &str) -> Result<Self> {
        let parsed = ConnectionString::new(connection_string)
            .map_err(|e| Error::Authentication(format!("malformed connection string: {e}")))?;

        let builder = if parsed.use_development_storage == Some(true) {
            ClientBuilder::emulator()
        } else {
            let account = parsed.account_name.ok_or_else(|| {
                Error::Authentication("connection string has no AccountName".to_owned())
            })?;
            let credentials = parsed.storage_credentials().map_err(|e| {
                Error::Authentication(format!("connection string has no usable credentials: {e}"))
            })?;
            ClientBuilder::new(account, credentials)
        };

        Ok(Self {
            container_client: builder.container_client(container_name),
        })
    }

    fn container_resource(&self) -> String {
        format!("container {}", self.container_name())
    }
}

#[async_trait]
impl BlobStore for AzureBlobStore {
    fn container_name(&self) -> &str {
        self.container_client.container_name()
    }

    async fn ensure_container(&self) -> Result<()> {
        debug!("creating container {}", self.container_name());
        match self.container_client.create().await {
            Ok(_) => Ok(()),
            Err(e) if is_container_already_exists(&e) => {
                debug!("container {} already exists", self.container_name());
                Ok(())
            }
            Err(e) => Err(map_storage_error(&self.container_resource(), e)),
        }
    }

    async fn upload_block_blob(&self, blob_name: &str, content: Bytes) -> Result<BlobRef> {
        let blob_client = self.container_client.blob_client(blob_name);
        let size = content.len() as u64;
        debug!("uploading block blob {blob_name} ({size} bytes)");
        blob_client
            .put_block_blob(content)
            .await
            .map_err(|e| map_storage_error(&format!("blob {blob_name}"), e))?;
        let url = blob_client
            .url()
            .map_err(|e| map_storage_error(&format!("blob {blob_name}"), e))?;
        Ok(BlobRef {
            name: blob_name.to_owned(),
            url: url.to_string(),
            size,
        })
    }

    async fn list_blobs(&self) -> Result<Vec<BlobRef>> {
        let mut pages = self.container_client.list_blobs().into_stream();
        let mut blobs = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| map_storage_error(&self.container_resource(), e))?;
            for blob in page.blobs.blobs() {
                let url = self
                    .container_client
                    .blob_client(&blob.name)
                    .url()
                    .map_err(|e| map_storage_error(&format!("blob {}", blob.name), e))?;
                blobs.push(BlobRef {
                    name: blob.name.clone(),
                    url: url.to_string(),
                    size: blob.properties.content_length,
                });
            }
        }
        Ok(blobs)
    }

    async fn delete_blob(&self, blob_name: &str) -> Result<()> {
        debug!("deleting blob {blob_name}");
        self.container_client
            .blob_client(blob_name)
            .delete()
            .await
            .map(|_| ())
            .map_err(|e| map_storage_error(&format!("blob {blob_name}"), e))
    }

    async fn delete_container(&self) -> Result<()> {
        debug!("deleting container {}", self.container_name());
        self.container_client
            .delete()
            .await
            .map(|_| ())
            .map_err(|e| map_storage_error(&self.container_resource(), e))
    }
}

/// The create call answers 409 `ContainerAlreadyExists` when the container is
/// already there; for this walkthrough that is success.
fn is_container_already_exists(err: &azure_core::Error) -> bool {
    match err.kind() {
        azure_core::error::ErrorKind::HttpResponse { status, error_code } => {
            *status == azure_core::StatusCode::Conflict
                && matches!(error_code.as_deref(), Some(code) if code.eq_ignore_ascii_case("ContainerAlreadyExists"))
        }
        _ => false,
    }
}
