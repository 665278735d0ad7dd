//! Walkthrough against a live storage account or Azurite.
//!
//! Needs `STORAGE_CONNECTION_STRING` and network access, so it sits behind
//! the `test_e2e` feature: `cargo test --features test_e2e`.
#![cfg(feature = "test_e2e")]

use std::io::Write;

use blob_lifecycle::console::AutoConfirm;
use blob_lifecycle::driver::BlobLifecycleDriver;
use blob_lifecycle::store::AzureBlobStore;

#[tokio::test]
async fn walkthrough_against_live_account() {
    env_logger::init();

    let connection_string = std::env::var("STORAGE_CONNECTION_STRING")
        .expect("set STORAGE_CONNECTION_STRING to run the live walkthrough");
    // Unique container per run so repeated test invocations never collide.
    let container_name = format!("walkthrough-{}", uuid::Uuid::new_v4());
    let store = AzureBlobStore::from_connection_string(&connection_string, &container_name)
        .expect("connection string should parse");

    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(b"hello from the walkthrough")
        .expect("write temp file");

    let mut driver = BlobLifecycleDriver::new(store, AutoConfirm::default(), "myblockblob");
    let report = driver
        .run(file.path())
        .await
        .expect("walkthrough should succeed");

    assert_eq!(report.listed.len(), 1);
    assert_eq!(report.listed[0].name, "myblockblob");
    assert_eq!(report.listed[0].size, 26);
}
