//! Full walkthrough against the in-memory store.

use std::io::Write;

use blob_lifecycle::console::AutoConfirm;
use blob_lifecycle::driver::BlobLifecycleDriver;
use blob_lifecycle::store::{BlobStore, MemoryAccount};
use blob_lifecycle::Error;

fn temp_file(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents).expect("write temp file");
    file
}

#[tokio::test]
async fn full_lifecycle_completes_and_cleans_up() {
    let account = MemoryAccount::new();
    let store = account.container("mycontainer");
    let file = temp_file(b"hello blob");

    let mut driver = BlobLifecycleDriver::new(store, AutoConfirm::default(), "myblockblob");
    let report = driver
        .run(file.path())
        .await
        .expect("walkthrough should succeed");

    // The uploaded blob was listed exactly once before deletion.
    let matching = report
        .listed
        .iter()
        .filter(|blob| blob.name == "myblockblob")
        .count();
    assert_eq!(matching, 1);
    assert_eq!(report.uploaded.size, 10);
    assert_eq!(report.listed[0], report.uploaded);

    // Blob and container are both gone at the end of the run.
    assert!(!account.container_exists("mycontainer"));
}

#[tokio::test]
async fn pauses_before_each_destructive_step() {
    let account = MemoryAccount::new();
    let file = temp_file(b"hello blob");

    let mut confirm = AutoConfirm::default();
    let mut driver = BlobLifecycleDriver::new(
        account.container("mycontainer"),
        &mut confirm,
        "myblockblob",
    );
    driver
        .run(file.path())
        .await
        .expect("walkthrough should succeed");
    assert_eq!(
        confirm.prompts,
        vec![
            "Press enter to delete blob",
            "Press enter to delete container",
            "Press enter to exit",
        ]
    );
}

#[tokio::test]
async fn zero_byte_file_uploads_and_lists_with_size_zero() {
    let account = MemoryAccount::new();
    let store = account.container("mycontainer");
    let file = temp_file(b"");

    let mut driver = BlobLifecycleDriver::new(store, AutoConfirm::default(), "myblockblob");
    let report = driver
        .run(file.path())
        .await
        .expect("walkthrough should succeed");

    assert_eq!(report.uploaded.size, 0);
    assert_eq!(report.listed.len(), 1);
    assert_eq!(report.listed[0].size, 0);
}

#[tokio::test]
async fn unreadable_file_fails_the_run_with_io_error() {
    let account = MemoryAccount::new();
    let store = account.container("mycontainer");

    let mut driver = BlobLifecycleDriver::new(store, AutoConfirm::default(), "myblockblob");
    let err = driver
        .run(std::path::Path::new("/definitely/not/a/real/file"))
        .await
        .expect_err("run should fail before uploading");
    assert!(matches!(err, Error::Io(_)));

    // Fail-fast: the container had already been created, but nothing was
    // uploaded and nothing was torn down.
    assert!(account.container_exists("mycontainer"));
    let listed = account
        .container("mycontainer")
        .list_blobs()
        .await
        .expect("container should still be listable");
    assert!(listed.is_empty());
}
