use std::path::PathBuf;
use std::process::ExitCode;

use blob_lifecycle::config;
use blob_lifecycle::console::{AutoConfirm, Confirm, StdinConfirm};
use blob_lifecycle::driver::BlobLifecycleDriver;
use blob_lifecycle::store::AzureBlobStore;
use blob_lifecycle::Result;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let mut skip_pauses = false;
    let mut file = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--yes" | "-y" => skip_pauses = true,
            _ => file = Some(PathBuf::from(arg)),
        }
    }
    let file = file.expect("please specify the file to upload as command line parameter");

    let connection_string = config::connection_string_from_env()?;
    let store = AzureBlobStore::from_connection_string(&connection_string, config::CONTAINER_NAME)?;

    let confirm: Box<dyn Confirm> = if skip_pauses {
        Box::new(AutoConfirm::default())
    } else {
        Box::new(StdinConfirm)
    };

    let mut driver = BlobLifecycleDriver::new(store, confirm, config::BLOB_NAME);
    driver.run(&file).await?;
    Ok(())
}
