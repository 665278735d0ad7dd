//! The single configuration setting and the fixed names for the run.

use crate::error::{Error, Result};

/// Environment variable supplying the `StorageConnectionString` setting.
pub const CONNECTION_STRING_VAR: &str = "STORAGE_CONNECTION_STRING";

/// Container created at the start of the walkthrough and deleted at the end.
pub const CONTAINER_NAME: &str = "mycontainer";

/// Name the uploaded block blob is stored under.
pub const BLOB_NAME: &str = "myblockblob";

/// Reads the connection string from the environment.
pub fn connection_string_from_env() -> Result<String> {
    std::env::var(CONNECTION_STRING_VAR).map_err(|_| {
        Error::Authentication(format!(
            "set {CONNECTION_STRING_VAR} to your storage connection string first"
        ))
    })
}
