use azure_core::{error::ErrorKind, StatusCode};

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the walkthrough.
///
/// Nothing here is caught or retried: every error propagates to the binary,
/// which prints it and terminates with a non-zero exit.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The connection string is malformed or the credentials were rejected.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The storage backend could not service the request.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[source] azure_core::Error),

    /// The addressed blob or container does not exist (any more).
    #[error("{0} not found")]
    NotFound(String),

    /// The local file could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Sorts a backend failure into the taxonomy above.
///
/// `resource` names what the failed request addressed, e.g. `blob myblockblob`,
/// and ends up in the `NotFound` message.
pub(crate) fn map_storage_error(resource: &str, source: azure_core::Error) -> Error {
    enum Mapped {
        NotFound,
        Authentication,
        StorageUnavailable,
    }

    let mapped = match source.kind() {
        ErrorKind::HttpResponse { status, .. } if *status == StatusCode::NotFound => {
            Mapped::NotFound
        }
        ErrorKind::HttpResponse { status, .. }
            if *status == StatusCode::Unauthorized || *status == StatusCode::Forbidden =>
        {
            Mapped::Authentication
        }
        ErrorKind::Credential => Mapped::Authentication,
        _ => Mapped::StorageUnavailable,
    };

    match mapped {
        Mapped::NotFound => Error::NotFound(resource.to_owned()),
        Mapped::Authentication => Error::Authentication(source.to_string()),
        Mapped::StorageUnavailable => Error::StorageUnavailable(source),
    }
}
