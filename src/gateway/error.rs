use std::path::PathBuf;
use thiserror::Error;

/// Failures from the remote data gateway or the local upload source.
///
/// User-facing views never show these directly; the App converts each into
/// a static, operation-specific message and logs the diagnostic form.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport-level failure: connect, timeout, or body decode.
    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The gateway answered with a non-success status.
    #[error("gateway returned status {status} for {operation}")]
    Status {
        operation: &'static str,
        status: reqwest::StatusCode,
    },

    /// The upload source file could not be read.
    #[error("failed to read upload file '{path}': {source}")]
    UploadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
