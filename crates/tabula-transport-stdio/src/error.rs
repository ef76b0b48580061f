//! Transport-layer error types.

use tabula_types::{ErrorKind, TabulaError};
use thiserror::Error;

/// Errors from the stdio transport layer.
///
/// Any of these ends the server loop; per-request failures never do.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to read from stdin.
    #[error("read error: {0}")]
    Read(String),
    /// Failed to write to stdout.
    #[error("write error: {0}")]
    Write(String),
}

impl From<TransportError> for TabulaError {
    fn from(e: TransportError) -> Self {
        TabulaError::new(ErrorKind::Internal, e.to_string())
    }
}
