//! Error types for strato-core.

use thiserror::Error;

/// Main error type for strato operations.
///
/// Protocol-level failures (malformed lines, timed-out reads, device error
/// statuses) deliberately do NOT appear here: they surface as absent
/// responses or defaulted state fields, never as errors to the host.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from underlying system calls.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Could not establish a TCP session with the device.
    #[error("connect failed: {message}")]
    Connect { message: String },

    /// Operation exceeded its timeout bound.
    #[error("operation timed out")]
    Timeout,

    /// Transport failure after the connection was established.
    #[error("transport error: {message}")]
    Transport { message: String },

    /// Raw command pass-through is disabled and the command matched no alias.
    #[error("raw commands are disabled: {command:?}")]
    RawCommandsDisabled { command: String },
}

impl Error {
    /// Returns true if this error is transient and a later attempt may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Error::Io(_) | Error::Connect { .. } | Error::Timeout | Error::Transport { .. }
        )
    }
}

/// Convenience result type for strato operations.
pub type Result<T> = std::result::Result<T, Error>;
