//! Toolkit query error types.

use thiserror::Error;

/// Vendor status code for success (`TK_STATUS_OK`).
pub const TK_STATUS_OK: u32 = 0;

/// Status reported when the build does not link the vendor toolkit.
pub const STATUS_TOOLKIT_UNAVAILABLE: u32 = u32::MAX;

/// Errors that can occur while querying the vendor toolkit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolkitError {
    #[error("TTC Toolkit version query failed, error code = {status}")]
    QueryFailed { status: u32 },

    #[error("TTC Toolkit is not linked into this build")]
    Unavailable,
}

impl ToolkitError {
    /// Status code surfaced to C callers for this error.
    pub fn status(&self) -> u32 {
        match self {
            Self::QueryFailed { status } => *status,
            Self::Unavailable => STATUS_TOOLKIT_UNAVAILABLE,
        }
    }
}

/// Convenience alias for toolkit results.
pub type ToolkitResult<T> = Result<T, ToolkitError>;
