//! Provider error types.

use thiserror::Error;

/// Errors that can occur while producing provider output.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("could not allocate {len} byte result buffer")]
    Allocation { len: usize },

    #[error("result contains an interior NUL byte")]
    InteriorNul,

    #[error("provider already initialized; install the version source before first use")]
    AlreadyInitialized,
}

/// Convenience alias for provider results.
pub type ProviderResult<T> = Result<T, ProviderError>;
