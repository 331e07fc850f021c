//! Mock ECU provider behind a C ABI.
//!
//! Rust callers use [`MockEcuProvider`] directly. C callers link the cdylib
//! and use the symbols in [`ffi`] (declared in `include/ecu_models.h`).

pub mod catalog;
pub mod error;
pub mod ffi;
pub mod provider;

pub use catalog::{mock_ecus, mock_ecus_json};
pub use error::{ProviderError, ProviderResult};
pub use ffi::{install_version_source, shared_provider};
pub use provider::{MockEcuProvider, UNKNOWN_VERSION, VersionReport};
