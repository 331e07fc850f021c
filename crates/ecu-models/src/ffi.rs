//! Exported C ABI.
//!
//! Every string handed to C is allocated here and must come back through
//! [`free_cstring`]. Errors never cross the boundary as panics: they become
//! a null pointer or a status code.

use std::ffi::{CString, c_char};
use std::io::{self, Write};
use std::ptr;
use std::sync::OnceLock;

use em_toolkit::{VersionSource, default_source};

use crate::catalog;
use crate::error::{ProviderError, ProviderResult};
use crate::provider::MockEcuProvider;

type SharedProvider = MockEcuProvider<Box<dyn VersionSource>>;

static PROVIDER: OnceLock<SharedProvider> = OnceLock::new();

/// Install the version source used by the exported functions.
///
/// Must run before the first exported call; afterwards the provider is fixed
/// for the life of the process.
pub fn install_version_source(source: Box<dyn VersionSource>) -> ProviderResult<()> {
    PROVIDER
        .set(MockEcuProvider::new(source))
        .map_err(|_| ProviderError::AlreadyInitialized)
}

/// The process-wide provider, created with the build's default source on
/// first use.
pub fn shared_provider() -> &'static SharedProvider {
    PROVIDER.get_or_init(|| MockEcuProvider::new(default_source()))
}

/// Copy `text` into a new C string. Fails instead of aborting when the
/// buffer cannot be reserved.
fn to_c_string(text: &str) -> ProviderResult<CString> {
    let len = text.len() + 1;
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(len)
        .map_err(|_| ProviderError::Allocation { len })?;
    bytes.extend_from_slice(text.as_bytes());
    CString::new(bytes).map_err(|_| ProviderError::InteriorNul)
}

fn into_raw_or_null(result: ProviderResult<CString>) -> *mut c_char {
    match result {
        Ok(s) => s.into_raw(),
        Err(e) => {
            tracing::error!(error = %e, "returning null to C caller");
            ptr::null_mut()
        }
    }
}

/// Reports the TTC Toolkit version.
///
/// Returns the toolkit status, `0` on success. When `version_out` is not
/// NULL it receives a newly allocated string: `"X.Y.Z"` on success,
/// `"unknown"` on failure, or NULL if the string could not be allocated.
///
/// # Safety
///
/// `version_out` must be NULL or valid for a single pointer write. A string
/// written to it must be released with [`free_cstring`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn get_ttctk_version(version_out: *mut *mut c_char) -> u32 {
    let report = shared_provider().toolkit_version();

    if !version_out.is_null() {
        let text = into_raw_or_null(to_c_string(&report.version_text()));
        // SAFETY: caller guarantees `version_out` is valid for writes.
        unsafe { version_out.write(text) };
    }

    report.status
}

/// Prints the TTC Toolkit version, or the failure status, to stdout.
#[unsafe(no_mangle)]
pub extern "C" fn print_ttctk_version() {
    let line = shared_provider().describe_toolkit_version();
    // A closed stdout must not unwind into the C caller.
    if let Err(e) = writeln!(io::stdout().lock(), "{line}") {
        tracing::warn!(error = %e, "could not write toolkit version to stdout");
    }
}

/// Returns the mock ECUs as a NUL-terminated JSON array.
///
/// The returned buffer is the only allocation on this path, so running out
/// of memory yields NULL rather than an abort; the result is never partial.
/// Release with [`free_cstring`].
#[unsafe(no_mangle)]
pub extern "C" fn get_mock_ecus() -> *const c_char {
    into_raw_or_null(to_c_string(catalog::mock_ecus_json()))
}

/// Releases a string returned by this library. NULL is a no-op.
///
/// # Safety
///
/// `ptr` must be NULL or a pointer returned by [`get_mock_ecus`] or
/// [`get_ttctk_version`] that has not already been released.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn free_cstring(ptr: *const c_char) {
    if ptr.is_null() {
        return;
    }
    // SAFETY: caller guarantees `ptr` came from `CString::into_raw` here.
    drop(unsafe { CString::from_raw(ptr.cast_mut()) });
}
