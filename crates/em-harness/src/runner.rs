//! Drives the exported C ABI the way a C host would.

use std::ffi::{CStr, c_char};
use std::io::Write;
use std::ptr;

use ecu_models::ffi::{free_cstring, get_mock_ecus, get_ttctk_version};

use crate::config::HarnessConfig;

/// What one harness run observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessOutcome {
    pub version_status: u32,
    /// `None` if `get_ttctk_version` handed back NULL.
    pub version: Option<String>,
    /// `None` if `get_mock_ecus` returned NULL.
    pub ecu_json: Option<String>,
    /// Calls whose output differed from the first call, if the check ran.
    pub parallel_mismatches: Option<usize>,
}

impl HarnessOutcome {
    /// Fail the run if the library returned NULL or output varied.
    pub fn check(&self) -> anyhow::Result<()> {
        if self.version.is_none() {
            anyhow::bail!("get_ttctk_version returned null");
        }
        if self.ecu_json.is_none() {
            anyhow::bail!("get_mock_ecus returned null");
        }
        if let Some(mismatches) = self.parallel_mismatches.filter(|&n| n > 0) {
            anyhow::bail!("get_mock_ecus output varied in {mismatches} parallel calls");
        }
        Ok(())
    }
}

/// Copy a library-owned C string and release it.
fn take_c_string(raw: *const c_char) -> Option<String> {
    if raw.is_null() {
        return None;
    }
    // SAFETY: non-null pointers from the library are valid NUL-terminated strings.
    let text = unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned();
    // SAFETY: released exactly once, right after copying.
    unsafe { free_cstring(raw) };
    Some(text)
}

/// `get_ttctk_version` → (status, version text).
pub fn query_version() -> (u32, Option<String>) {
    let mut raw: *mut c_char = ptr::null_mut();
    // SAFETY: `raw` is a valid out-pointer for the duration of the call.
    let status = unsafe { get_ttctk_version(&mut raw) };
    (status, take_c_string(raw))
}

/// `get_mock_ecus` → JSON text.
pub fn fetch_mock_ecus() -> Option<String> {
    take_c_string(get_mock_ecus())
}

/// Call `get_mock_ecus` from `calls` blocking tasks at once and count
/// results that differ from `expected`.
pub async fn parallel_check(calls: usize, expected: &str) -> anyhow::Result<usize> {
    let handles: Vec<_> = (0..calls)
        .map(|_| tokio::task::spawn_blocking(fetch_mock_ecus))
        .collect();

    let mut mismatches = 0;
    for handle in handles {
        if handle.await?.as_deref() != Some(expected) {
            mismatches += 1;
        }
    }
    Ok(mismatches)
}

/// Run every check, writing the human-readable report to `out`.
pub async fn run(config: &HarnessConfig, out: &mut impl Write) -> anyhow::Result<HarnessOutcome> {
    let (version_status, version) = query_version();
    match &version {
        Some(v) => writeln!(out, "TTC Toolkit Version: {v} (status {version_status})")?,
        None => tracing::error!(status = version_status, "get_ttctk_version returned null"),
    }

    let ecu_json = fetch_mock_ecus();
    match &ecu_json {
        Some(json) => writeln!(out, "Mock ECUs JSON:\n{json}")?,
        None => tracing::error!("get_mock_ecus returned null"),
    }

    let parallel_mismatches = match (&ecu_json, config.parallel_calls) {
        (Some(expected), calls) if calls > 0 => {
            let mismatches = parallel_check(calls, expected).await?;
            writeln!(
                out,
                "Parallel check: {calls} calls, {mismatches} mismatched"
            )?;
            Some(mismatches)
        }
        _ => None,
    };

    Ok(HarnessOutcome {
        version_status,
        version,
        ecu_json,
        parallel_mismatches,
    })
}
