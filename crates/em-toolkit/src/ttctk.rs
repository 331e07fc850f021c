//! Binding to the TTC Toolkit vendor SDK.
//!
//! Only `TK_GetVersion` is bound. The library itself is linked by `build.rs`
//! when the `ttctk` feature is enabled.

use em_protocol::ToolkitVersion;

use crate::error::{TK_STATUS_OK, ToolkitError, ToolkitResult};
use crate::source::VersionSource;

/// `TkStatusType` from `ttctk_common.h`.
type TkStatusType = u32;

unsafe extern "C" {
    fn TK_GetVersion(major: *mut u16, minor: *mut u16, patch: *mut u16) -> TkStatusType;
}

/// Version source backed by the linked TTC Toolkit.
#[derive(Debug, Clone, Copy, Default)]
pub struct TtcToolkit;

impl VersionSource for TtcToolkit {
    fn query_version(&self) -> ToolkitResult<ToolkitVersion> {
        let (mut major, mut minor, mut patch) = (0u16, 0u16, 0u16);

        // SAFETY: all three out-pointers are valid, aligned and live for the call.
        let status = unsafe { TK_GetVersion(&mut major, &mut minor, &mut patch) };

        if status == TK_STATUS_OK {
            Ok(ToolkitVersion::new(major, minor, patch))
        } else {
            Err(ToolkitError::QueryFailed { status })
        }
    }
}
