//! Version source abstraction.
//!
//! `VersionSource` trait with `query_version`. Three impls:
//! - `TtcToolkit` — calls `TK_GetVersion`, only with the `ttctk` feature
//! - `UnlinkedToolkit` — stands in when the SDK is not linked
//! - `MockVersionSource` — scripted outcome (in `mock.rs`)

use em_protocol::ToolkitVersion;

use crate::error::{ToolkitError, ToolkitResult};

/// Something that can report the vendor toolkit version.
///
/// Implementations must be side-effect free; the provider calls this from
/// any thread and never retries.
pub trait VersionSource: Send + Sync {
    /// Query the toolkit version. Errors carry the vendor status code.
    fn query_version(&self) -> ToolkitResult<ToolkitVersion>;
}

impl<S: VersionSource + ?Sized> VersionSource for &S {
    fn query_version(&self) -> ToolkitResult<ToolkitVersion> {
        (**self).query_version()
    }
}

impl<S: VersionSource + ?Sized> VersionSource for Box<S> {
    fn query_version(&self) -> ToolkitResult<ToolkitVersion> {
        (**self).query_version()
    }
}

impl<S: VersionSource + ?Sized> VersionSource for std::sync::Arc<S> {
    fn query_version(&self) -> ToolkitResult<ToolkitVersion> {
        (**self).query_version()
    }
}

/// Source used when the crate is built without the vendor SDK.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnlinkedToolkit;

impl VersionSource for UnlinkedToolkit {
    fn query_version(&self) -> ToolkitResult<ToolkitVersion> {
        Err(ToolkitError::Unavailable)
    }
}

/// The source this build provides: the real toolkit if linked.
#[cfg(feature = "ttctk")]
pub fn default_source() -> Box<dyn VersionSource> {
    Box::new(crate::ttctk::TtcToolkit)
}

/// The source this build provides: the real toolkit if linked.
#[cfg(not(feature = "ttctk"))]
pub fn default_source() -> Box<dyn VersionSource> {
    tracing::debug!("TTC Toolkit not linked, version queries will report unavailable");
    Box::new(UnlinkedToolkit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::STATUS_TOOLKIT_UNAVAILABLE;
    use crate::mock::MockVersionSource;
    use std::sync::Arc;

    #[test]
    fn unlinked_reports_unavailable() {
        let err = UnlinkedToolkit.query_version().unwrap_err();
        assert_eq!(err, ToolkitError::Unavailable);
        assert_eq!(err.status(), STATUS_TOOLKIT_UNAVAILABLE);
    }

    #[cfg(not(feature = "ttctk"))]
    #[test]
    fn default_source_is_unlinked() {
        let source = default_source();
        assert_eq!(source.query_version(), Err(ToolkitError::Unavailable));
    }

    #[test]
    fn boxed_and_shared_sources_delegate() {
        let version = ToolkitVersion::new(3, 4, 5);

        let boxed: Box<dyn VersionSource> = Box::new(MockVersionSource::succeeding(version));
        assert_eq!(boxed.query_version(), Ok(version));

        let shared = Arc::new(MockVersionSource::succeeding(version));
        let as_source: Arc<dyn VersionSource> = shared.clone();
        assert_eq!(as_source.query_version(), Ok(version));
        assert_eq!(shared.calls(), 1);
    }
}
