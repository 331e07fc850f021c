//! Mock version source for testing.
//!
//! Returns a scripted version or status code and counts queries, so tests
//! never need the vendor SDK or PCAN hardware.

use std::sync::atomic::{AtomicUsize, Ordering};

use em_protocol::ToolkitVersion;

use crate::error::{TK_STATUS_OK, ToolkitError, ToolkitResult};
use crate::source::VersionSource;

/// Mock version source with a fixed outcome and query counter.
#[derive(Debug)]
pub struct MockVersionSource {
    /// Version to report, or the vendor status code to fail with.
    outcome: Result<ToolkitVersion, u32>,
    /// Number of `query_version` calls so far.
    calls: AtomicUsize,
}

impl MockVersionSource {
    /// A source that always reports `version`.
    pub fn succeeding(version: ToolkitVersion) -> Self {
        Self {
            outcome: Ok(version),
            calls: AtomicUsize::new(0),
        }
    }

    /// A source that always fails with the vendor `status` code.
    ///
    /// A `status` of `TK_STATUS_OK` is not a failure; it is mapped to 1 so
    /// the mock cannot report a failed query as successful.
    pub fn failing(status: u32) -> Self {
        let status = if status == TK_STATUS_OK { 1 } else { status };
        Self {
            outcome: Err(status),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of queries made against this source.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl VersionSource for MockVersionSource {
    fn query_version(&self) -> ToolkitResult<ToolkitVersion> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome
            .map_err(|status| ToolkitError::QueryFailed { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn succeeding_reports_version() {
        let mock = MockVersionSource::succeeding(ToolkitVersion::new(1, 2, 3));
        assert_eq!(mock.query_version(), Ok(ToolkitVersion::new(1, 2, 3)));
        assert_eq!(mock.calls(), 1);
    }

    #[test]
    fn failing_reports_status() {
        let mock = MockVersionSource::failing(42);
        assert_eq!(
            mock.query_version(),
            Err(ToolkitError::QueryFailed { status: 42 })
        );
    }

    #[test]
    fn failing_never_reports_ok_status() {
        let mock = MockVersionSource::failing(TK_STATUS_OK);
        let err = mock.query_version().unwrap_err();
        assert_ne!(err.status(), TK_STATUS_OK);
    }

    #[tokio::test]
    async fn counts_concurrent_queries() {
        let mock = Arc::new(MockVersionSource::succeeding(ToolkitVersion::new(0, 1, 0)));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let mock = mock.clone();
                tokio::spawn(async move { mock.query_version() })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }
        assert_eq!(mock.calls(), 16);
    }
}
