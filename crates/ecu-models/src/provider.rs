//! Mock ECU provider: toolkit version reporting plus the fixed ECU catalog.

use em_protocol::{EcuDescriptor, ToolkitVersion};
use em_toolkit::{TK_STATUS_OK, VersionSource};
use serde::Serialize;

use crate::catalog;

/// Version text reported when the toolkit query fails.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Outcome of one toolkit version query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionReport {
    /// Vendor status code, `TK_STATUS_OK` on success.
    pub status: u32,
    /// Reported version, `None` when the query failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<ToolkitVersion>,
}

impl VersionReport {
    pub fn is_ok(&self) -> bool {
        self.status == TK_STATUS_OK
    }

    /// `"X.Y.Z"`, or [`UNKNOWN_VERSION`] on failure.
    pub fn version_text(&self) -> String {
        match self.version {
            Some(v) => v.to_string(),
            None => UNKNOWN_VERSION.to_string(),
        }
    }

    /// Human-readable status line, as printed by `print_ttctk_version`.
    pub fn describe(&self) -> String {
        match self.version {
            Some(v) => format!("-- APP: TTC Toolkit version {v}"),
            None => format!(
                "-- APP: Failed to get the TTC Toolkit version, error code = {}",
                self.status
            ),
        }
    }
}

/// Stateless provider over an injected [`VersionSource`].
pub struct MockEcuProvider<S> {
    source: S,
}

impl<S: VersionSource> MockEcuProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Query the toolkit once. Failures are reported, never retried.
    pub fn toolkit_version(&self) -> VersionReport {
        match self.source.query_version() {
            Ok(version) => {
                tracing::debug!(%version, "TTC Toolkit version");
                VersionReport {
                    status: TK_STATUS_OK,
                    version: Some(version),
                }
            }
            Err(e) => {
                let status = e.status();
                tracing::warn!(status, error = %e, "TTC Toolkit version query failed");
                VersionReport {
                    status,
                    version: None,
                }
            }
        }
    }

    /// Status line for the current toolkit version.
    pub fn describe_toolkit_version(&self) -> String {
        self.toolkit_version().describe()
    }

    pub fn descriptors(&self) -> Vec<EcuDescriptor> {
        catalog::mock_ecus()
    }

    /// The mock ECUs as compact JSON. Identical bytes on every call.
    pub fn descriptors_json(&self) -> &'static str {
        catalog::mock_ecus_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use em_toolkit::{MockVersionSource, STATUS_TOOLKIT_UNAVAILABLE, UnlinkedToolkit};

    #[test]
    fn reports_version_from_source() {
        let provider = MockEcuProvider::new(MockVersionSource::succeeding(ToolkitVersion::new(
            2, 5, 1,
        )));

        let report = provider.toolkit_version();
        assert!(report.is_ok());
        assert_eq!(report.version, Some(ToolkitVersion::new(2, 5, 1)));
        assert_eq!(report.version_text(), "2.5.1");
        assert_eq!(
            provider.describe_toolkit_version(),
            "-- APP: TTC Toolkit version 2.5.1"
        );
    }

    #[test]
    fn failure_reports_status_and_unknown() {
        let provider = MockEcuProvider::new(MockVersionSource::failing(9));

        let report = provider.toolkit_version();
        assert!(!report.is_ok());
        assert_eq!(report.status, 9);
        assert_eq!(report.version, None);
        assert_eq!(report.version_text(), UNKNOWN_VERSION);
        assert_eq!(
            report.describe(),
            "-- APP: Failed to get the TTC Toolkit version, error code = 9"
        );
    }

    #[test]
    fn queries_once_per_call() {
        let source = MockVersionSource::failing(3);
        let provider = MockEcuProvider::new(&source);

        provider.toolkit_version();
        assert_eq!(source.calls(), 1);

        provider.toolkit_version();
        assert_eq!(source.calls(), 2);
    }

    #[test]
    fn unlinked_toolkit_is_not_fatal() {
        let provider = MockEcuProvider::new(UnlinkedToolkit);
        let report = provider.toolkit_version();
        assert_eq!(report.status, STATUS_TOOLKIT_UNAVAILABLE);
        assert_eq!(report.version_text(), UNKNOWN_VERSION);
    }

    #[test]
    fn descriptors_independent_of_source() {
        let failing = MockEcuProvider::new(MockVersionSource::failing(1));
        let working = MockEcuProvider::new(MockVersionSource::succeeding(ToolkitVersion::new(
            1, 0, 0,
        )));

        assert_eq!(failing.descriptors(), working.descriptors());
        assert_eq!(failing.descriptors_json(), working.descriptors_json());
    }

    #[test]
    fn json_round_trips() {
        let provider = MockEcuProvider::new(UnlinkedToolkit);
        let json = provider.descriptors_json();

        let parsed: Vec<EcuDescriptor> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, provider.descriptors());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), json);
    }

    #[test]
    fn report_serializes() {
        let ok = VersionReport {
            status: TK_STATUS_OK,
            version: Some(ToolkitVersion::new(1, 2, 3)),
        };
        assert_eq!(
            serde_json::to_string(&ok).unwrap(),
            r#"{"status":0,"version":{"major":1,"minor":2,"patch":3}}"#
        );

        let failed = VersionReport {
            status: 5,
            version: None,
        };
        assert_eq!(serde_json::to_string(&failed).unwrap(), r#"{"status":5}"#);
    }
}
