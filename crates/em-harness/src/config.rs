//! Harness configuration, loadable from TOML.

use anyhow::Context;
use em_protocol::ToolkitVersion;
use em_toolkit::{MockVersionSource, TK_STATUS_OK, VersionSource};
use serde::Deserialize;

/// Where the harness gets the toolkit version from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Whatever the library was built with (real toolkit or unavailable).
    #[default]
    Toolkit,
    /// Always report `fixed_version`.
    Fixed,
    /// Always fail with `failure_status`.
    Failing,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Top-level configuration for the harness.
#[derive(Debug, Clone, Deserialize)]
pub struct HarnessConfig {
    #[serde(default)]
    pub version_source: SourceKind,
    /// Version reported by the `fixed` source (`major.minor.patch`).
    #[serde(default = "default_fixed_version")]
    pub fixed_version: String,
    /// Status reported by the `failing` source.
    #[serde(default = "default_failure_status")]
    pub failure_status: u32,
    /// Concurrent `get_mock_ecus` calls to check. 0 skips the check.
    #[serde(default)]
    pub parallel_calls: usize,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_fixed_version() -> String {
    "1.0.0".to_string()
}

fn default_failure_status() -> u32 {
    1
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            version_source: SourceKind::default(),
            fixed_version: default_fixed_version(),
            failure_status: default_failure_status(),
            parallel_calls: 0,
            log_format: LogFormat::default(),
        }
    }
}

impl HarnessConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents =
            std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// The version source to install, or `None` to keep the build default.
    pub fn version_source(&self) -> anyhow::Result<Option<Box<dyn VersionSource>>> {
        match self.version_source {
            SourceKind::Toolkit => Ok(None),
            SourceKind::Fixed => {
                let version: ToolkitVersion = self.fixed_version.parse()?;
                Ok(Some(Box::new(MockVersionSource::succeeding(version))))
            }
            SourceKind::Failing => {
                if self.failure_status == TK_STATUS_OK {
                    anyhow::bail!(
                        "failure_status must be non-zero; {TK_STATUS_OK} is the toolkit's success status"
                    );
                }
                Ok(Some(Box::new(MockVersionSource::failing(
                    self.failure_status,
                ))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: HarnessConfig = toml::from_str("").unwrap();
        assert_eq!(config.version_source, SourceKind::Toolkit);
        assert_eq!(config.fixed_version, "1.0.0");
        assert_eq!(config.failure_status, 1);
        assert_eq!(config.parallel_calls, 0);
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.version_source().unwrap().is_none());
    }

    #[test]
    fn deserialize_full_config() {
        let toml = r#"
version_source = "fixed"
fixed_version = "4.2.17"
failure_status = 12
parallel_calls = 100
log_format = "pretty"
"#;
        let config: HarnessConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.version_source, SourceKind::Fixed);
        assert_eq!(config.parallel_calls, 100);
        assert_eq!(config.log_format, LogFormat::Pretty);

        let source = config.version_source().unwrap().unwrap();
        assert_eq!(source.query_version(), Ok(ToolkitVersion::new(4, 2, 17)));
    }

    #[test]
    fn failing_source_uses_configured_status() {
        let config: HarnessConfig =
            toml::from_str("version_source = \"failing\"\nfailure_status = 7").unwrap();
        let source = config.version_source().unwrap().unwrap();
        assert_eq!(source.query_version().unwrap_err().status(), 7);
    }

    #[test]
    fn zero_failure_status_rejected() {
        let config: HarnessConfig =
            toml::from_str("version_source = \"failing\"\nfailure_status = 0").unwrap();
        let err = config.version_source().err().unwrap();
        assert!(err.to_string().contains("failure_status must be non-zero"));
    }

    #[test]
    fn bad_fixed_version_is_an_error() {
        let config: HarnessConfig =
            toml::from_str("version_source = \"fixed\"\nfixed_version = \"v1\"").unwrap();
        assert!(config.version_source().is_err());
    }

    #[test]
    fn unknown_source_rejected() {
        let result: Result<HarnessConfig, _> = toml::from_str("version_source = \"pcan\"");
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = HarnessConfig::from_file("/nonexistent/ecu-model-test.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/ecu-model-test.toml"));
    }
}
