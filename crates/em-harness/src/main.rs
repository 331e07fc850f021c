//! ecu-model-test — manual harness for the ecu_models C ABI.
//!
//! Prints the toolkit version and the mock ECU JSON, optionally hammering
//! `get_mock_ecus` from many threads to check the output never varies.
//! Exits non-zero if the library returned NULL or the output varied.

use em_harness::config::{HarnessConfig, LogFormat};
use em_harness::runner;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── Load config ─────────────────────────────────────────────
    let config = match std::env::args().nth(1) {
        Some(path) => HarnessConfig::from_file(&path)?,
        None => HarnessConfig::default(),
    };

    // Logs go to stderr so stdout carries only the report.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        source = ?config.version_source,
        "ecu-model-test starting"
    );

    // ── Version source ──────────────────────────────────────────
    if let Some(source) = config.version_source()? {
        ecu_models::install_version_source(source)?;
    }

    // ── Run ─────────────────────────────────────────────────────
    let outcome = runner::run(&config, &mut std::io::stdout()).await?;

    tracing::info!(status = outcome.version_status, "ecu-model-test finished");
    outcome.check()
}
