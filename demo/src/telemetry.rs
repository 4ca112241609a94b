use tracing_subscriber::{fmt, EnvFilter};

use crate::error::DemoError;

pub const DEFAULT_FILTER: &str = "poll_demo=info,polls=info";

/// Installs the global subscriber. `RUST_LOG` overrides `DEFAULT_FILTER`;
/// output goes to stderr so stdout carries only the transcript.
pub fn init_tracing() -> Result<(), DemoError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .map_err(|e| DemoError::Telemetry(e.to_string()))?;

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| DemoError::Telemetry(e.to_string()))
}
