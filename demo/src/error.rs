use polls::{ConfigError, PollError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error(transparent)]
    Poll(#[from] PollError),
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to encode results: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error("Failed to initialise logging: {0}")]
    Telemetry(String),
}
