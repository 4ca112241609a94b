pub mod config;
pub mod error;
pub mod manager;
pub mod models;
pub mod tally;

pub use config::{PollConfig, VoterPolicy};
pub use error::{ConfigError, ErrorCode, PollError, Result};
pub use manager::PollManager;
pub use models::*;
pub use tally::Tally;
