use serde::{Serialize, Deserialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    #[error("Invalid input provided")]
    InvalidInput,
    #[error("Resource not found")]
    NotFound,
    #[error("Resource conflict")]
    Conflict,
}

/// Every way a poll operation can be refused. The `Display` text of each
/// variant is the message callers have always shown to users.
#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PollError {
    #[error("Poll not found.")]
    PollNotFound,
    #[error("User has already voted.")]
    AlreadyVoted,
    #[error("Invalid option.")]
    InvalidOption,
}

impl PollError {
    pub const fn code(self) -> ErrorCode {
        match self {
            PollError::PollNotFound => ErrorCode::NotFound,
            PollError::AlreadyVoted => ErrorCode::Conflict,
            PollError::InvalidOption => ErrorCode::InvalidInput,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown voter policy: {0} (expected \"retain\" or \"reset-on-update\")")]
    InvalidVoterPolicy(String),
    #[error("Environment variable {0} is not valid unicode")]
    NotUnicode(&'static str),
}

pub type Result<T> = std::result::Result<T, PollError>;
