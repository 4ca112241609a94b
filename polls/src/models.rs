use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;

use crate::error::PollError;

/// Identifier of a poll, unique for the lifetime of its manager. Renders as
/// its decimal string ("1", "2", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PollId(u64);

impl PollId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for PollId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PollId {
    type Err = PollError;

    /// Only the canonical rendering names a poll, so "01" or " 1" are unknown.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = s.parse().map_err(|_| PollError::PollNotFound)?;
        if value.to_string() != s {
            return Err(PollError::PollNotFound);
        }
        Ok(Self(value))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: PollId,
    pub question: String,
    pub options: Vec<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: Option<OffsetDateTime>,
}

impl Poll {
    pub fn new(id: PollId, question: String, options: Vec<String>) -> Self {
        Self {
            id,
            question,
            options,
            created_at: OffsetDateTime::now_utc(),
            updated_at: None,
        }
    }

    pub fn replace(&mut self, question: String, options: Vec<String>) {
        self.question = question;
        self.options = options;
        self.updated_at = Some(OffsetDateTime::now_utc());
    }
}

/// Proof that a user voted in a poll. Its presence in the manager is what bars
/// the same user from voting there again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoteReceipt {
    pub poll_id: PollId,
    pub user_id: String,
    pub option: String,
    pub cast_at: OffsetDateTime,
}

impl VoteReceipt {
    pub fn new(poll_id: PollId, user_id: impl Into<String>, option: impl Into<String>) -> Self {
        Self {
            poll_id,
            user_id: user_id.into(),
            option: option.into(),
            cast_at: OffsetDateTime::now_utc(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OptionCount {
    pub option: String,
    pub votes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PollResults {
    pub poll_id: PollId,
    pub question: String,
    pub tallies: Vec<OptionCount>,
    pub total_votes: u64,
}

impl PollResults {
    /// `(option, votes)` pairs in the order the options were given.
    pub fn pairs(&self) -> Vec<(&str, u32)> {
        self.tallies.iter()
            .map(|t| (t.option.as_str(), t.votes))
            .collect()
    }

    pub fn votes_for(&self, option: &str) -> Option<u32> {
        self.tallies.iter()
            .find(|t| t.option == option)
            .map(|t| t.votes)
    }
}

impl fmt::Display for PollResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, t) in self.tallies.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", t.option, t.votes)?;
        }
        write!(f, "]")
    }
}

/// Successful outcome of a mutating call, for callers that report status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ack {
    VoteCast,
    PollUpdated,
    PollDeleted,
}

impl fmt::Display for Ack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Ack::VoteCast => "Vote cast successfully.",
            Ack::PollUpdated => "Poll updated successfully.",
            Ack::PollDeleted => "Poll deleted successfully.",
        };
        f.write_str(message)
    }
}
