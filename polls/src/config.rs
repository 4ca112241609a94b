use serde::{Serialize, Deserialize};
use std::env::{self, VarError};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

pub const VOTER_POLICY_ENV: &str = "POLLS_VOTER_POLICY";

/// What happens to a poll's voter records when its options are replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VoterPolicy {
    /// Anyone who voted before the update stays barred from voting after it.
    #[default]
    Retain,
    /// Updating a poll forgets who voted, so everyone may vote again.
    ResetOnUpdate,
}

impl FromStr for VoterPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" => Ok(VoterPolicy::Retain),
            "reset-on-update" | "reset_on_update" => Ok(VoterPolicy::ResetOnUpdate),
            _ => Err(ConfigError::InvalidVoterPolicy(s.to_owned())),
        }
    }
}

impl fmt::Display for VoterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoterPolicy::Retain => f.write_str("retain"),
            VoterPolicy::ResetOnUpdate => f.write_str("reset-on-update"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PollConfig {
    pub voter_policy: VoterPolicy,
}

impl PollConfig {
    /// Reads `POLLS_VOTER_POLICY`; an unset variable keeps the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env::var(VOTER_POLICY_ENV))
    }

    fn from_lookup(voter_policy: Result<String, VarError>) -> Result<Self, ConfigError> {
        let voter_policy = match voter_policy {
            Ok(value) => value.parse()?,
            Err(VarError::NotPresent) => VoterPolicy::default(),
            Err(VarError::NotUnicode(_)) => return Err(ConfigError::NotUnicode(VOTER_POLICY_ENV)),
        };
        Ok(Self { voter_policy })
    }

    pub fn with_voter_policy(mut self, voter_policy: VoterPolicy) -> Self {
        self.voter_policy = voter_policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn test_parse_voter_policy() {
        assert_eq!("retain".parse::<VoterPolicy>(), Ok(VoterPolicy::Retain));
        assert_eq!(" Reset-On-Update ".parse::<VoterPolicy>(), Ok(VoterPolicy::ResetOnUpdate));
        assert_eq!("reset_on_update".parse::<VoterPolicy>(), Ok(VoterPolicy::ResetOnUpdate));
        assert!(matches!(
            "forget".parse::<VoterPolicy>(),
            Err(ConfigError::InvalidVoterPolicy(s)) if s == "forget"
        ));
    }

    #[test]
    fn test_display_matches_parse() {
        for policy in [VoterPolicy::Retain, VoterPolicy::ResetOnUpdate] {
            assert_eq!(policy.to_string().parse::<VoterPolicy>(), Ok(policy));
        }
    }

    #[test]
    fn test_lookup_voter_policy() {
        assert_eq!(PollConfig::from_lookup(Err(VarError::NotPresent)), Ok(PollConfig::default()));
        assert_eq!(
            PollConfig::from_lookup(Ok("reset-on-update".into())).map(|c| c.voter_policy),
            Ok(VoterPolicy::ResetOnUpdate)
        );
        assert_eq!(
            PollConfig::from_lookup(Ok("bogus".into())),
            Err(ConfigError::InvalidVoterPolicy("bogus".into()))
        );
        assert_eq!(
            PollConfig::from_lookup(Err(VarError::NotUnicode(OsString::from("retain")))),
            Err(ConfigError::NotUnicode(VOTER_POLICY_ENV))
        );
    }

    #[test]
    fn test_deserialize_config() {
        let config: PollConfig = serde_json::from_str(r#"{"voterPolicy":"reset-on-update"}"#).unwrap();
        assert_eq!(config.voter_policy, VoterPolicy::ResetOnUpdate);

        let config: PollConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PollConfig::default());
    }
}
