use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

use crate::config::{PollConfig, VoterPolicy};
use crate::error::{PollError, Result};
use crate::models::{Poll, PollId, PollResults, VoteReceipt};
use crate::tally::Tally;

/// Owns every poll, its tally and the record of who voted in it.
///
/// Identifiers come from a counter starting at 1 that never goes backwards,
/// so a deleted poll's id is never handed out again.
#[derive(Debug)]
pub struct PollManager {
    polls: HashMap<PollId, Poll>,
    tallies: HashMap<PollId, Tally>,
    voters: HashMap<PollId, HashMap<String, VoteReceipt>>,
    next_id: u64,
    config: PollConfig,
}

impl Default for PollManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PollManager {
    pub fn new() -> Self {
        Self::with_config(PollConfig::default())
    }

    pub fn with_config(config: PollConfig) -> Self {
        info!(voter_policy = %config.voter_policy, "Poll manager ready");
        Self {
            polls: HashMap::new(),
            tallies: HashMap::new(),
            voters: HashMap::new(),
            next_id: 1,
            config,
        }
    }

    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    pub fn create_poll<Q, I>(&mut self, question: Q, options: I) -> PollId
    where
        Q: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let id = PollId::new(self.next_id);
        self.next_id += 1;

        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        self.tallies.insert(id, Tally::new(&options));
        let poll = Poll::new(id, question.into(), options);
        debug!(poll_id = %id, options = poll.options.len(), "Created poll");
        self.polls.insert(id, poll);
        id
    }

    /// Replaces the question and options and zeroes every count. Whether
    /// earlier voters may vote again depends on the configured `VoterPolicy`.
    #[instrument(skip(self, poll_id, question, options), fields(poll_id = %poll_id))]
    pub fn update_poll<Q, I>(&mut self, poll_id: PollId, question: Q, options: I) -> Result<()>
    where
        Q: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let poll = self.polls.get_mut(&poll_id).ok_or(PollError::PollNotFound)?;
        poll.replace(question.into(), options.into_iter().map(Into::into).collect());
        self.tallies.insert(poll_id, Tally::new(&poll.options));

        if self.config.voter_policy == VoterPolicy::ResetOnUpdate {
            if let Some(cleared) = self.voters.remove(&poll_id) {
                debug!(cleared = cleared.len(), "Cleared voter records");
            }
        }

        debug!(options = poll.options.len(), "Updated poll");
        Ok(())
    }

    #[instrument(skip(self, poll_id), fields(poll_id = %poll_id))]
    pub fn delete_poll(&mut self, poll_id: PollId) -> Result<()> {
        self.polls.remove(&poll_id).ok_or(PollError::PollNotFound)?;
        self.tallies.remove(&poll_id);
        self.voters.remove(&poll_id);
        debug!("Deleted poll");
        Ok(())
    }

    /// Checks, in order, that the poll exists, that the user has not voted in
    /// it yet and that `option` is one of its current options. A refused vote
    /// changes nothing.
    #[instrument(skip(self, poll_id), fields(poll_id = %poll_id))]
    pub fn vote_in_poll(&mut self, poll_id: PollId, user_id: &str, option: &str) -> Result<VoteReceipt> {
        let tally = self.tallies.get_mut(&poll_id).ok_or(PollError::PollNotFound)?;

        let already_voted = self.voters.get(&poll_id)
            .is_some_and(|voters| voters.contains_key(user_id));
        if already_voted {
            let err = PollError::AlreadyVoted;
            warn!(code = ?err.code(), "Rejected repeat vote");
            return Err(err);
        }

        let votes = tally.record(option)
            .inspect_err(|err| warn!(code = ?err.code(), "Rejected vote for unknown option"))?;

        let receipt = VoteReceipt::new(poll_id, user_id, option);
        self.voters.entry(poll_id)
            .or_default()
            .insert(user_id.to_owned(), receipt.clone());
        debug!(votes, "Vote cast");
        Ok(receipt)
    }

    pub fn view_poll_results(&self, poll_id: PollId) -> Result<PollResults> {
        let poll = self.polls.get(&poll_id).ok_or(PollError::PollNotFound)?;
        let tally = self.tallies.get(&poll_id).ok_or(PollError::PollNotFound)?;
        Ok(PollResults {
            poll_id,
            question: poll.question.clone(),
            tallies: tally.entries(),
            total_votes: tally.total(),
        })
    }

    pub fn get_poll(&self, poll_id: PollId) -> Result<&Poll> {
        self.polls.get(&poll_id).ok_or(PollError::PollNotFound)
    }

    /// The vote `user_id` cast in the poll, if any. Under the retain policy
    /// this may name an option the poll no longer offers.
    pub fn user_vote(&self, poll_id: PollId, user_id: &str) -> Result<Option<&VoteReceipt>> {
        if !self.polls.contains_key(&poll_id) {
            return Err(PollError::PollNotFound);
        }
        Ok(self.voters.get(&poll_id).and_then(|voters| voters.get(user_id)))
    }

    pub fn has_voted(&self, poll_id: PollId, user_id: &str) -> Result<bool> {
        self.user_vote(poll_id, user_id).map(|vote| vote.is_some())
    }

    pub fn len(&self) -> usize {
        self.polls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polls.is_empty()
    }
}
