use std::collections::HashMap;
use serde::{Serialize, Deserialize};

use crate::error::{PollError, Result};
use crate::models::OptionCount;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct OptionSlot {
    votes: u32,
    order: usize,
}

/// Vote counts for one poll, keyed by option label. Reads come back in the
/// order the options were first given; a repeated label shares the slot of
/// its first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    slots: HashMap<String, OptionSlot>,
}

impl Tally {
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut slots = HashMap::new();
        for option in options {
            let order = slots.len();
            slots.entry(option.as_ref().to_owned())
                .or_insert(OptionSlot { votes: 0, order });
        }
        Self { slots }
    }

    pub fn contains(&self, option: &str) -> bool {
        self.slots.contains_key(option)
    }

    pub fn get(&self, option: &str) -> Option<u32> {
        self.slots.get(option).map(|slot| slot.votes)
    }

    /// Adds one vote for `option` and returns its new count. A count pinned
    /// at `u32::MAX` stays there.
    pub fn record(&mut self, option: &str) -> Result<u32> {
        let slot = self.slots.get_mut(option).ok_or(PollError::InvalidOption)?;
        slot.votes = slot.votes.saturating_add(1);
        Ok(slot.votes)
    }

    pub fn total(&self) -> u64 {
        self.slots.values().map(|slot| u64::from(slot.votes)).sum()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn entries(&self) -> Vec<OptionCount> {
        let mut ordered: Vec<_> = self.slots.iter().collect();
        ordered.sort_unstable_by_key(|(_, slot)| slot.order);
        ordered.into_iter()
            .map(|(option, slot)| OptionCount { option: option.clone(), votes: slot.votes })
            .collect()
    }
}
