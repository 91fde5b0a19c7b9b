//! Narration policy: which countdown ticks are worth announcing.
//!
//! The countdown reports every second; speaking every second would be
//! unbearable. The policy picks round marks instead.

use dt_protocol::NarrationConfig;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrationPolicy {
    minute_marks: bool,
    final_marks: BTreeSet<u32>,
}

impl NarrationPolicy {
    pub fn new(minute_marks: bool, final_marks: impl IntoIterator<Item = u32>) -> Self {
        Self {
            minute_marks,
            final_marks: final_marks.into_iter().collect(),
        }
    }

    /// A policy that never announces time left.
    pub fn silent() -> Self {
        Self::new(false, [])
    }

    /// Whether a tick with `remaining` seconds left in a step of
    /// `step_seconds` should be announced.
    ///
    /// The first tick is skipped because the ready phrase already states the
    /// full duration, and zero is skipped because completion has its own
    /// phrase.
    pub fn should_announce(&self, remaining: u32, step_seconds: u32) -> bool {
        if remaining == 0 || remaining >= step_seconds {
            return false;
        }
        (self.minute_marks && remaining % 60 == 0) || self.final_marks.contains(&remaining)
    }
}

impl Default for NarrationPolicy {
    fn default() -> Self {
        Self::from(&NarrationConfig::default())
    }
}

impl From<&NarrationConfig> for NarrationPolicy {
    fn from(config: &NarrationConfig) -> Self {
        Self::new(config.minute_marks, config.final_marks.iter().copied())
    }
}
