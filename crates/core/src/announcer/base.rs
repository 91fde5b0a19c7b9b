//! Base Announcer trait and supporting types.

use async_trait::async_trait;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnouncerError {
    #[error("Speech rendering failed: {0}")]
    Render(String),
    #[error("Playback failed: {0}")]
    Playback(String),
}

/// Something that turns phrases into audible (or visible) output.
///
/// Implementations own any caching, rendering and playback. Text passed in
/// is final; apply a [`SpeechMunger`] before calling if the engine needs
/// pronunciation help.
#[async_trait]
pub trait Announcer: Send + Sync {
    /// Start speaking `text` and return without waiting for playback to end.
    ///
    /// A new call may cut off whatever is still playing.
    async fn say(&self, text: &str) -> Result<(), AnnouncerError>;

    /// Speak `text` and return once playback has finished.
    async fn say_wait(&self, text: &str) -> Result<(), AnnouncerError>;

    /// Render `text` ahead of time without playing it.
    async fn prepare(&self, text: &str) -> Result<(), AnnouncerError>;
}

/// Rewrites phrase text into something a speech engine pronounces well.
///
/// Ships with substitutions for darkroom abbreviations; more can be added
/// from configuration. Longer patterns are applied first so that one
/// substitution cannot break a longer one that contains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechMunger {
    substitutions: Vec<(String, String)>,
}

impl SpeechMunger {
    /// Munger with the built-in substitutions only.
    pub fn new() -> Self {
        Self::with_substitutions(&BTreeMap::new())
    }

    /// Munger with the built-in substitutions plus `extra`.
    ///
    /// An entry in `extra` overrides a built-in entry with the same pattern.
    pub fn with_substitutions(extra: &BTreeMap<String, String>) -> Self {
        let mut merged: BTreeMap<String, String> = [
            ("B&W", "Black and White"),
            ("RA-4", "R Eh 4"),
        ]
        .into_iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect();
        merged.extend(extra.iter().map(|(from, to)| (from.clone(), to.clone())));

        let mut substitutions: Vec<(String, String)> = merged
            .into_iter()
            .filter(|(from, _)| !from.is_empty())
            .collect();
        substitutions.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

        Self { substitutions }
    }

    pub fn munge(&self, text: &str) -> String {
        self.substitutions
            .iter()
            .fold(text.to_string(), |acc, (from, to)| acc.replace(from.as_str(), to))
    }
}

impl Default for SpeechMunger {
    fn default() -> Self {
        Self::new()
    }
}
