//! Announcer that records phrases in memory.

use crate::announcer::base::{Announcer, AnnouncerError};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// A phrase as it reached the announcer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Spoken {
    Say(String),
    SayWait(String),
    Prepare(String),
}

impl Spoken {
    pub fn text(&self) -> &str {
        match self {
            Spoken::Say(text) | Spoken::SayWait(text) | Spoken::Prepare(text) => text,
        }
    }
}

/// Keeps every call in order. Clones share the same record.
///
/// `failing()` builds one that records calls but reports each as a playback
/// failure.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnnouncer {
    spoken: Arc<Mutex<Vec<Spoken>>>,
    fail: bool,
}

impl RecordingAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            spoken: Arc::default(),
            fail: true,
        }
    }

    /// Everything recorded so far.
    pub fn spoken(&self) -> Vec<Spoken> {
        self.spoken
            .lock()
            .map(|spoken| spoken.clone())
            .unwrap_or_default()
    }

    /// Text of the `say` and `say_wait` calls, skipping `prepare`.
    pub fn said(&self) -> Vec<String> {
        self.spoken()
            .into_iter()
            .filter(|s| !matches!(s, Spoken::Prepare(_)))
            .map(|s| s.text().to_string())
            .collect()
    }

    fn record(&self, entry: Spoken) -> Result<(), AnnouncerError> {
        if let Ok(mut spoken) = self.spoken.lock() {
            spoken.push(entry);
        }
        if self.fail {
            return Err(AnnouncerError::Playback("recording announcer set to fail".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Announcer for RecordingAnnouncer {
    async fn say(&self, text: &str) -> Result<(), AnnouncerError> {
        self.record(Spoken::Say(text.to_string()))
    }

    async fn say_wait(&self, text: &str) -> Result<(), AnnouncerError> {
        self.record(Spoken::SayWait(text.to_string()))
    }

    async fn prepare(&self, text: &str) -> Result<(), AnnouncerError> {
        self.record(Spoken::Prepare(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recording_announcer_keeps_order() {
        let announcer = RecordingAnnouncer::new();
        let shared = announcer.clone();

        announcer.prepare("one").await.unwrap();
        announcer.say_wait("two").await.unwrap();
        announcer.say("three").await.unwrap();

        assert_eq!(
            shared.spoken(),
            vec![
                Spoken::Prepare("one".to_string()),
                Spoken::SayWait("two".to_string()),
                Spoken::Say("three".to_string()),
            ]
        );
        assert_eq!(shared.said(), vec!["two".to_string(), "three".to_string()]);
    }

    #[tokio::test]
    async fn test_failing_announcer_still_records() {
        let announcer = RecordingAnnouncer::failing();

        let result = announcer.say("hello").await;

        assert!(matches!(result, Err(AnnouncerError::Playback(_))));
        assert_eq!(announcer.said(), vec!["hello".to_string()]);
    }
}
