//! Announcer that writes phrases to the log.

use crate::announcer::base::{Announcer, AnnouncerError};
use async_trait::async_trait;

/// Logs every phrase at info level instead of speaking it.
///
/// Useful on machines without audio and as a fallback during development.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnnouncer;

#[async_trait]
impl Announcer for TracingAnnouncer {
    async fn say(&self, text: &str) -> Result<(), AnnouncerError> {
        tracing::info!(target: "announcer", text, "say");
        Ok(())
    }

    async fn say_wait(&self, text: &str) -> Result<(), AnnouncerError> {
        tracing::info!(target: "announcer", text, "say_wait");
        Ok(())
    }

    async fn prepare(&self, text: &str) -> Result<(), AnnouncerError> {
        tracing::debug!(target: "announcer", text, "prepare");
        Ok(())
    }
}
