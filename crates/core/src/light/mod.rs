//! Light/indicator controller seam.
//!
//! A session tells the controller which [`LightMode`] the active step
//! needs. How that reaches a safelight, backlight or relay is up to the
//! implementation.

use async_trait::async_trait;
use dt_protocol::LightMode;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LightError {
    #[error("Light controller unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait LightController: Send + Sync {
    /// Switch the indicator to `mode`.
    async fn apply(&self, mode: LightMode) -> Result<(), LightError>;
}

/// Logs light changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLightController;

#[async_trait]
impl LightController for TracingLightController {
    async fn apply(&self, mode: LightMode) -> Result<(), LightError> {
        tracing::info!(target: "light", %mode, "Light mode applied");
        Ok(())
    }
}

/// Records every mode it is given. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingLightController {
    applied: Arc<Mutex<Vec<LightMode>>>,
}

impl RecordingLightController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> Vec<LightMode> {
        self.applied
            .lock()
            .map(|applied| applied.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LightController for RecordingLightController {
    async fn apply(&self, mode: LightMode) -> Result<(), LightError> {
        if let Ok(mut applied) = self.applied.lock() {
            applied.push(mode);
        }
        Ok(())
    }
}
