//! Events emitted by a running session.
//!
//! A session runs the steps of one process in order. Observers (the CLI,
//! a UI, a test) receive a stream of `Event`s over a channel and decide
//! for themselves how to display them.
//!
//! Uses tagged enum serialization for TypeScript compatibility:
//! ```json
//! {
//!   "type": "tick",
//!   "payload": {
//!     "session_id": "uuid-here",
//!     "step_index": 0,
//!     "remaining": 42
//!   }
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::step_models::LightMode;

/// Events sent from the session runner to its observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Event {
    /// A session for a process has started.
    SessionStarted {
        #[ts(type = "string")]
        session_id: Uuid,
        process_name: String,
        step_count: usize,
        started_at: DateTime<Utc>,
    },

    /// A step became the active step.
    StepStarted {
        #[ts(type = "string")]
        session_id: Uuid,
        step_index: usize,
        short_name: String,
        light_mode: LightMode,
        seconds: u32,
    },

    /// Once-per-second countdown notification.
    Tick {
        #[ts(type = "string")]
        session_id: Uuid,
        step_index: usize,
        remaining: u32,
    },

    /// A phrase was handed to the announcer.
    Announcement {
        #[ts(type = "string")]
        session_id: Uuid,
        text: String,
    },

    /// The active step ran to the end.
    StepCompleted {
        #[ts(type = "string")]
        session_id: Uuid,
        step_index: usize,
    },

    /// The active step was cancelled.
    StepAborted {
        #[ts(type = "string")]
        session_id: Uuid,
        step_index: usize,
    },

    /// Every step ran to the end.
    SessionCompleted {
        #[ts(type = "string")]
        session_id: Uuid,
    },

    /// The session stopped early because a step was cancelled.
    SessionAborted {
        #[ts(type = "string")]
        session_id: Uuid,
        step_index: usize,
    },
}

impl Event {
    /// The session this event belongs to.
    pub fn session_id(&self) -> Uuid {
        match self {
            Event::SessionStarted { session_id, .. }
            | Event::StepStarted { session_id, .. }
            | Event::Tick { session_id, .. }
            | Event::Announcement { session_id, .. }
            | Event::StepCompleted { session_id, .. }
            | Event::StepAborted { session_id, .. }
            | Event::SessionCompleted { session_id }
            | Event::SessionAborted { session_id, .. } => *session_id,
        }
    }

    /// Whether this is the last event of a session.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Event::SessionCompleted { .. } | Event::SessionAborted { .. }
        )
    }
}
