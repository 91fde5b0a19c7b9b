//! Announcer adapter implementations.

pub mod recording_announcer;
mod tracing_announcer;

pub use recording_announcer::{RecordingAnnouncer, Spoken};
pub use tracing_announcer::TracingAnnouncer;
