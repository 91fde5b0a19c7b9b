//! Announcer abstraction.
//!
//! The countdown core never speaks. A session hands finished phrases to an
//! `Announcer` implementation, which owns rendering and playback.

pub mod adapters;
pub mod base;

pub use adapters::{RecordingAnnouncer, Spoken, TracingAnnouncer};
pub use base::{Announcer, AnnouncerError, SpeechMunger};
