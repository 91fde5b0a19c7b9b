//! # dt-protocol
//!
//! Data models shared by the darkroom-timer crates.
//!
//! This crate defines:
//! - Step and process definitions as they arrive from definition files
//! - Light modes, phrase keys and countdown states
//! - Global configuration from `config.toml`
//! - The event stream emitted while a process session runs
//!
//! ## Modules
//!
//! - [`step_models`]: Step definitions, light modes, phrase keys, countdown states
//! - [`process_models`]: Process definitions
//! - [`config_models`]: Global configuration from config.toml
//! - [`ipc`]: Events sent from a running session to its observers
//!
//! ## Design Principles
//!
//! - Minimal dependencies: only serde, ts-rs, uuid and chrono
//! - TypeScript generation: all types derive `TS` for client compatibility
//! - Independent compilation: no dependencies on other darkroom-timer crates

pub mod config_models;
pub mod ipc;
pub mod process_models;
pub mod step_models;

// Re-export all public types for convenience
pub use config_models::*;
pub use ipc::*;
pub use process_models::*;
pub use step_models::*;
