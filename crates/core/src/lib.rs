//! # dt-core
//!
//! Step countdown engine and process model for darkroom-timer.
//!
//! This crate provides:
//! - The `Process` / `Step` model with guarded duration changes and phrases
//! - A cancellable, drift-correcting countdown engine
//! - Announcer and light-controller seams for narration and indicators
//! - A session runner that ties a process to those seams
//! - Configuration loading from the `.darkroom/` directory
//!
//! ## Modules
//!
//! - [`process`]: Steps, processes, phrases and their errors
//! - [`countdown`]: Countdown engine and cancellation token
//! - [`announcer`]: Announcer trait and adapter implementations
//! - [`light`]: Light controller trait and adapters
//! - [`narration`]: Which ticks get announced
//! - [`engine`]: Session runner
//! - [`config`]: Configuration loading and management

pub mod announcer;
pub mod config;
pub mod countdown;
pub mod engine;
pub mod light;
pub mod narration;
pub mod process;
