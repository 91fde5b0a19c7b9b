//! Common test utilities shared by the integration tests.
//!
//! This module provides:
//! - Test fixtures (step definitions, processes, config directories)
//! - Event inspection helpers

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
