//! Error types for building and mutating processes and steps.

use thiserror::Error;

/// Errors raised by `Step` and `Process` operations.
///
/// All of these are local and recoverable by the caller. A cancelled
/// countdown is not an error; see `CountdownOutcome::Aborted`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    /// A constructor or setter received a value it cannot accept.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The step's duration is fixed.
    #[error("Step '{step}' is not tweakable")]
    NotTweakable { step: String },

    /// The step's countdown has already started.
    #[error("Step '{step}' has already started running")]
    AlreadyRunning { step: String },

    /// A step lookup fell outside the process.
    #[error("Step index {index} is out of range for a process with {len} steps")]
    IndexOutOfRange { index: usize, len: usize },

    /// A process was defined without steps.
    #[error("Process '{name}' has no steps")]
    EmptyProcess { name: String },

    /// A phrase key name was not recognised.
    #[error("Unknown phrase key: {0}")]
    UnknownKey(String),

    /// No step carries the requested short name.
    #[error("Process '{process}' has no step named '{step}'")]
    UnknownStep { process: String, step: String },
}

/// Type alias for Result with ProcessError.
pub type ProcessResult<T> = Result<T, ProcessError>;
