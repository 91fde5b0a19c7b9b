//! Errors raised while reading `.darkroom/`.

use std::path::PathBuf;
use thiserror::Error;

/// A problem with `config.toml` or one of the process definition files.
///
/// Every variant names the file or directory it came from so the cli can
/// point the user at it.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `config.toml` or a process file exists but could not be read.
    #[error("Cannot read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// `config.toml` is not valid TOML or has fields of the wrong type.
    #[error("Bad narration/speech settings in {path}: {source}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A file under `.darkroom/processes` is not a valid process definition.
    #[error("Bad process definition in {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Listing `.darkroom/processes` failed part way.
    #[error("Cannot scan process directory {path}: {source}")]
    DirectoryWalk {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// A process file parsed but breaks a loader rule (empty or duplicate name).
    #[error("Rejected process file {path}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
