//! Configuration file loader for the `.darkroom/` directory structure.
//!
//! This module loads and parses all configuration files from `.darkroom/`:
//! - `config.toml`: Global settings
//! - `processes/*.yaml` (or `*.yml`): Process definitions

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use crate::config::models::AppConfig;
use dt_protocol::config_models::GlobalConfig;
use dt_protocol::process_models::ProcessDefinition;
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

/// Name of the configuration directory under a project root.
pub const CONFIG_DIR: &str = ".darkroom";

/// Loads all configuration from the `.darkroom/` directory.
///
/// # Arguments
///
/// * `root` - Root directory containing the `.darkroom/` folder
///
/// # Returns
///
/// An `AppConfig` containing all loaded configuration. If directories or files
/// are missing, returns default configuration rather than an error.
/// Process definitions are returned in file name order.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - Files exist but cannot be read
/// - Files have invalid TOML or YAML syntax
/// - A process has an empty name or two processes share a name
///
/// Step fields are not validated here; building a `Process` does that.
pub async fn load_config(root: &Path) -> ConfigResult<AppConfig> {
    let config_dir = root.join(CONFIG_DIR);

    if !config_dir.exists() {
        tracing::debug!(path = %config_dir.display(), "No config directory, using defaults");
        return Ok(AppConfig::default());
    }

    let global = load_global_config(&config_dir)?;
    let processes = load_processes(&config_dir)?;

    tracing::debug!(
        path = %config_dir.display(),
        processes = processes.len(),
        "Configuration loaded"
    );

    Ok(AppConfig { global, processes })
}

/// Loads global configuration from `config.toml`.
fn load_global_config(config_dir: &Path) -> ConfigResult<GlobalConfig> {
    let config_path = config_dir.join("config.toml");

    if !config_path.exists() {
        return Ok(GlobalConfig::default());
    }

    let content =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.clone(),
            source,
        })?;

    let config: GlobalConfig =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: config_path,
            source,
        })?;

    Ok(config)
}

/// Loads all process definitions from `processes/*.yaml`.
fn load_processes(config_dir: &Path) -> ConfigResult<Vec<ProcessDefinition>> {
    let processes_dir = config_dir.join("processes");

    if !processes_dir.exists() {
        return Ok(Vec::new());
    }

    let mut processes = Vec::new();
    let mut seen = HashSet::new();

    for entry in WalkDir::new(&processes_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ConfigError::DirectoryWalk {
            path: processes_dir.clone(),
            source,
        })?;

        let path = entry.path();

        let ext = path.extension().and_then(|s| s.to_str());
        if ext != Some("yaml") && ext != Some("yml") {
            continue;
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let process: ProcessDefinition =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::YamlParse {
                path: path.to_path_buf(),
                source,
            })?;

        if process.name.trim().is_empty() {
            return Err(ConfigError::InvalidConfig {
                path: path.to_path_buf(),
                reason: "process name is empty".to_string(),
            });
        }
        if !seen.insert(process.name.to_lowercase()) {
            return Err(ConfigError::InvalidConfig {
                path: path.to_path_buf(),
                reason: format!("duplicate process name '{}'", process.name),
            });
        }

        processes.push(process);
    }

    Ok(processes)
}
