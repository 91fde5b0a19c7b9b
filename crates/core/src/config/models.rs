//! Configuration models that aggregate all settings.

use dt_protocol::config_models::GlobalConfig;
use dt_protocol::process_models::ProcessDefinition;

/// Unified application configuration loaded from the `.darkroom/` directory.
///
/// This structure aggregates all configuration sources:
/// - `config.toml`: Global settings
/// - `processes/*.yaml`: Process definitions
///
/// # Example
///
/// ```rust,no_run
/// use dt_core::config::loader::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new(".")).await?;
/// println!("Loaded {} processes", config.processes.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Global settings from `config.toml`.
    pub global: GlobalConfig,

    /// All process definitions loaded from `processes/*.yaml`.
    pub processes: Vec<ProcessDefinition>,
}

impl AppConfig {
    /// Look up a process definition by name, ignoring case.
    pub fn find_process(&self, name: &str) -> Option<&ProcessDefinition> {
        self.processes
            .iter()
            .find(|process| process.name.eq_ignore_ascii_case(name))
    }
}
