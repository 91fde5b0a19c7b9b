//! Process definition models for `.darkroom/processes/*.yaml`.

use crate::step_models::StepDefinition;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A named, ordered list of step definitions.
///
/// Order is execution order.
///
/// # Example
///
/// ```yaml
/// name: B&W Print
/// steps:
///   - long-name: Developer
///     short-name: Dev
///     seconds: 120
///     tweakable: true
///     light: N
///   - long-name: Stop Bath
///     short-name: Stop
///     seconds: 30
///     light: N
///   - long-name: Fixer
///     short-name: Fix
///     seconds: 300
///     tweakable: true
///     light: Y
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct ProcessDefinition {
    /// Name of the process, spoken in phrases.
    pub name: String,

    /// Step definitions in execution order.
    #[serde(default)]
    pub steps: Vec<StepDefinition>,
}
