//! Global configuration models for `.darkroom/config.toml`.

use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use ts_rs::TS;

/// Represents global settings from `.darkroom/config.toml`.
///
/// # Example
///
/// ```toml
/// # .darkroom/config.toml
/// [narration]
/// minute-marks = true
/// final-marks = [30, 10]
///
/// [speech.substitutions]
/// "C-41" = "C 41"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
pub struct GlobalConfig {
    /// Which ticks are spoken aloud.
    #[serde(default)]
    pub narration: NarrationConfig,

    /// Text clean-up before phrases reach the announcer.
    #[serde(default)]
    pub speech: SpeechConfig,
}

/// Controls which countdown ticks turn into "time left" announcements.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(rename_all = "kebab-case", default)]
pub struct NarrationConfig {
    /// Announce every whole minute remaining.
    pub minute_marks: bool,

    /// Additional seconds-remaining values to announce.
    pub final_marks: Vec<u32>,
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            minute_marks: true,
            final_marks: vec![30, 10],
        }
    }
}

/// Substitutions applied to phrase text before it is spoken.
///
/// These are added on top of the built-in substitutions.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
pub struct SpeechConfig {
    #[serde(default)]
    pub substitutions: BTreeMap<String, String>,
}
