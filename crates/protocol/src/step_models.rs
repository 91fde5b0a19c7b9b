//! Step-level models.
//!
//! A step definition is the raw, unvalidated description of one timed phase
//! of a process. Validation happens in `dt-core` when a `Step` is built.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Indicator state while a step is active.
///
/// In a darkroom this tells the safelight/backlight controller whether
/// the paper can be exposed to light.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "lowercase")]
pub enum LightMode {
    /// Light must stay off.
    Off,

    /// Full light is allowed.
    On,

    /// Dimmed light is allowed.
    Half,
}

impl LightMode {
    /// Parse a single-letter light code from a step definition.
    ///
    /// Codes are case-insensitive: `Y` is on, `H` is half and `N` is off.
    /// Returns `None` for anything else.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "Y" => Some(LightMode::On),
            "H" => Some(LightMode::Half),
            "N" => Some(LightMode::Off),
            _ => None,
        }
    }

    /// The single-letter code for this mode.
    pub fn code(self) -> &'static str {
        match self {
            LightMode::On => "Y",
            LightMode::Half => "H",
            LightMode::Off => "N",
        }
    }

    /// Whether any light is allowed.
    pub fn is_lit(self) -> bool {
        !matches!(self, LightMode::Off)
    }
}

impl fmt::Display for LightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LightMode::Off => "off",
            LightMode::On => "on",
            LightMode::Half => "half",
        };
        f.write_str(label)
    }
}

/// Raw definition of one step, as supplied by a definition source.
///
/// Field order mirrors the tabular source the definitions usually come
/// from: long name, short name, seconds, tweakable flag, light code.
///
/// # Example
///
/// ```yaml
/// long-name: Developer
/// short-name: Dev
/// seconds: 120
/// tweakable: true
/// light: Y
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(rename_all = "kebab-case")]
pub struct StepDefinition {
    /// Display name used in spoken phrases, e.g. "Developer".
    pub long_name: String,

    /// Compact name used for lookups and the command line, e.g. "Dev".
    pub short_name: String,

    /// Duration in seconds.
    ///
    /// Signed so that zero or negative values survive deserialization and
    /// are rejected by step validation with a proper error.
    pub seconds: i64,

    /// Whether the duration may be adjusted before the step runs.
    #[serde(default)]
    pub tweakable: bool,

    /// Light code (`Y`, `H` or `N`).
    pub light: String,
}

impl StepDefinition {
    /// Build a definition from the five fields of a source row.
    pub fn new(
        long_name: impl Into<String>,
        short_name: impl Into<String>,
        seconds: i64,
        tweakable: bool,
        light: impl Into<String>,
    ) -> Self {
        Self {
            long_name: long_name.into(),
            short_name: short_name.into(),
            seconds,
            tweakable,
            light: light.into(),
        }
    }
}

/// Keys of the phrases every step can produce.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "camelCase")]
pub enum PhraseKey {
    /// Announced before the countdown starts.
    ReadyToStart,

    /// Announced during the countdown; needs the seconds remaining.
    TimeLeft,

    /// Announced when the paper may be exposed to light again.
    LightSafe,

    /// Announced when the countdown was cancelled.
    Aborted,

    /// Announced when the countdown ran to the end.
    Complete,
}

impl PhraseKey {
    /// All keys, in announcement order.
    pub const ALL: [PhraseKey; 5] = [
        PhraseKey::ReadyToStart,
        PhraseKey::TimeLeft,
        PhraseKey::LightSafe,
        PhraseKey::Aborted,
        PhraseKey::Complete,
    ];

    /// Parse a key name in camelCase (`readyToStart`) or snake_case
    /// (`ready_to_start`). Returns `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "readyToStart" | "ready_to_start" => Some(PhraseKey::ReadyToStart),
            "timeLeft" | "time_left" => Some(PhraseKey::TimeLeft),
            "lightSafe" | "light_safe" => Some(PhraseKey::LightSafe),
            "aborted" => Some(PhraseKey::Aborted),
            "complete" => Some(PhraseKey::Complete),
            _ => None,
        }
    }
}

/// Lifecycle of a step's countdown.
///
/// Idle -> Running -> Completed | Aborted
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CountdownState {
    /// Countdown has not started; the duration may still be tweaked.
    Idle,

    /// Countdown is ticking.
    Running,

    /// Countdown ran to zero.
    Completed,

    /// Countdown was cancelled by the caller.
    Aborted,
}

/// Terminal result of one countdown run.
///
/// `Aborted` is a normal outcome, not an error.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CountdownOutcome {
    Completed,
    Aborted,
}

impl From<CountdownOutcome> for CountdownState {
    fn from(outcome: CountdownOutcome) -> Self {
        match outcome {
            CountdownOutcome::Completed => CountdownState::Completed,
            CountdownOutcome::Aborted => CountdownState::Aborted,
        }
    }
}
