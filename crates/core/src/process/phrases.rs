//! Phrase templates spoken around a step's countdown.
//!
//! Everything here is a pure function of the process name, the step's
//! long name and its duration, so phrases can be tested without a clock.

use super::error::{ProcessError, ProcessResult};
use dt_protocol::PhraseKey;

/// Render a number of seconds as spoken words.
///
/// Minutes and seconds are listed separately and a zero part is left out:
/// `135` becomes "2 minutes 15 seconds", `120` becomes "2 minutes".
pub fn duration_words(seconds: u32) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;

    match (minutes, secs) {
        (0, s) => plural(s, "second"),
        (m, 0) => plural(m, "minute"),
        (m, s) => format!("{} {}", plural(m, "minute"), plural(s, "second")),
    }
}

fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Extra values a phrase may need.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhraseContext {
    /// Seconds left on the countdown; required for `TimeLeft`.
    pub seconds_remaining: Option<u32>,
}

impl PhraseContext {
    pub fn remaining(seconds: u32) -> Self {
        Self {
            seconds_remaining: Some(seconds),
        }
    }
}

/// The fixed phrases of one step.
///
/// `TimeLeft` is the only parameterised phrase and is rendered on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseSet {
    ready_to_start: String,
    light_safe: String,
    aborted: String,
    complete: String,
}

impl PhraseSet {
    /// Build the phrases for a step of `process_name` called `long_name`
    /// lasting `seconds`.
    pub fn new(process_name: &str, long_name: &str, seconds: u32) -> Self {
        let long_name = long_name.to_lowercase();

        Self {
            ready_to_start: format!(
                "Ready to start {process_name} {long_name} for {}.",
                duration_words(seconds)
            ),
            light_safe: "Paper is now light safe.".to_string(),
            aborted: format!("{long_name} aborted."),
            complete: format!("{process_name} {long_name} complete."),
        }
    }

    pub fn ready_to_start(&self) -> &str {
        &self.ready_to_start
    }

    pub fn light_safe(&self) -> &str {
        &self.light_safe
    }

    pub fn aborted(&self) -> &str {
        &self.aborted
    }

    pub fn complete(&self) -> &str {
        &self.complete
    }

    /// "Time left" phrase for a given number of seconds remaining.
    pub fn time_left(&self, seconds_remaining: u32) -> String {
        format!("{} left", duration_words(seconds_remaining))
    }

    /// Render the phrase for `key`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `TimeLeft` is requested without
    /// `seconds_remaining` in the context.
    pub fn render(&self, key: PhraseKey, context: &PhraseContext) -> ProcessResult<String> {
        let text = match key {
            PhraseKey::ReadyToStart => self.ready_to_start.clone(),
            PhraseKey::TimeLeft => {
                let remaining = context.seconds_remaining.ok_or_else(|| {
                    ProcessError::InvalidArgument(
                        "timeLeft phrase needs seconds remaining".to_string(),
                    )
                })?;
                self.time_left(remaining)
            }
            PhraseKey::LightSafe => self.light_safe.clone(),
            PhraseKey::Aborted => self.aborted.clone(),
            PhraseKey::Complete => self.complete.clone(),
        };
        Ok(text)
    }

    /// Render the phrase for a key given by name.
    ///
    /// # Errors
    ///
    /// Returns `UnknownKey` when `name` is not a phrase key, plus anything
    /// [`PhraseSet::render`] returns.
    pub fn render_named(&self, name: &str, context: &PhraseContext) -> ProcessResult<String> {
        let key = PhraseKey::parse(name).ok_or_else(|| ProcessError::UnknownKey(name.to_string()))?;
        self.render(key, context)
    }
}
