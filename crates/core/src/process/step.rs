//! A single timed step of a process.

use super::error::{ProcessError, ProcessResult};
use super::phrases::{PhraseContext, PhraseSet};
use crate::countdown::{run_countdown, CancelToken};
use dt_protocol::{CountdownOutcome, CountdownState, LightMode, PhraseKey, StepDefinition};
use std::sync::Arc;

/// One timed phase of a process.
///
/// Names, light mode and the tweakable flag are fixed at construction.
/// The duration of a tweakable step may change until its countdown starts.
#[derive(Debug, Clone)]
pub struct Step {
    process_name: Arc<str>,
    short_name: String,
    long_name: String,
    seconds: u32,
    tweakable: bool,
    light_mode: LightMode,
    state: CountdownState,
    phrases: PhraseSet,
}

impl Step {
    /// Create a step belonging to the process called `process_name`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `seconds` is zero, negative or does not
    /// fit in 32 bits.
    pub fn new(
        process_name: Arc<str>,
        short_name: impl Into<String>,
        long_name: impl Into<String>,
        seconds: i64,
        tweakable: bool,
        light_mode: LightMode,
    ) -> ProcessResult<Self> {
        let short_name = short_name.into();
        let long_name = long_name.into();
        let seconds = validate_seconds(&short_name, seconds)?;
        let phrases = PhraseSet::new(&process_name, &long_name, seconds);

        Ok(Self {
            process_name,
            short_name,
            long_name,
            seconds,
            tweakable,
            light_mode,
            state: CountdownState::Idle,
            phrases,
        })
    }

    /// Create a step from a raw definition, parsing its light code.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an unrecognised light code or an
    /// invalid duration.
    pub fn from_definition(
        process_name: Arc<str>,
        definition: &StepDefinition,
    ) -> ProcessResult<Self> {
        let light_mode = LightMode::from_code(&definition.light).ok_or_else(|| {
            ProcessError::InvalidArgument(format!(
                "step '{}' has unknown light code '{}'",
                definition.short_name, definition.light
            ))
        })?;

        Self::new(
            process_name,
            definition.short_name.clone(),
            definition.long_name.clone(),
            definition.seconds,
            definition.tweakable,
            light_mode,
        )
    }

    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn is_tweakable(&self) -> bool {
        self.tweakable
    }

    pub fn light_mode(&self) -> LightMode {
        self.light_mode
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn phrases(&self) -> &PhraseSet {
        &self.phrases
    }

    /// Change the duration of a tweakable step before it runs.
    ///
    /// # Errors
    ///
    /// - `NotTweakable` if the step's duration is fixed
    /// - `AlreadyRunning` once the countdown has started
    /// - `InvalidArgument` if `seconds` is not positive
    pub fn set_duration(&mut self, seconds: i64) -> ProcessResult<()> {
        if !self.tweakable {
            return Err(ProcessError::NotTweakable {
                step: self.short_name.clone(),
            });
        }
        if self.state != CountdownState::Idle {
            return Err(ProcessError::AlreadyRunning {
                step: self.short_name.clone(),
            });
        }

        self.seconds = validate_seconds(&self.short_name, seconds)?;
        self.phrases = PhraseSet::new(&self.process_name, &self.long_name, self.seconds);

        tracing::debug!(step = %self.short_name, seconds = self.seconds, "Step duration changed");
        Ok(())
    }

    /// Render one of this step's phrases.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when `TimeLeft` is requested without
    /// seconds remaining in `context`.
    pub fn phrase(&self, key: PhraseKey, context: &PhraseContext) -> ProcessResult<String> {
        self.phrases.render(key, context)
    }

    /// Render a phrase by key name.
    ///
    /// # Errors
    ///
    /// Returns `UnknownKey` for an unrecognised name.
    pub fn phrase_named(&self, name: &str, context: &PhraseContext) -> ProcessResult<String> {
        self.phrases.render_named(name, context)
    }

    /// Run this step's countdown to completion or cancellation.
    ///
    /// The step is `Running` while the future is pending and ends up in
    /// the state matching the returned outcome. See
    /// [`run_countdown`](crate::countdown::run_countdown) for tick semantics.
    pub async fn run<F>(&mut self, on_tick: F, cancel: &CancelToken) -> CountdownOutcome
    where
        F: FnMut(u32),
    {
        self.state = CountdownState::Running;
        tracing::info!(
            process = %self.process_name,
            step = %self.short_name,
            seconds = self.seconds,
            light = %self.light_mode,
            "Step running"
        );

        let outcome = run_countdown(self.seconds, on_tick, cancel).await;

        self.state = outcome.into();
        tracing::info!(step = %self.short_name, ?outcome, "Step finished");
        outcome
    }
}

fn validate_seconds(step: &str, seconds: i64) -> ProcessResult<u32> {
    if seconds <= 0 {
        return Err(ProcessError::InvalidArgument(format!(
            "step '{step}' needs a positive duration, got {seconds}"
        )));
    }
    u32::try_from(seconds).map_err(|_| {
        ProcessError::InvalidArgument(format!("step '{step}' duration {seconds} is too large"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dev_step(tweakable: bool) -> Step {
        Step::new(Arc::from("B&W"), "Dev", "Developer", 120, tweakable, LightMode::Off).unwrap()
    }

    #[test]
    fn test_step_new_rejects_non_positive_duration() {
        for seconds in [0, -1, -120] {
            let result = Step::new(Arc::from("B&W"), "Dev", "Developer", seconds, true, LightMode::Off);
            assert!(
                matches!(result, Err(ProcessError::InvalidArgument(_))),
                "{seconds} should be rejected"
            );
        }
    }

    #[test]
    fn test_step_new_rejects_oversized_duration() {
        let result = Step::new(
            Arc::from("B&W"),
            "Dev",
            "Developer",
            i64::from(u32::MAX) + 1,
            true,
            LightMode::Off,
        );
        assert!(matches!(result, Err(ProcessError::InvalidArgument(_))));
    }

    #[test]
    fn test_from_definition_parses_light_code() {
        let def = StepDefinition::new("Fixer", "Fix", 300, false, "h");
        let step = Step::from_definition(Arc::from("B&W"), &def).unwrap();

        assert_eq!(step.light_mode(), LightMode::Half);
        assert_eq!(step.long_name(), "Fixer");
        assert_eq!(step.short_name(), "Fix");
        assert_eq!(step.seconds(), 300);
        assert!(!step.is_tweakable());
        assert_eq!(step.state(), CountdownState::Idle);
    }

    #[test]
    fn test_from_definition_rejects_unknown_light_code() {
        let def = StepDefinition::new("Fixer", "Fix", 300, false, "Q");
        let result = Step::from_definition(Arc::from("B&W"), &def);

        assert!(matches!(result, Err(ProcessError::InvalidArgument(msg)) if msg.contains("'Q'")));
    }

    #[test]
    fn test_set_duration_on_fixed_step() {
        let mut step = dev_step(false);

        assert_eq!(
            step.set_duration(90),
            Err(ProcessError::NotTweakable {
                step: "Dev".to_string()
            })
        );
        // Even an invalid value reports NotTweakable first.
        assert!(matches!(
            step.set_duration(0),
            Err(ProcessError::NotTweakable { .. })
        ));
        assert_eq!(step.seconds(), 120);
    }

    #[test]
    fn test_set_duration_updates_phrases() {
        let mut step = dev_step(true);

        step.set_duration(135).unwrap();

        assert_eq!(step.seconds(), 135);
        let text = step
            .phrase(PhraseKey::ReadyToStart, &PhraseContext::default())
            .unwrap();
        assert_eq!(text, "Ready to start B&W developer for 2 minutes 15 seconds.");
    }

    #[test]
    fn test_set_duration_rejects_non_positive() {
        let mut step = dev_step(true);

        assert!(matches!(
            step.set_duration(-3),
            Err(ProcessError::InvalidArgument(_))
        ));
        assert_eq!(step.seconds(), 120);
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_duration_after_run() {
        let mut step = Step::new(Arc::from("B&W"), "Dev", "Developer", 2, true, LightMode::Off).unwrap();
        let cancel = CancelToken::new();

        let outcome = step.run(|_| {}, &cancel).await;

        assert_eq!(outcome, CountdownOutcome::Completed);
        assert_eq!(step.state(), CountdownState::Completed);
        assert_eq!(
            step.set_duration(30),
            Err(ProcessError::AlreadyRunning {
                step: "Dev".to_string()
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_aborted_state() {
        let mut step = dev_step(true);
        let cancel = CancelToken::new();
        cancel.cancel();

        let outcome = step.run(|_| {}, &cancel).await;

        assert_eq!(outcome, CountdownOutcome::Aborted);
        assert_eq!(step.state(), CountdownState::Aborted);
    }
}
