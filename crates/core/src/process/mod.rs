//! Process and step model.
//!
//! This module provides:
//! - [`Step`]: one timed phase with its light mode and phrases
//! - [`Process`]: a named, ordered collection of steps
//! - Phrase formatting and the error taxonomy for both

pub mod error;
pub mod phrases;
pub mod step;

pub use error::{ProcessError, ProcessResult};
pub use phrases::{duration_words, PhraseContext, PhraseSet};
pub use step::Step;

use dt_protocol::{ProcessDefinition, StepDefinition};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Future returned by an async step visitor, borrowing the visited step.
pub type StepVisit<'a> = Pin<Box<dyn Future<Output = ()> + 'a>>;

/// A named sequence of steps, run in order.
///
/// A process always has at least one step and its step order never changes
/// after construction. Only the durations of tweakable, not-yet-run steps
/// can be modified.
#[derive(Debug, Clone)]
pub struct Process {
    name: Arc<str>,
    steps: Vec<Step>,
}

impl Process {
    /// Build a process from step definitions in execution order.
    ///
    /// # Errors
    ///
    /// - `EmptyProcess` if `definitions` is empty
    /// - `InvalidArgument` from the first malformed step definition
    pub fn new<I>(name: impl Into<String>, definitions: I) -> ProcessResult<Self>
    where
        I: IntoIterator<Item = StepDefinition>,
    {
        let name: Arc<str> = Arc::from(name.into());

        let steps = definitions
            .into_iter()
            .map(|definition| Step::from_definition(Arc::clone(&name), &definition))
            .collect::<ProcessResult<Vec<_>>>()?;

        if steps.is_empty() {
            return Err(ProcessError::EmptyProcess {
                name: name.to_string(),
            });
        }

        tracing::debug!(process = %name, steps = steps.len(), "Process built");
        Ok(Self { name, steps })
    }

    /// Build a process from a loaded definition file.
    ///
    /// # Errors
    ///
    /// Same as [`Process::new`].
    pub fn from_definition(definition: &ProcessDefinition) -> ProcessResult<Self> {
        Self::new(definition.name.clone(), definition.steps.iter().cloned())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of steps; always at least one.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The step at `index` (0-based).
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len()`.
    pub fn step_at(&self, index: usize) -> ProcessResult<&Step> {
        self.steps.get(index).ok_or(ProcessError::IndexOutOfRange {
            index,
            len: self.steps.len(),
        })
    }

    /// Mutable access to the step at `index`, for tweaking or running it.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len()`.
    pub fn step_at_mut(&mut self, index: usize) -> ProcessResult<&mut Step> {
        let len = self.steps.len();
        self.steps
            .get_mut(index)
            .ok_or(ProcessError::IndexOutOfRange { index, len })
    }

    /// Position of the step with the given short name (case-insensitive).
    pub fn position_of(&self, short_name: &str) -> Option<usize> {
        self.steps
            .iter()
            .position(|step| step.short_name().eq_ignore_ascii_case(short_name))
    }

    /// Change the duration of the step with the given short name.
    ///
    /// # Errors
    ///
    /// Returns `UnknownStep` if no step matches, otherwise whatever
    /// [`Step::set_duration`] returns.
    pub fn set_step_duration(&mut self, short_name: &str, seconds: i64) -> ProcessResult<()> {
        let index = self
            .position_of(short_name)
            .ok_or_else(|| ProcessError::UnknownStep {
                process: self.name.to_string(),
                step: short_name.to_string(),
            })?;
        self.steps[index].set_duration(seconds)
    }

    /// Call `visitor` once per step, in order.
    ///
    /// The visitor gets mutable access so it can inspect or tweak the step.
    /// To run steps from the visitor use [`Process::for_each_step_async`].
    pub fn for_each_step<F>(&mut self, mut visitor: F)
    where
        F: FnMut(usize, &mut Step),
    {
        for (index, step) in self.steps.iter_mut().enumerate() {
            visitor(index, step);
        }
    }

    /// Call an async `visitor` once per step, in order, awaiting each visit
    /// before starting the next.
    ///
    /// This is the form to use when the visitor runs the step:
    ///
    /// ```ignore
    /// process
    ///     .for_each_step_async(|_, step| {
    ///         let cancel = cancel.clone();
    ///         Box::pin(async move {
    ///             step.run(|_| {}, &cancel).await;
    ///         })
    ///     })
    ///     .await;
    /// ```
    pub async fn for_each_step_async<F>(&mut self, mut visitor: F)
    where
        F: for<'a> FnMut(usize, &'a mut Step) -> StepVisit<'a>,
    {
        for (index, step) in self.steps.iter_mut().enumerate() {
            visitor(index, step).await;
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn steps_mut(&mut self) -> impl Iterator<Item = &mut Step> {
        self.steps.iter_mut()
    }

    /// Total seconds across all steps at their current durations.
    pub fn total_seconds(&self) -> u64 {
        self.steps.iter().map(|step| u64::from(step.seconds())).sum()
    }
}
