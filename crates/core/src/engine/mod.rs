//! Session runner.
//!
//! A session runs the steps of one process in order, wiring each step's
//! countdown to the announcer, the light controller and an event channel.
//! This is where ticks become speech; the countdown itself knows nothing
//! about narration.

use crate::announcer::{Announcer, SpeechMunger};
use crate::countdown::CancelToken;
use crate::light::LightController;
use crate::narration::NarrationPolicy;
use crate::process::{Process, ProcessError, ProcessResult};
use chrono::{DateTime, Utc};
use dt_protocol::{CountdownOutcome, Event, LightMode};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc::{self, Sender};
use uuid::Uuid;

/// Summary of a finished session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub session_id: Uuid,
    pub process_name: String,
    pub outcome: CountdownOutcome,
    /// Steps that ran to the end during this session.
    pub steps_completed: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Runs processes step by step and narrates them.
///
/// Announcer and light controller are injected; nothing is looked up
/// globally.
pub struct SessionRunner {
    announcer: Arc<dyn Announcer>,
    light: Arc<dyn LightController>,
    policy: NarrationPolicy,
    munger: SpeechMunger,
}

impl SessionRunner {
    /// Create a runner with the default narration policy and speech munger.
    pub fn new(announcer: Arc<dyn Announcer>, light: Arc<dyn LightController>) -> Self {
        Self {
            announcer,
            light,
            policy: NarrationPolicy::default(),
            munger: SpeechMunger::default(),
        }
    }

    pub fn with_policy(mut self, policy: NarrationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_munger(mut self, munger: SpeechMunger) -> Self {
        self.munger = munger;
        self
    }

    /// Run every step of `process`, starting with the first.
    ///
    /// # Errors
    ///
    /// See [`SessionRunner::run_from`].
    pub async fn run(
        &self,
        process: &mut Process,
        events_tx: Sender<Event>,
        cancel: &CancelToken,
    ) -> ProcessResult<SessionReport> {
        self.run_from(process, 0, events_tx, cancel).await
    }

    /// Run the steps of `process` from `start_index` to the end.
    ///
    /// For each step this:
    /// 1. Emits `StepStarted` and applies the step's light mode
    /// 2. Announces the light-safe phrase when the light comes on after a dark step
    /// 3. Prepares the completion phrase and waits for the ready phrase to finish
    /// 4. Runs the countdown, emitting a `Tick` per second and speaking the
    ///    time left at the marks chosen by the narration policy
    /// 5. Announces completion, or announces the abort and stops the session
    ///
    /// Announcer and light failures are logged and do not interrupt timing.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `start_index` is not a step of `process`.
    pub async fn run_from(
        &self,
        process: &mut Process,
        start_index: usize,
        events_tx: Sender<Event>,
        cancel: &CancelToken,
    ) -> ProcessResult<SessionReport> {
        if start_index >= process.len() {
            return Err(ProcessError::IndexOutOfRange {
                index: start_index,
                len: process.len(),
            });
        }

        let session_id = Uuid::new_v4();
        let started_at = Utc::now();
        let process_name = process.name().to_string();

        tracing::info!(%session_id, process = %process_name, start_index, "Session started");
        let _ = events_tx
            .send(Event::SessionStarted {
                session_id,
                process_name: process_name.clone(),
                step_count: process.len(),
                started_at,
            })
            .await;

        let mut steps_completed = 0;
        let mut previous_light: Option<LightMode> = None;

        for index in start_index..process.len() {
            let step = process.step_at_mut(index)?;
            let seconds = step.seconds();
            let light_mode = step.light_mode();
            let phrases = step.phrases().clone();

            let _ = events_tx
                .send(Event::StepStarted {
                    session_id,
                    step_index: index,
                    short_name: step.short_name().to_string(),
                    light_mode,
                    seconds,
                })
                .await;

            self.apply_light(light_mode).await;
            if previous_light == Some(LightMode::Off) && light_mode.is_lit() {
                self.announce(session_id, phrases.light_safe(), &events_tx)
                    .await;
            }
            previous_light = Some(light_mode);

            if let Err(e) = self.announcer.prepare(&self.munger.munge(phrases.complete())).await {
                tracing::warn!(error = %e, "Failed to prepare completion phrase");
            }
            self.announce_wait(session_id, phrases.ready_to_start(), &events_tx)
                .await;

            let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<u32>();
            let countdown = step.run(
                move |remaining| {
                    let _ = tick_tx.send(remaining);
                },
                cancel,
            );
            let narrate = async {
                while let Some(remaining) = tick_rx.recv().await {
                    let _ = events_tx
                        .send(Event::Tick {
                            session_id,
                            step_index: index,
                            remaining,
                        })
                        .await;
                    if self.policy.should_announce(remaining, seconds) {
                        self.announce(session_id, &phrases.time_left(remaining), &events_tx)
                            .await;
                    }
                }
            };
            let (outcome, ()) = tokio::join!(countdown, narrate);

            match outcome {
                CountdownOutcome::Completed => {
                    steps_completed += 1;
                    self.announce(session_id, phrases.complete(), &events_tx)
                        .await;
                    let _ = events_tx
                        .send(Event::StepCompleted {
                            session_id,
                            step_index: index,
                        })
                        .await;
                }
                CountdownOutcome::Aborted => {
                    self.announce(session_id, phrases.aborted(), &events_tx)
                        .await;
                    let _ = events_tx
                        .send(Event::StepAborted {
                            session_id,
                            step_index: index,
                        })
                        .await;
                    let _ = events_tx
                        .send(Event::SessionAborted {
                            session_id,
                            step_index: index,
                        })
                        .await;

                    tracing::info!(%session_id, step_index = index, "Session aborted");
                    return Ok(SessionReport {
                        session_id,
                        process_name,
                        outcome,
                        steps_completed,
                        started_at,
                        finished_at: Utc::now(),
                    });
                }
            }
        }

        let _ = events_tx
            .send(Event::SessionCompleted { session_id })
            .await;
        tracing::info!(%session_id, steps_completed, "Session completed");

        Ok(SessionReport {
            session_id,
            process_name,
            outcome: CountdownOutcome::Completed,
            steps_completed,
            started_at,
            finished_at: Utc::now(),
        })
    }

    async fn apply_light(&self, mode: LightMode) {
        if let Err(e) = self.light.apply(mode).await {
            tracing::warn!(error = %e, %mode, "Failed to apply light mode");
        }
    }

    /// Speak without waiting for playback.
    async fn announce(&self, session_id: Uuid, text: &str, events_tx: &Sender<Event>) {
        let _ = events_tx
            .send(Event::Announcement {
                session_id,
                text: text.to_string(),
            })
            .await;
        if let Err(e) = self.announcer.say(&self.munger.munge(text)).await {
            tracing::warn!(error = %e, text, "Announcement failed");
        }
    }

    /// Speak and wait for playback to finish.
    async fn announce_wait(&self, session_id: Uuid, text: &str, events_tx: &Sender<Event>) {
        let _ = events_tx
            .send(Event::Announcement {
                session_id,
                text: text.to_string(),
            })
            .await;
        if let Err(e) = self.announcer.say_wait(&self.munger.munge(text)).await {
            tracing::warn!(error = %e, text, "Announcement failed");
        }
    }
}
