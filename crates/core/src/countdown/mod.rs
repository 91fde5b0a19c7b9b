//! Countdown engine.
//!
//! Drives one step's timer: reads the clock, reports the whole seconds
//! remaining to a callback, waits for the next second and stops when the
//! duration has elapsed or the caller cancels.
//!
//! Ticks are derived from elapsed wall-clock time rather than a decremented
//! counter. Each wait targets the next whole second after the start instant,
//! so a slow callback shortens the following wait instead of pushing every
//! later tick back.

pub mod cancel;

pub use cancel::CancelToken;

use dt_protocol::CountdownOutcome;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Interval between ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Run a countdown of `duration_secs` seconds.
///
/// `on_tick` receives the seconds remaining: `d, d-1, ..., 1, 0` for an
/// uninterrupted run. The tick showing `0` is the last one and the future
/// resolves to `Completed` right after it.
///
/// Cancellation is checked before every tick and interrupts the wait
/// between ticks. Once cancellation is observed no further tick fires and
/// the future resolves to `Aborted`.
///
/// # Arguments
///
/// * `duration_secs` - Countdown length; a zero duration produces a single `0` tick
/// * `on_tick` - Callback invoked with the seconds remaining
/// * `cancel` - Cancellation signal observed between ticks
pub async fn run_countdown<F>(
    duration_secs: u32,
    mut on_tick: F,
    cancel: &CancelToken,
) -> CountdownOutcome
where
    F: FnMut(u32),
{
    let start = Instant::now();
    tracing::debug!(duration_secs, "Countdown started");

    loop {
        if cancel.is_cancelled() {
            tracing::debug!("Countdown cancelled before tick");
            return CountdownOutcome::Aborted;
        }

        let elapsed_secs = start.elapsed().as_secs();
        let remaining = remaining_secs(duration_secs, elapsed_secs);

        on_tick(remaining);

        if remaining == 0 {
            tracing::debug!(duration_secs, "Countdown completed");
            return CountdownOutcome::Completed;
        }

        let next_tick = start + TICK_INTERVAL * next_tick_index(elapsed_secs);

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!(remaining, "Countdown cancelled while waiting");
                return CountdownOutcome::Aborted;
            }
            _ = sleep_until(next_tick) => {}
        }
    }
}

/// Whole seconds remaining after `elapsed_secs`, clamped at zero.
fn remaining_secs(duration_secs: u32, elapsed_secs: u64) -> u32 {
    let elapsed = u32::try_from(elapsed_secs).unwrap_or(u32::MAX);
    duration_secs.saturating_sub(elapsed)
}

/// Multiplier for the instant of the tick after `elapsed_secs`.
fn next_tick_index(elapsed_secs: u64) -> u32 {
    u32::try_from(elapsed_secs.saturating_add(1)).unwrap_or(u32::MAX)
}
