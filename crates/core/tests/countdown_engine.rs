//! Integration tests for the countdown engine.
//!
//! These tests verify that the countdown:
//! - Ticks once per second with strictly decreasing remaining values
//! - Ends with a zero tick after the full duration
//! - Stops ticking as soon as cancellation is observed
//! - Keeps its cadence when the tick callback is slow

use dt_core::countdown::{run_countdown, CancelToken};
use dt_protocol::CountdownOutcome;
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_uninterrupted_runs_for_various_durations() {
    for duration in 1..=6u32 {
        let cancel = CancelToken::new();
        let mut ticks = Vec::new();
        let started = Instant::now();

        let outcome = run_countdown(duration, |remaining| ticks.push(remaining), &cancel).await;

        assert_eq!(outcome, CountdownOutcome::Completed);
        assert!(
            ticks.windows(2).all(|pair| pair[0] > pair[1]),
            "ticks should strictly decrease: {ticks:?}"
        );
        assert_eq!(ticks.first(), Some(&duration));
        assert_eq!(ticks.last(), Some(&0));
        assert_eq!(ticks.len(), duration as usize + 1);
        assert_eq!(started.elapsed(), Duration::from_secs(u64::from(duration)));
    }
}

#[tokio::test(start_paused = true)]
async fn test_abort_during_second_wait() {
    let cancel = CancelToken::new();
    let canceller = cancel.clone();
    let started = Instant::now();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(1500)).await;
        canceller.cancel();
    });

    let mut ticks = Vec::new();
    let outcome = run_countdown(5, |remaining| ticks.push(remaining), &cancel).await;

    assert_eq!(outcome, CountdownOutcome::Aborted);
    assert_eq!(ticks, vec![5, 4], "no tick may follow the abort");
    assert_eq!(started.elapsed(), Duration::from_millis(1500));
}

#[tokio::test(start_paused = true)]
async fn test_abort_from_inside_tick_callback() {
    let cancel = CancelToken::new();
    let mut ticks = Vec::new();

    let outcome = run_countdown(
        10,
        |remaining| {
            ticks.push(remaining);
            if remaining == 8 {
                cancel.cancel();
            }
        },
        &cancel,
    )
    .await;

    assert_eq!(outcome, CountdownOutcome::Aborted);
    assert_eq!(ticks, vec![10, 9, 8]);
}

#[tokio::test]
async fn test_slow_callback_does_not_accumulate_drift() {
    let cancel = CancelToken::new();
    let mut ticks = Vec::new();
    let started = std::time::Instant::now();

    let outcome = run_countdown(
        2,
        |remaining| {
            ticks.push(remaining);
            std::thread::sleep(Duration::from_millis(300));
        },
        &cancel,
    )
    .await;

    let elapsed = started.elapsed();
    assert_eq!(outcome, CountdownOutcome::Completed);
    assert_eq!(ticks, vec![2, 1, 0]);
    // A counter-driven loop would need 2s of waits plus 0.9s of callbacks.
    assert!(elapsed >= Duration::from_secs(2), "elapsed {elapsed:?}");
    assert!(elapsed < Duration::from_millis(2700), "elapsed {elapsed:?}");
}
