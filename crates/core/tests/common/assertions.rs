//! Helpers for inspecting session event streams.

use dt_protocol::Event;

/// Remaining values of all ticks emitted for `step_index`.
#[allow(dead_code)]
pub fn ticks_for(events: &[Event], step_index: usize) -> Vec<u32> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Tick {
                step_index: index,
                remaining,
                ..
            } if *index == step_index => Some(*remaining),
            _ => None,
        })
        .collect()
}

/// Text of every announcement event, in order.
#[allow(dead_code)]
pub fn announcements(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Announcement { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

/// Assert that a session's events are well formed.
///
/// Checks that:
/// 1. SessionStarted comes first
/// 2. Exactly one terminal event exists and it comes last
/// 3. Every event belongs to the same session
#[allow(dead_code)]
pub fn assert_event_sequence(events: &[Event]) {
    assert!(!events.is_empty(), "Event sequence should not be empty");

    assert!(
        matches!(events[0], Event::SessionStarted { .. }),
        "First event should be SessionStarted, got {:?}",
        events[0]
    );

    let terminal_count = events.iter().filter(|e| e.is_terminal()).count();
    assert_eq!(terminal_count, 1, "Exactly one terminal event expected");
    assert!(
        events[events.len() - 1].is_terminal(),
        "Last event should be terminal"
    );

    let session_id = events[0].session_id();
    assert!(
        events.iter().all(|e| e.session_id() == session_id),
        "All events should share one session id"
    );
}
