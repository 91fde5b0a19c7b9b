//! Test fixtures for building processes, runners and config directories.

use dt_core::announcer::RecordingAnnouncer;
use dt_core::engine::SessionRunner;
use dt_core::light::RecordingLightController;
use dt_core::process::Process;
use dt_protocol::{Event, StepDefinition};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::mpsc::Receiver;

/// Developer, stop bath and fixer, in that order.
#[allow(dead_code)]
pub fn print_step_definitions() -> Vec<StepDefinition> {
    vec![
        StepDefinition::new("Developer", "Dev", 120, true, "N"),
        StepDefinition::new("Stop Bath", "Stop", 30, false, "N"),
        StepDefinition::new("Fixer", "Fix", 300, true, "Y"),
    ]
}

/// A process of short steps so sessions finish quickly on paused time.
#[allow(dead_code)]
pub fn short_process() -> Process {
    Process::new(
        "B&W",
        vec![
            StepDefinition::new("Developer", "Dev", 3, true, "N"),
            StepDefinition::new("Fixer", "Fix", 2, false, "Y"),
        ],
    )
    .expect("short process should be valid")
}

/// A runner wired to recording collaborators, plus handles to inspect them.
#[allow(dead_code)]
pub fn recording_runner() -> (SessionRunner, RecordingAnnouncer, RecordingLightController) {
    let announcer = RecordingAnnouncer::new();
    let light = RecordingLightController::new();
    let runner = SessionRunner::new(Arc::new(announcer.clone()), Arc::new(light.clone()));
    (runner, announcer, light)
}

/// Drain everything currently buffered in the channel.
#[allow(dead_code)]
pub fn drain_events(rx: &mut Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// Create a temporary project with a `.darkroom/` directory.
///
/// Returns a TempDir that must be kept alive for the test duration.
#[allow(dead_code)]
pub fn create_test_project() -> std::io::Result<TempDir> {
    let temp_dir = tempfile::tempdir()?;
    let root = temp_dir.path();

    std::fs::create_dir_all(root.join(".darkroom/processes"))?;

    let config_toml = r#"
[narration]
minute-marks = false
final-marks = [2]

[speech.substitutions]
"RA-4" = "R A 4"
"#;
    std::fs::write(root.join(".darkroom/config.toml"), config_toml)?;

    let process_yaml = r#"
name: RA-4
steps:
  - long-name: Developer
    short-name: Dev
    seconds: 45
    tweakable: true
    light: N
  - long-name: Blix
    short-name: Blix
    seconds: 3
    light: H
"#;
    std::fs::write(root.join(".darkroom/processes/ra4.yaml"), process_yaml)?;

    Ok(temp_dir)
}
