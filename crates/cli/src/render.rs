//! Terminal rendering of session events.

use colored::Colorize;
use dt_core::process::duration_words;
use dt_protocol::{Event, LightMode};
use std::io::Write;

/// How events are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn print_event(event: &Event, mode: OutputMode) {
    match mode {
        OutputMode::Json => match serde_json::to_string(event) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize event"),
        },
        OutputMode::Text => print_text(event),
    }
}

fn print_text(event: &Event) {
    match event {
        Event::SessionStarted {
            process_name,
            step_count,
            ..
        } => {
            println!(
                "{} {} ({step_count} steps)",
                "Starting".bold(),
                process_name.bold().cyan()
            );
        }
        Event::StepStarted {
            step_index,
            short_name,
            light_mode,
            seconds,
            ..
        } => {
            println!(
                "\n[{}] {} for {} - light {}",
                step_index + 1,
                short_name.bold(),
                duration_words(*seconds),
                light_label(*light_mode)
            );
        }
        Event::Tick { remaining, .. } => {
            print!("\r  {:>2}:{:02} ", remaining / 60, remaining % 60);
            let _ = std::io::stdout().flush();
            if *remaining == 0 {
                println!();
            }
        }
        Event::Announcement { text, .. } => {
            println!("\r  {} {}", ">".dimmed(), text.italic());
        }
        Event::StepCompleted { .. } => {}
        Event::StepAborted { .. } => {
            println!();
        }
        Event::SessionCompleted { .. } => {
            println!("\n{}", "All steps complete.".green().bold());
        }
        Event::SessionAborted { step_index, .. } => {
            println!(
                "\n{} at step {}",
                "Aborted".red().bold(),
                step_index + 1
            );
        }
    }
}

fn light_label(mode: LightMode) -> colored::ColoredString {
    match mode {
        LightMode::Off => "off".red(),
        LightMode::Half => "half".yellow(),
        LightMode::On => "on".green(),
    }
}
