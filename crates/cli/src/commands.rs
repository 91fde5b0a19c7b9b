//! Subcommand implementations.

use crate::args::RunArgs;
use crate::render::{print_event, OutputMode};
use color_eyre::eyre::{eyre, Result, WrapErr};
use colored::Colorize;
use dt_core::announcer::{SpeechMunger, TracingAnnouncer};
use dt_core::config::{load_config, AppConfig};
use dt_core::countdown::CancelToken;
use dt_core::engine::SessionRunner;
use dt_core::light::TracingLightController;
use dt_core::narration::NarrationPolicy;
use dt_core::process::{duration_words, Process};
use dt_protocol::{CountdownOutcome, ProcessDefinition};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;

async fn load(root: &Path) -> Result<AppConfig> {
    load_config(root)
        .await
        .wrap_err_with(|| format!("Failed to load configuration from {}", root.display()))
}

fn find<'a>(config: &'a AppConfig, name: &str) -> Result<&'a ProcessDefinition> {
    config
        .find_process(name)
        .ok_or_else(|| eyre!("No process named '{name}'"))
}

pub async fn list(root: &Path) -> Result<()> {
    let config = load(root).await?;

    if config.processes.is_empty() {
        println!("No processes defined under {}", root.join(".darkroom").display());
        return Ok(());
    }

    for definition in &config.processes {
        match Process::from_definition(definition) {
            Ok(process) => println!(
                "{}  {} steps, {}",
                process.name().bold(),
                process.len(),
                duration_words(u32::try_from(process.total_seconds()).unwrap_or(u32::MAX))
            ),
            Err(e) => println!("{}  {}", definition.name.bold(), e.to_string().red()),
        }
    }
    Ok(())
}

pub async fn show(root: &Path, name: &str) -> Result<()> {
    let config = load(root).await?;
    let process = Process::from_definition(find(&config, name)?)?;

    println!("{}", process.name().bold().cyan());
    for (index, step) in process.steps().iter().enumerate() {
        println!(
            "{:>3}. {:<8} {:<20} {:>22}  light {:<4} {}",
            index + 1,
            step.short_name(),
            step.long_name(),
            duration_words(step.seconds()),
            step.light_mode().to_string(),
            if step.is_tweakable() { "tweakable" } else { "" }
        );
    }
    Ok(())
}

pub async fn run(root: &Path, args: RunArgs) -> Result<()> {
    let config = load(root).await?;
    let mut process = Process::from_definition(find(&config, &args.process)?)?;

    for tweak in &args.tweaks {
        process
            .set_step_duration(&tweak.step, tweak.seconds)
            .wrap_err_with(|| format!("Cannot set {} to {} seconds", tweak.step, tweak.seconds))?;
    }

    let start_index = match &args.from {
        Some(step) => process
            .position_of(step)
            .ok_or_else(|| eyre!("Process '{}' has no step named '{step}'", process.name()))?,
        None => 0,
    };

    let cancel = CancelToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupt received, aborting");
            ctrl_c.cancel();
        }
    });

    let mode = if args.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };
    let (events_tx, mut events_rx) = mpsc::channel(64);
    let printer = tokio::spawn(async move {
        while let Some(event) = events_rx.recv().await {
            print_event(&event, mode);
        }
    });

    let runner = SessionRunner::new(Arc::new(TracingAnnouncer), Arc::new(TracingLightController))
        .with_policy(NarrationPolicy::from(&config.global.narration))
        .with_munger(SpeechMunger::with_substitutions(
            &config.global.speech.substitutions,
        ));

    let report = runner
        .run_from(&mut process, start_index, events_tx, &cancel)
        .await?;
    printer.await?;

    tracing::info!(
        session_id = %report.session_id,
        outcome = ?report.outcome,
        steps_completed = report.steps_completed,
        "Run finished"
    );

    if report.outcome == CountdownOutcome::Aborted {
        return Err(eyre!(
            "'{}' aborted after {} completed steps",
            report.process_name,
            report.steps_completed
        ));
    }
    Ok(())
}
