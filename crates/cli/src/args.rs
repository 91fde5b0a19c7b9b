//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Spoken countdown timer for darkroom processes.
#[derive(Debug, Parser)]
#[command(name = "darkroom", version, about)]
pub struct Cli {
    /// Directory containing the `.darkroom/` configuration folder.
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Increase log output (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the configured processes.
    List,

    /// Show the steps of a process.
    Show {
        /// Process name (case-insensitive).
        process: String,
    },

    /// Run a process, narrating each step.
    Run(RunArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Process name (case-insensitive).
    pub process: String,

    /// Override a tweakable step's duration, e.g. `--set Dev=150`.
    #[arg(long = "set", value_name = "STEP=SECS", value_parser = parse_tweak)]
    pub tweaks: Vec<StepTweak>,

    /// Start at the step with this short name instead of the first.
    #[arg(long, value_name = "STEP")]
    pub from: Option<String>,

    /// Print events as JSON lines instead of text.
    #[arg(long)]
    pub json: bool,
}

/// A `STEP=SECS` duration override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTweak {
    pub step: String,
    pub seconds: i64,
}

fn parse_tweak(raw: &str) -> Result<StepTweak, String> {
    let (step, seconds) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected STEP=SECS, got '{raw}'"))?;
    let step = step.trim();
    if step.is_empty() {
        return Err(format!("missing step name in '{raw}'"));
    }
    let seconds = seconds
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid seconds in '{raw}': {e}"))?;

    Ok(StepTweak {
        step: step.to_string(),
        seconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tweak() {
        assert_eq!(
            parse_tweak("Dev=150"),
            Ok(StepTweak {
                step: "Dev".to_string(),
                seconds: 150
            })
        );
        assert_eq!(
            parse_tweak(" Fix = -3 "),
            Ok(StepTweak {
                step: "Fix".to_string(),
                seconds: -3
            })
        );
        assert!(parse_tweak("Dev").is_err());
        assert!(parse_tweak("=10").is_err());
        assert!(parse_tweak("Dev=soon").is_err());
    }

    #[test]
    fn test_cli_parses_run() {
        let cli = Cli::try_parse_from([
            "darkroom", "run", "B&W Print", "--set", "Dev=150", "--set", "Fix=240", "--json",
        ])
        .unwrap();

        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.process, "B&W Print");
                assert_eq!(args.tweaks.len(), 2);
                assert!(args.json);
                assert!(args.from.is_none());
            }
            other => panic!("Expected run command, got {other:?}"),
        }
    }
}
