//! Entry point for the `darkroom` binary.

mod args;
mod commands;
mod logging;
mod render;

use args::{Cli, Command};
use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::List => commands::list(&cli.root).await,
        Command::Show { process } => commands::show(&cli.root, &process).await,
        Command::Run(args) => commands::run(&cli.root, args).await,
    }
}
