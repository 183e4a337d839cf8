use anyhow::Error;
use clap::Parser;
use tokio::runtime::Runtime;

use anicarousel_tui::functions::*;
use anicarousel_tui::{Cli, Command};

#[derive(Debug)]
#[allow(unused)]
enum AppError {
    Tui(Error),
    List(Error),
    Request(Error),
}

fn main() -> anyhow::Result<()> {
    use std::process::exit;

    let args = Cli::parse();

    // Default to Tui when no subcommand is supplied
    let cmd = args.cmd.unwrap_or(Command::Tui);

    // Logging to stderr would paint over the carousel
    let default_filter = match (cmd, &args.log_file) {
        (Command::Tui, None) => "warn",
        _ => "info",
    };
    anicarousel_tui::init(default_filter, args.log_file.as_ref());

    let config = args.fetch_config();
    let rt = Runtime::new()?;

    let result = match cmd {
        Command::Tui => rt
            .block_on(async { run_tui(&config).await })
            .map_err(AppError::Tui),
        Command::List => rt
            .block_on(async { cmd_list(&config).await })
            .map_err(AppError::List),
        Command::Request => cmd_request(&config).map_err(AppError::Request),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:?}");
        exit(1);
    }
    Ok(())
}
