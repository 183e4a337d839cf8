pub mod anime;
pub mod carousel;
pub mod display;
pub mod functions;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::sync::Once;

use clap::{Parser, Subcommand};

use crate::anime::ANILIST_URL;
use crate::functions::FetchConfig;

static INIT: Once = Once::new();

/// Initialise logging once per process.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` applies. With a
/// `log_file` the logger writes there instead of stderr, which keeps log
/// lines off the carousel's alternate screen.
pub fn init(default_filter: &str, log_file: Option<&PathBuf>) {
    INIT.call_once(|| {
        let env = env_logger::Env::default().default_filter_or(default_filter);
        let mut builder = env_logger::Builder::from_env(env);

        if let Some(path) = log_file {
            match std::fs::File::create(path) {
                Ok(file) => {
                    builder.target(env_logger::Target::Pipe(Box::new(file)));
                }
                Err(e) => eprintln!("Cannot open log file {}: {e}", path.display()),
            }
        }

        // don't panic if called multiple times across binaries
        let _ = builder.try_init();
    });
}

#[derive(Parser)]
#[command(
    name = "anicarousel",
    about = "This season's top-rated anime from AniList, as a terminal carousel"
)]
pub struct Cli {
    /// AniList GraphQL endpoint
    #[arg(long, env = "ANILIST_ENDPOINT", default_value = ANILIST_URL)]
    pub endpoint: String,
    /// Only titles whose average score is greater than this
    #[arg(long, env = "ANICAROUSEL_MIN_SCORE", default_value_t = 9)]
    pub min_score: i64,
    /// Page of results to request
    #[arg(long, env = "ANICAROUSEL_PAGE", default_value_t = 1)]
    pub page: i64,
    /// Number of titles per page
    #[arg(long, env = "ANICAROUSEL_PER_PAGE", default_value_t = 13)]
    pub per_page: i64,
    /// Season year to rank (defaults to the current year)
    #[arg(long, env = "ANICAROUSEL_SEASON_YEAR")]
    pub season_year: Option<i32>,
    /// Serve a recorded AniList response instead of calling the API
    #[arg(long, env = "ANICAROUSEL_FIXTURE")]
    pub fixture: Option<PathBuf>,
    /// Write logs to this file instead of stderr
    #[arg(long, env = "ANICAROUSEL_LOG_FILE")]
    pub log_file: Option<PathBuf>,
    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Browse the recommendations in a carousel (default)
    Tui,
    /// Fetch and print the recommendations
    List,
    /// Print the GraphQL request without sending it
    Request,
}

impl Cli {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            endpoint: self.endpoint.clone(),
            min_score: self.min_score,
            page: self.page,
            per_page: self.per_page,
            season_year: self.season_year,
            fixture: self.fixture.clone(),
        }
    }
}
