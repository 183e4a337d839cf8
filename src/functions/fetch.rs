use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::anime::{
    FixtureTransport, GetAnimeInput, HttpTransport, Recommendations, Transport, fetch_anime,
};

/// Caller-supplied request settings, resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    pub endpoint: String,
    pub min_score: i64,
    pub page: i64,
    pub per_page: i64,
    pub season_year: Option<i32>,
    pub fixture: Option<PathBuf>,
}

impl FetchConfig {
    pub fn input(&self) -> GetAnimeInput {
        let input = GetAnimeInput::new(Some(self.min_score), self.page, self.per_page);
        match self.season_year {
            Some(year) => input.with_season_year(year),
            None => input,
        }
    }

    /// Live reqwest transport, or the recorded response when `--fixture` is set.
    pub fn transport(&self) -> Box<dyn Transport> {
        match &self.fixture {
            Some(path) => Box::new(FixtureTransport::new(path.clone())),
            None => Box::new(HttpTransport::new()),
        }
    }

    /// Short description used as the carousel heading.
    pub fn heading(&self, input: &GetAnimeInput, recs: &Recommendations) -> String {
        format!(
            "Top anime of {} (score > {}) · page {}/{}",
            input.season_year,
            self.min_score,
            recs.page_info.current_page,
            recs.page_info.last_page
        )
    }
}

/// Run the one fetch of a session through `transport`.
pub async fn fetch_with(
    transport: &dyn Transport,
    config: &FetchConfig,
) -> Result<(GetAnimeInput, Recommendations)> {
    let input = config.input();
    let recs = fetch_anime(transport, &config.endpoint, &input)
        .await
        .with_context(|| format!("Failed to fetch recommendations from {}", config.endpoint))?;
    Ok((input, recs))
}
