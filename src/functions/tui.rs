use anyhow::Result;
use log::info;

use crate::carousel::Carousel;
use crate::display::display_carousel_interactive;
use crate::functions::fetch::{FetchConfig, fetch_with};

/// Fetch once, then mount the carousel.
///
/// The carousel is only mounted after the fetch has succeeded; a failed
/// fetch returns before the terminal is touched.
pub async fn run_tui(config: &FetchConfig) -> Result<()> {
    let transport = config.transport();
    let (input, recs) = fetch_with(transport.as_ref(), config).await?;
    let heading = config.heading(&input, &recs);

    info!("run_tui: {} records ready, mounting carousel", recs.records.len());
    display_carousel_interactive(Carousel::new(recs.records), &heading)
}
