use anyhow::Result;
use std::io::Write;

use crate::anime::{Recommendations, Transport};
use crate::functions::fetch::{FetchConfig, fetch_with};

pub async fn cmd_list(config: &FetchConfig) -> Result<()> {
    let transport = config.transport();
    let mut stdout = std::io::stdout().lock();
    list_with(transport.as_ref(), config, &mut stdout).await
}

pub async fn list_with(
    transport: &dyn Transport,
    config: &FetchConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let (input, recs) = fetch_with(transport, config).await?;
    writeln!(out, "=== AniList recommendations ===")?;
    writeln!(
        out,
        "Season: {}  Score > {}  Page: {}/{}  Total: {}  Per page: {}  Has next: {}",
        input.season_year,
        config.min_score,
        recs.page_info.current_page,
        recs.page_info.last_page,
        recs.page_info.total,
        recs.page_info.per_page,
        recs.page_info.has_next_page
    )?;
    write_records(&recs, out)?;
    Ok(())
}

fn write_records(recs: &Recommendations, out: &mut dyn Write) -> Result<()> {
    if recs.records.is_empty() {
        writeln!(out, "\nNo recommendations for this season yet.")?;
        return Ok(());
    }

    writeln!(out)?;
    for (i, r) in recs.records.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. [{}] {} (bg {}, fg {})",
            i + 1,
            r.id,
            r.title,
            r.background_color,
            r.text_color
        )?;
        writeln!(out, "     {}", r.cover_url)?;
    }
    Ok(())
}
