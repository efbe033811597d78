use anyhow::Result;
use cadence_core::repository::Repository;
use cadence_core::summary::all_series_summaries;

use crate::cli::SeriesCommand;
use crate::views::table::display_summaries;

pub async fn series_overview(repo: &impl Repository, command: SeriesCommand) -> Result<()> {
    let summaries = all_series_summaries(repo).await?;

    if command.json {
        println!("{}", serde_json::to_string(&summaries)?);
    } else {
        display_summaries(&summaries);
    }

    Ok(())
}
