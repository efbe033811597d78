use anyhow::Result;
use cadence_core::backfill::BackfillEngine;
use cadence_core::repository::Repository;
use cadence_core::timezone::date_key;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::cli::BackfillCommand;
use crate::parser::parse_date_arg;

pub async fn backfill(
    repo: &impl Repository,
    engine: &BackfillEngine,
    command: BackfillCommand,
    today: NaiveDate,
) -> Result<()> {
    let as_of = command
        .as_of
        .as_deref()
        .map(|d| parse_date_arg(d, today))
        .transpose()?
        .unwrap_or(today);

    if let Some(series_id) = command.series {
        let outcome = engine.backfill_series(repo, series_id, as_of).await?;

        if command.json {
            println!("{}", serde_json::to_string(&outcome)?);
        } else {
            println!(
                "{} Created {} instance(s) up to {}",
                "✓".green().bold(),
                outcome.created,
                date_key(as_of).cyan()
            );
        }
        return Ok(());
    }

    let report = engine.backfill_all(repo, as_of).await?;

    // Failures never abort the batch; they are reported alongside the counts
    for failure in &report.failures {
        eprintln!(
            "{} Series {} skipped: {}",
            "Warning:".yellow().bold(),
            failure.series_id.to_string().yellow(),
            failure.error
        );
    }

    if command.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!(
            "{} Backfilled {} series, created {} task(s) up to {}",
            "✓".green().bold(),
            report.series_processed,
            report.tasks_created,
            date_key(as_of).cyan()
        );
        if !report.failures.is_empty() {
            println!(
                "  {} series could not be processed (see warnings above)",
                report.failures.len()
            );
        }
    }

    Ok(())
}
