use anyhow::Result;
use cadence_core::models::{NewSeriesData, TaskPriority};
use cadence_core::recurrence::RecurrenceRule;
use cadence_core::repository::{Repository, SeriesRepository};
use cadence_core::timezone::date_key;
use chrono::NaiveDate;
use owo_colors::{OwoColorize, Style};

use crate::cli::AddCommand;
use crate::parser::parse_date_arg;
use crate::views::table::cadence_label;

pub async fn add_series(
    repo: &impl Repository,
    command: AddCommand,
    today: NaiveDate,
) -> Result<()> {
    let schedule_from = command
        .from
        .as_deref()
        .map(|d| parse_date_arg(d, today))
        .transpose()?
        .unwrap_or(today);
    let end_date = command
        .until
        .as_deref()
        .map(|d| parse_date_arg(d, today))
        .transpose()?;

    let rule = RecurrenceRule::new(
        command.every.into(),
        command.interval,
        schedule_from,
        end_date,
    )?;
    let label = cadence_label(rule.pattern(), rule.interval());
    let next_occurrence = rule.next_occurrence_after(schedule_from);

    let (series, seed) = repo
        .create_series(NewSeriesData {
            title: command.title,
            description: command.description,
            priority: command
                .priority
                .map(Into::into)
                .unwrap_or(TaskPriority::None),
            assigned_to: command.assignee,
            client_id: command.client,
            space_id: command.space,
            rule,
        })
        .await?;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();

    println!(
        "{} Created recurring task: {}",
        "✓".style(success_style),
        seed.title.bright_white().bold()
    );
    println!(
        "  {} Series ID: {}",
        "→".style(info_style),
        series.id.to_string().yellow()
    );
    println!(
        "  {} First occurrence: {} ({})",
        "→".style(info_style),
        seed.date_key.cyan(),
        label
    );
    match next_occurrence {
        Some(next) => println!(
            "  {} Next occurrence: {}",
            "→".style(info_style),
            date_key(next).cyan()
        ),
        None => println!(
            "  {} No further occurrences before the end date",
            "→".style(info_style)
        ),
    }

    Ok(())
}
