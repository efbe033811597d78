use cadence_core::models::{RecurrencePattern, SeriesSummary, TaskInstance, TaskPriority, TaskStatus};
use chrono::{NaiveDate, NaiveTime};
use chrono_humanize::Humanize;
use comfy_table::{Attribute, Cell, Color, Row, Table};

/// Human label for a cadence: "weekly", "every 2 weeks", ...
pub fn cadence_label(pattern: RecurrencePattern, interval: u32) -> String {
    if interval == 1 {
        return pattern.to_string();
    }
    let unit = match pattern {
        RecurrencePattern::Daily => "days",
        RecurrencePattern::Weekly => "weeks",
        RecurrencePattern::Monthly => "months",
        RecurrencePattern::Yearly => "years",
    };
    format!("every {} {}", interval, unit)
}

pub fn display_instances(instances: &[TaskInstance], today: NaiveDate) {
    if instances.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Status", "Due", "Series", "Priority"]);

    for task in instances {
        let mut row = Row::new();
        row.add_cell(Cell::new(&task.id.to_string()[..7]));

        let mut title_cell = Cell::new(format!("↻ {}", task.title));
        match task.status {
            TaskStatus::Completed => {
                title_cell = title_cell
                    .add_attribute(Attribute::CrossedOut)
                    .fg(Color::DarkGrey);
            }
            TaskStatus::Todo | TaskStatus::InProgress => {
                title_cell = match task.priority {
                    TaskPriority::High => title_cell.fg(Color::Red).add_attribute(Attribute::Bold),
                    TaskPriority::Medium => title_cell.fg(Color::Yellow),
                    TaskPriority::Low => title_cell.fg(Color::Green),
                    TaskPriority::None => title_cell,
                };
            }
        };
        row.add_cell(title_cell);

        let mut status_cell = Cell::new(task.status.to_string());
        status_cell = match task.status {
            TaskStatus::Completed => status_cell.fg(Color::Green),
            TaskStatus::InProgress => status_cell.fg(Color::Cyan),
            TaskStatus::Todo => status_cell,
        };
        row.add_cell(status_cell);

        let due_text = task
            .due_date
            .and_time(NaiveTime::MIN)
            .and_utc()
            .humanize();
        let due_cell = if task.status.is_open() {
            if task.due_date < today {
                Cell::new(due_text).fg(Color::Red) // Overdue
            } else if task.due_date == today {
                Cell::new(due_text).fg(Color::Yellow) // Due today
            } else {
                Cell::new(due_text)
            }
        } else {
            Cell::new(due_text)
        };
        row.add_cell(due_cell);

        row.add_cell(Cell::new(&task.series_id.to_string()[..7]));
        row.add_cell(Cell::new(format!("{:?}", task.priority)));
        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_summaries(summaries: &[SeriesSummary]) {
    if summaries.is_empty() {
        println!("No recurring series found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        "ID", "Title", "Cadence", "Last", "Next", "Done/Total",
    ]);

    for summary in summaries {
        let mut row = Row::new();
        row.add_cell(Cell::new(&summary.series_id.to_string()[..7]));
        row.add_cell(Cell::new(&summary.title));
        row.add_cell(Cell::new(cadence_label(
            summary.recurring_pattern,
            summary.recurring_interval,
        )));
        row.add_cell(Cell::new(&summary.last_instance_date_key));
        row.add_cell(Cell::new(
            summary
                .next_instance_date_key
                .as_deref()
                .unwrap_or("ended"),
        ));

        let done = format!(
            "{}/{}",
            summary.completed_instances, summary.total_instances
        );
        let done_cell = if summary.open_instances == 0 {
            Cell::new(done).fg(Color::Green)
        } else {
            Cell::new(done)
        };
        row.add_cell(done_cell);
        table.add_row(row);
    }

    println!("{table}");
}
