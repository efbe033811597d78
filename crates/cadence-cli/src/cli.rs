use cadence_core::models::{RecurrencePattern, TaskPriority, TaskStatus};
use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

/// Recurring-task engine for the cadence CRM
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a recurring series with its first occurrence
    Add(AddCommand),
    /// List task instances
    List(ListCommand),
    /// Mark an instance as in progress
    Start(StartCommand),
    /// Mark an instance as completed
    Do(DoCommand),
    /// Materialize missed occurrences up to a date
    Backfill(BackfillCommand),
    /// Show per-series summaries
    Series(SeriesCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The title of the recurring task
    pub title: String,
    /// How often the task repeats
    #[clap(long, value_enum)]
    pub every: PatternArg,
    /// Repeat every N patterns (every 2 weeks, every 3 months, ...)
    #[clap(long, default_value_t = 1)]
    pub interval: u32,
    /// Anchor date the cadence is counted from (YYYY-MM-DD, defaults to today)
    #[clap(long)]
    pub from: Option<String>,
    /// Stop producing occurrences on or after this date (YYYY-MM-DD)
    #[clap(long)]
    pub until: Option<String>,
    /// The description of the task
    #[clap(short, long)]
    pub description: Option<String>,
    /// The priority of the task
    #[clap(long, value_enum)]
    pub priority: Option<PriorityArg>,
    /// Team member the task is assigned to
    #[clap(long)]
    pub assignee: Option<Uuid>,
    /// Client the task belongs to
    #[clap(long)]
    pub client: Option<Uuid>,
    /// Workspace the task belongs to
    #[clap(long)]
    pub space: Option<Uuid>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Only instances of this series
    #[clap(long)]
    pub series: Option<Uuid>,
    /// Only instances with this status
    #[clap(long, value_enum)]
    pub status: Option<StatusArg>,
}

#[derive(Parser, Debug, Clone)]
pub struct StartCommand {
    /// The ID (or unique prefix) of the instance to start
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DoCommand {
    /// The ID (or unique prefix) of the instance to mark as completed
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct BackfillCommand {
    /// Materialize up to this date instead of today (YYYY-MM-DD)
    #[clap(long)]
    pub as_of: Option<String>,
    /// Backfill a single series instead of all of them
    #[clap(long)]
    pub series: Option<Uuid>,
    /// Print the result as JSON
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SeriesCommand {
    /// Print the summaries as JSON
    #[clap(long)]
    pub json: bool,
}

/// CLI-facing cadence names
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternArg {
    /// Every day
    Daily,
    /// Every week (same weekday)
    Weekly,
    /// Every month (same date, clamped to shorter months)
    Monthly,
    /// Every year (same date)
    Yearly,
}

impl From<PatternArg> for RecurrencePattern {
    fn from(arg: PatternArg) -> Self {
        match arg {
            PatternArg::Daily => RecurrencePattern::Daily,
            PatternArg::Weekly => RecurrencePattern::Weekly,
            PatternArg::Monthly => RecurrencePattern::Monthly,
            PatternArg::Yearly => RecurrencePattern::Yearly,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityArg {
    None,
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for TaskPriority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::None => TaskPriority::None,
            PriorityArg::Low => TaskPriority::Low,
            PriorityArg::Medium => TaskPriority::Medium,
            PriorityArg::High => TaskPriority::High,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusArg {
    Todo,
    InProgress,
    Completed,
}

impl From<StatusArg> for TaskStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Todo => TaskStatus::Todo,
            StatusArg::InProgress => TaskStatus::InProgress,
            StatusArg::Completed => TaskStatus::Completed,
        }
    }
}
