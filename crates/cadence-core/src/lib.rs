//! # Cadence Core Library
//!
//! Recurring-task engine for the cadence CRM: series-based cadences with
//! timezone-aware date keys, lazy backfill of missed occurrences, and
//! per-series summaries.
//!
//! ## Features
//!
//! - **Series-Based Recurrence**: one rule per series, one row per concrete
//!   occurrence, each with its own independent lifecycle
//! - **Calendar-Correct Cadences**: monthly and yearly steps clamp to the
//!   last valid day and re-anchor to the schedule day (Jan 31 -> Feb 29 ->
//!   Mar 31)
//! - **Lazy Backfill**: missed occurrences materialize on demand, never via
//!   a background scheduler; duplicate creation races resolve silently
//! - **Business Timezone**: "due today" follows a configured IANA timezone
//!   rather than the server clock
//! - **Type Safety**: sqlx-backed persistence with a trait-based repository
//!
//! ## Core Modules
//!
//! - [`db`]: Database connection and migration management
//! - [`models`]: Core data structures and transfer objects
//! - [`repository`]: Data access layer with Repository pattern
//! - [`recurrence`]: Cadence rules and occurrence calculation
//! - [`backfill`]: Materialization of missed occurrences
//! - [`summary`]: Per-series aggregates for the series listing
//! - [`timezone`]: Business-timezone and date-key utilities
//! - [`error`]: Error types with context
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cadence_core::{
//!     db,
//!     backfill::BackfillEngine,
//!     models::{NewSeriesData, RecurrencePattern, TaskPriority},
//!     recurrence::RecurrenceRule,
//!     repository::{SeriesRepository, SqliteRepository},
//!     timezone,
//! };
//! use chrono::NaiveDate;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Initialize database
//!     let pool = db::establish_connection("cadence.db").await?;
//!     let repo = SqliteRepository::new(pool);
//!
//!     // Create a weekly series with its seed instance
//!     let rule = RecurrenceRule::new(
//!         RecurrencePattern::Weekly,
//!         1,
//!         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         None,
//!     )?;
//!     let (series, _seed) = repo
//!         .create_series(NewSeriesData {
//!             title: "Send client report".to_string(),
//!             description: None,
//!             priority: TaskPriority::Medium,
//!             assigned_to: None,
//!             client_id: None,
//!             space_id: None,
//!             rule,
//!         })
//!         .await?;
//!
//!     // Materialize everything due up to today (business timezone)
//!     let tz = timezone::parse_timezone(timezone::DEFAULT_TIMEZONE)?;
//!     let engine = BackfillEngine::with_defaults();
//!     let outcome = engine
//!         .backfill_series(&repo, series.id, timezone::today_in(tz))
//!         .await?;
//!     println!("created {} instances", outcome.created);
//!
//!     Ok(())
//! }
//! ```

pub mod backfill;
pub mod db;
pub mod error;
pub mod models;
pub mod recurrence;
pub mod repository;
pub mod summary;
pub mod timezone;
