use cadence_core::backfill::{BackfillConfig, BackfillEngine};
use cadence_core::db;
use cadence_core::error::CoreError;
use cadence_core::repository::SqliteRepository;
use cadence_core::timezone;
use clap::Parser;
use owo_colors::{OwoColorize, Style};

mod cli;
mod commands;
mod config;
mod parser;
mod util;
mod views;

#[tokio::main]
async fn main() {
    let config = config::Config::new().unwrap_or_else(|_| config::Config::default());

    let business_tz = match timezone::parse_timezone(&config.timezone) {
        Ok(tz) => tz,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };
    let today = timezone::today_in(business_tz);

    let db_pool = match db::establish_connection(&config.database_path).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };
    let repository = SqliteRepository::new(db_pool);
    let engine = BackfillEngine::new(BackfillConfig {
        max_instances_per_series: config.backfill.max_instances_per_series,
    });

    let cli = cli::Cli::parse();

    let result = match cli.command {
        cli::Commands::Add(command) => commands::add::add_series(&repository, command, today).await,
        cli::Commands::List(command) => {
            commands::list::list_instances(&repository, command, today).await
        }
        cli::Commands::Start(command) => commands::start::start_task(&repository, command).await,
        cli::Commands::Do(command) => commands::r#do::do_task(&repository, command).await,
        cli::Commands::Backfill(command) => {
            commands::backfill::backfill(&repository, &engine, command, today).await
        }
        cli::Commands::Series(command) => {
            commands::series::series_overview(&repository, command).await
        }
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::NotFound(s) => {
                eprintln!("{} {}", "Error:".style(error_style), s);
            }
            CoreError::Validation(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            CoreError::AmbiguousId(tasks) => {
                eprintln!("{}", "Error: Ambiguous ID.".style(error_style));
                eprintln!("Did you mean one of these?");
                for (id, title) in tasks {
                    eprintln!("  {} ({})", id.yellow(), title);
                }
            }
            CoreError::DuplicateInstance { series_id, date_key } => {
                eprintln!(
                    "{} Series {} already has an instance on {}",
                    "Error:".style(error_style),
                    series_id.to_string().yellow(),
                    date_key.yellow()
                );
            }
            CoreError::InvalidTimezone(tz) => {
                eprintln!(
                    "{} Invalid timezone '{}'. Use IANA names like 'America/New_York'",
                    "Error:".style(error_style),
                    tz.yellow()
                );
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
}
