//! Main entry point for the application.
//!
//! This module initializes logging, loads environment variables and
//! configuration, opens the database and applies pending migrations, then
//! dispatches the requested scheduling operation.
//!
//! Every subcommand is a thin shim over one engine entry point; no
//! scheduling decision is made here.

use clap::Parser;
use std::str::FromStr;
use tracing::{error, warn};

use rotaclean::cli::{Cli, Command};
use rotaclean::config::{self, ScheduleConfig};
use rotaclean::core::{
    clear_day_off, is_available, regrade_task, set_day_off, summarize, transition,
    AssignmentGenerator, AssignmentStatus,
};
use rotaclean::db::Database;
use rotaclean::errors::Error;
use rotaclean::utils;

fn main() {
    let cli = Cli::parse();
    utils::init_logging(&cli.logging_level, cli.log_file);

    if let Err(e) = dotenvy::dotenv() {
        warn!("Failed to load .env file: {}", e);
    }

    let config = match &cli.config {
        Some(path) => config::load_config(path).expect("Failed to parse configuration"),
        None => ScheduleConfig::default(),
    };

    let database = Database::new(&config.resolve_database_path());
    if let Err(e) = database.run_migrations() {
        error!("Failed to prepare database: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run_command(&cli.command, &database, &config) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run_command(
    command: &Command,
    database: &Database,
    config: &ScheduleConfig,
) -> Result<(), Error> {
    let mut conn = database.get_conn()?;

    match command {
        Command::Generate { date } => {
            let result = AssignmentGenerator::new(&mut conn, config).generate(*date)?;
            println!(
                "Created {} tasks and {} assignments for {}",
                result.tasks_created, result.assignments_created, date
            );
        }
        Command::Transition { assignment, to } => {
            let target = AssignmentStatus::from_str(to)
                .map_err(|_| Error::UnrecognizedStatus(to.clone()))?;
            let updated = transition(&mut conn, assignment, target)?;
            println!("Assignment {} is now {}", updated.id, updated.status);
        }
        Command::Rotation { from, to } => {
            let summary = summarize(&mut conn, *from, *to)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Availability { worker, date } => {
            let available = is_available(&mut conn, worker, *date)?;
            if available {
                println!("Worker {} can be scheduled on {}", worker, date);
            } else {
                println!("Worker {} is off on {}", worker, date);
            }
        }
        Command::DayOff {
            worker,
            weekday,
            clear,
        } => {
            if *clear {
                let removed = clear_day_off(&mut conn, worker, *weekday)?;
                if removed {
                    println!(
                        "Cleared the {} day off for worker {}",
                        utils::weekday_name(*weekday),
                        worker
                    );
                } else {
                    println!(
                        "Worker {} had no rule for {}",
                        worker,
                        utils::weekday_name(*weekday)
                    );
                }
            } else {
                set_day_off(&mut conn, worker, *weekday, true)?;
                println!(
                    "Worker {} is now off on {}s",
                    worker,
                    utils::weekday_name(*weekday)
                );
            }
        }
        Command::Regrade { task, level } => {
            let updated = regrade_task(&mut conn, task, level)?;
            println!("Task {} now requires level {}", updated.id, level);
        }
    }

    Ok(())
}
