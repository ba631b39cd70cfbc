use crate::core::AssignmentStatus;
use chrono::NaiveDate;
use diesel::result::Error as DieselError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown worker: {0}")]
    UnknownWorker(String),
    #[error("Unknown room: {0}")]
    UnknownRoom(String),
    #[error("Unknown assignment: {0}")]
    UnknownAssignment(String),
    #[error("Unknown task: {0}")]
    UnknownTask(String),
    #[error("Unknown cleaning level: {0}")]
    UnknownLevel(String),
    #[error("No eligible workers for {0}")]
    NoEligibleWorkers(NaiveDate),
    #[error("Generation failed and was rolled back: {0}")]
    GenerationFailed(#[source] DieselError),
    #[error("Illegal transition: {from} -> {to}")]
    IllegalTransition {
        from: AssignmentStatus,
        to: AssignmentStatus,
    },
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("Invalid weekday: {0} (expected 0..=6)")]
    InvalidWeekday(i32),
    #[error("Unrecognized assignment status: {0}")]
    UnrecognizedStatus(String),
    #[error("Repository unavailable: {0}")]
    RepositoryUnavailable(String),
    #[error("Diesel error: {0}")]
    DieselError(#[from] DieselError),
    #[error("Serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
}
