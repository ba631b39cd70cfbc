use crate::schema::{assignments, availability_rules, cleaning_levels, rooms, tasks, workers};
use chrono::NaiveDate;
use diesel::{AsChangeset, Identifiable, Insertable, Queryable};
use serde::{Deserialize, Serialize};

/// A room on the cleaning roster
#[derive(
    Debug, Clone, Serialize, Deserialize, Queryable, Identifiable, AsChangeset, Insertable,
)]
#[diesel(table_name = rooms)]
pub struct Room {
    /// Unique identifier for the room
    pub id: String,
    /// Display name shown on the rota
    pub name: String,
    /// Harvest rooms take a shared shift that may draw more than one worker
    pub is_harvest: bool,
    /// Inactive rooms are kept for history but never scheduled
    pub active: bool,
    /// Timestamp when the room was created
    pub created_at: String,
    /// Timestamp when the room was last updated
    pub updated_at: String,
}

/// A person on the cleaning roster
#[derive(
    Debug, Clone, Serialize, Deserialize, Queryable, Identifiable, AsChangeset, Insertable,
)]
#[diesel(table_name = workers)]
pub struct Worker {
    /// Unique identifier for the worker
    pub id: String,
    /// Display name, also the deterministic tie-break key during generation
    pub name: String,
    /// Role tag; administrators are never scheduled
    pub role: String,
    /// Inactive workers are kept for history but never scheduled
    pub active: bool,
    /// Timestamp when the worker was created
    pub created_at: String,
    /// Timestamp when the worker was last updated
    pub updated_at: String,
}

/// A cleaning thoroughness grade, ordered L1 < L2 < L3
#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Identifiable, Insertable)]
#[diesel(table_name = cleaning_levels)]
pub struct CleaningLevel {
    /// Unique identifier for the level
    pub id: String,
    /// Rank code, one of L1, L2, L3
    pub rank: String,
}

/// A recurring weekly exception marking a worker off on a given weekday
///
/// Only "off" days are stored; a worker with no row for a weekday is
/// available on it. At most one row exists per (worker, weekday) pair.
#[derive(
    Debug, Clone, Serialize, Deserialize, Queryable, Identifiable, AsChangeset, Insertable,
)]
#[diesel(table_name = availability_rules)]
pub struct AvailabilityRule {
    /// Unique identifier for the rule
    pub id: String,
    /// Worker the rule applies to
    pub worker_id: String,
    /// Weekday index, 0=Sunday..6=Saturday
    pub weekday: i32,
    /// Whether the worker is off on that weekday
    pub is_off: bool,
    /// Timestamp when the rule was created
    pub created_at: String,
    /// Timestamp when the rule was last updated
    pub updated_at: String,
}

/// The need to clean one room on one date at a given thoroughness level
#[derive(
    Debug, Clone, Serialize, Deserialize, Queryable, Identifiable, AsChangeset, Insertable,
)]
#[diesel(table_name = tasks)]
pub struct Task {
    /// Unique identifier for the task
    pub id: String,
    /// Calendar date the room is to be cleaned
    pub task_date: NaiveDate,
    /// Room the task covers; at most one task exists per (room, date)
    pub room_id: String,
    /// Required cleaning level; an admin may re-grade it later
    pub cleaning_level_id: String,
    /// Whether the task is a shared harvest shift
    pub is_harvest_shift: bool,
    /// Timestamp when the task was created
    pub created_at: String,
    /// Timestamp when the task was last updated
    pub updated_at: String,
}

/// The binding of one worker to one task, with a progress status
#[derive(
    Debug, Clone, Serialize, Deserialize, Queryable, Identifiable, AsChangeset, Insertable,
)]
#[diesel(table_name = assignments)]
pub struct Assignment {
    /// Unique identifier for the assignment
    pub id: String,
    /// Task the worker is bound to
    pub task_id: String,
    /// Worker carrying out the task
    pub worker_id: String,
    /// Progress status, one of not_started, in_progress, completed
    pub status: String,
    /// Set once, on the move into in_progress
    pub started_at: Option<String>,
    /// Set once, on the move into completed
    pub completed_at: Option<String>,
    /// Timestamp when the assignment was created
    pub created_at: String,
    /// Timestamp when the assignment was last updated
    pub updated_at: String,
}
