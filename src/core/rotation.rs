use crate::db::{RosterRepository, TaskRepository};
use crate::errors::Error;
use chrono::NaiveDate;
use diesel::sqlite::SqliteConnection;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Rooms one worker covered (or is planned for) on one date
#[derive(Debug, Clone, Serialize)]
pub struct DayRooms {
    pub date: NaiveDate,
    /// Deduplicated and sorted for stable output
    pub rooms: Vec<String>,
}

/// One worker's share of the rotation over the requested range
#[derive(Debug, Clone, Serialize)]
pub struct WorkerRotation {
    pub worker_id: String,
    pub worker_name: String,
    pub total_assignments: usize,
    pub days: Vec<DayRooms>,
}

/// Per-worker workload view over a date range, used for fairness auditing
#[derive(Debug, Clone, Serialize)]
pub struct RotationSummary {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Ordered by worker name ascending
    pub workers: Vec<WorkerRotation>,
}

/// Summarizes every assignment whose task date falls within the range, inclusive
///
/// Every active worker appears in the result even with zero assignments, so
/// fairness gaps stay visible. Workers that have since been deactivated but
/// still hold assignments in the range appear as well.
///
/// # Errors
///
/// Returns `InvalidRange` when `end` is before `start`; performs no writes
pub fn summarize(
    conn: &mut SqliteConnection,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<RotationSummary, Error> {
    if end < start {
        return Err(Error::InvalidRange { start, end });
    }

    let active_workers = RosterRepository::new(conn).list_active_workers()?;
    let rows = TaskRepository::new(conn).assignment_rooms_between(start, end)?;

    let mut names: HashMap<String, String> = active_workers
        .iter()
        .map(|w| (w.id.clone(), w.name.clone()))
        .collect();

    let mut totals: HashMap<String, usize> =
        active_workers.iter().map(|w| (w.id.clone(), 0)).collect();
    let mut room_sets: HashMap<String, BTreeMap<NaiveDate, BTreeSet<String>>> = HashMap::new();

    for (worker_id, worker_name, task_date, room_name) in rows {
        names.entry(worker_id.clone()).or_insert(worker_name);
        *totals.entry(worker_id.clone()).or_insert(0) += 1;
        room_sets
            .entry(worker_id)
            .or_default()
            .entry(task_date)
            .or_default()
            .insert(room_name);
    }

    let mut workers: Vec<WorkerRotation> = totals
        .into_iter()
        .map(|(worker_id, total_assignments)| {
            let days = room_sets
                .remove(&worker_id)
                .unwrap_or_default()
                .into_iter()
                .map(|(date, rooms)| DayRooms {
                    date,
                    rooms: rooms.into_iter().collect(),
                })
                .collect();

            WorkerRotation {
                worker_name: names
                    .get(&worker_id)
                    .cloned()
                    .unwrap_or_else(|| worker_id.clone()),
                worker_id,
                total_assignments,
                days,
            }
        })
        .collect();

    workers.sort_by(|a, b| {
        a.worker_name
            .cmp(&b.worker_name)
            .then_with(|| a.worker_id.cmp(&b.worker_id))
    });

    Ok(RotationSummary {
        start,
        end,
        workers,
    })
}
