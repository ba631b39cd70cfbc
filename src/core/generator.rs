use crate::config::ScheduleConfig;
use crate::constants::ROLE_WORKER;
use crate::core::availability::AvailabilityMap;
use crate::core::week::{week_span, weekday_index};
use crate::db::models::Worker;
use crate::db::{AvailabilityRepository, RosterRepository, TaskRepository};
use crate::errors::Error;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Counts reported by one generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationResult {
    /// Tasks created for previously uncovered rooms
    pub tasks_created: usize,
    /// Assignments created across all new tasks
    pub assignments_created: usize,
}

/// Populates tasks and assignments for one target date
///
/// The whole run executes inside a single transaction: a storage failure
/// mid-run rolls everything back and surfaces as `GenerationFailed`, so the
/// caller can retry the full operation.
pub struct AssignmentGenerator<'a> {
    conn: &'a mut SqliteConnection,
    config: &'a ScheduleConfig,
}

impl<'a> AssignmentGenerator<'a> {
    /// Creates a new AssignmentGenerator instance
    pub fn new(conn: &'a mut SqliteConnection, config: &'a ScheduleConfig) -> Self {
        AssignmentGenerator { conn, config }
    }

    /// Creates one task per uncovered active room on `date` and assigns each
    /// to the eligible worker(s) with the lowest load in that ISO week
    ///
    /// Re-running for a date that is already fully covered is a no-op that
    /// still succeeds. A day with no active rooms or no active workers is an
    /// empty day, not an error.
    ///
    /// # Errors
    ///
    /// * `NoEligibleWorkers` - active workers exist but every one is off on `date`
    /// * `GenerationFailed` - a storage failure mid-run; nothing was written
    pub fn generate(&mut self, date: NaiveDate) -> Result<GenerationResult, Error> {
        let config = self.config.clone();
        let result = self
            .conn
            .transaction::<GenerationResult, Error, _>(|conn| {
                generate_for_date(conn, &config, date)
            });

        match result {
            Err(Error::DieselError(e)) => Err(Error::GenerationFailed(e)),
            other => other,
        }
    }
}

fn generate_for_date(
    conn: &mut SqliteConnection,
    config: &ScheduleConfig,
    date: NaiveDate,
) -> Result<GenerationResult, Error> {
    let active_rooms = RosterRepository::new(conn).list_active_rooms()?;
    let covered: HashSet<String> = TaskRepository::new(conn)
        .room_ids_with_task_on(date)?
        .into_iter()
        .collect();
    let pending_rooms: Vec<_> = active_rooms
        .into_iter()
        .filter(|room| !covered.contains(&room.id))
        .collect();

    let schedulable: Vec<Worker> = RosterRepository::new(conn)
        .list_active_workers()?
        .into_iter()
        .filter(|worker| worker.role == ROLE_WORKER)
        .collect();

    if pending_rooms.is_empty() || schedulable.is_empty() {
        debug!(
            "Nothing to generate for {}: {} pending rooms, {} schedulable workers",
            date,
            pending_rooms.len(),
            schedulable.len()
        );
        return Ok(GenerationResult::default());
    }

    let worker_ids: Vec<String> = schedulable.iter().map(|w| w.id.clone()).collect();
    let rules = AvailabilityRepository::new(conn).rules_for_workers(&worker_ids)?;
    let availability = AvailabilityMap::from_rules(&rules);
    let weekday = weekday_index(date);

    let eligible: Vec<Worker> = schedulable
        .into_iter()
        .filter(|worker| availability.is_available(&worker.id, weekday))
        .collect();

    if eligible.is_empty() {
        return Err(Error::NoEligibleWorkers(date));
    }

    let (monday, sunday) = week_span(date);
    let mut loads: HashMap<String, usize> =
        eligible.iter().map(|w| (w.id.clone(), 0)).collect();
    for loaded_worker_id in
        TaskRepository::new(conn).assignment_workers_between(monday, sunday)?
    {
        if let Some(count) = loads.get_mut(&loaded_worker_id) {
            *count += 1;
        }
    }

    let default_level = RosterRepository::new(conn)
        .find_level_by_rank(&config.default_level)?
        .ok_or_else(|| Error::UnknownLevel(config.default_level.clone()))?;

    let mut result = GenerationResult::default();

    for room in &pending_rooms {
        let level_id = TaskRepository::new(conn)
            .latest_level_for_room(&room.id, date)?
            .unwrap_or_else(|| default_level.id.clone());

        let Some(task) = TaskRepository::new(conn).insert_task(room, date, &level_id)? else {
            // another run covered this room between our snapshot and the insert
            debug!("Room {} already covered for {}, skipping", room.id, date);
            continue;
        };
        result.tasks_created += 1;

        let crew_size = if room.is_harvest {
            config.harvest_crew_size.max(1).min(eligible.len())
        } else {
            1
        };

        let mut crew: HashSet<String> = HashSet::new();
        for _ in 0..crew_size {
            let Some(worker) = pick_least_loaded(&eligible, &loads, &crew) else {
                break;
            };

            TaskRepository::new(conn).insert_assignment(&task.id, &worker.id)?;
            *loads.entry(worker.id.clone()).or_insert(0) += 1;
            result.assignments_created += 1;

            debug!(
                "Assigned room {} on {} to worker {}",
                room.name, date, worker.name
            );
            crew.insert(worker.id.clone());
        }
    }

    info!(
        "Generation for {} created {} tasks and {} assignments",
        date, result.tasks_created, result.assignments_created
    );

    Ok(result)
}

/// Worker with the lowest in-run load, ties broken by name then id
fn pick_least_loaded<'w>(
    eligible: &'w [Worker],
    loads: &HashMap<String, usize>,
    exclude: &HashSet<String>,
) -> Option<&'w Worker> {
    eligible
        .iter()
        .filter(|worker| !exclude.contains(&worker.id))
        .min_by(|a, b| {
            let load_a = loads.get(&a.id).copied().unwrap_or(0);
            let load_b = loads.get(&b.id).copied().unwrap_or(0);
            load_a
                .cmp(&load_b)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        })
}
