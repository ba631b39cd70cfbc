use crate::core::week::weekday_index;
use crate::db::models::AvailabilityRule;
use crate::db::{AvailabilityRepository, RosterRepository};
use crate::errors::Error;
use chrono::NaiveDate;
use diesel::sqlite::SqliteConnection;
use std::collections::HashMap;

/// Day-off rules keyed by (worker id, weekday)
///
/// Built once per invocation from the rule rows of the workers involved and
/// passed along explicitly; absence of an entry means available.
#[derive(Debug, Default)]
pub struct AvailabilityMap {
    off_days: HashMap<(String, i32), bool>,
}

impl AvailabilityMap {
    /// Builds the map from loaded rule rows
    pub fn from_rules(rules: &[AvailabilityRule]) -> Self {
        let off_days = rules
            .iter()
            .map(|rule| ((rule.worker_id.clone(), rule.weekday), rule.is_off))
            .collect();

        AvailabilityMap { off_days }
    }

    /// Whether the worker may be scheduled on the given weekday
    pub fn is_available(&self, worker_id: &str, weekday: i32) -> bool {
        !self
            .off_days
            .get(&(worker_id.to_string(), weekday))
            .copied()
            .unwrap_or(false)
    }
}

/// Whether a worker is eligible to work on a calendar date
///
/// # Errors
///
/// Returns `UnknownWorker` when no worker exists with that id
pub fn is_available(
    conn: &mut SqliteConnection,
    worker_id: &str,
    date: NaiveDate,
) -> Result<bool, Error> {
    let worker = RosterRepository::new(conn)
        .find_worker(worker_id)?
        .ok_or_else(|| Error::UnknownWorker(worker_id.to_string()))?;

    let rules = AvailabilityRepository::new(conn).rules_for_workers(&[worker.id.clone()])?;
    let map = AvailabilityMap::from_rules(&rules);

    Ok(map.is_available(&worker.id, weekday_index(date)))
}
