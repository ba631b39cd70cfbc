use crate::db::models::{AvailabilityRule, Task};
use crate::db::{AvailabilityRepository, RosterRepository, TaskRepository};
use crate::errors::Error;
use diesel::sqlite::SqliteConnection;
use tracing::info;

/// Marks (or explicitly unmarks) a worker as off on a weekday of every week
///
/// Validation happens before any write: the weekday must be in 0..=6 and the
/// worker must exist.
///
/// # Errors
///
/// * `InvalidWeekday` - weekday outside 0..=6
/// * `UnknownWorker` - no worker exists with that id
pub fn set_day_off(
    conn: &mut SqliteConnection,
    worker_id: &str,
    weekday: i32,
    is_off: bool,
) -> Result<AvailabilityRule, Error> {
    if !(0..=6).contains(&weekday) {
        return Err(Error::InvalidWeekday(weekday));
    }
    RosterRepository::new(conn)
        .find_worker(worker_id)?
        .ok_or_else(|| Error::UnknownWorker(worker_id.to_string()))?;

    let rule = AvailabilityRepository::new(conn).upsert_rule(worker_id, weekday, is_off)?;
    info!(
        "Worker {} is now {} on weekday {}",
        worker_id,
        if is_off { "off" } else { "available" },
        weekday
    );

    Ok(rule)
}

/// Removes the rule for a (worker, weekday) pair, restoring the default of available
///
/// # Returns
///
/// Whether a rule existed to remove
///
/// # Errors
///
/// * `InvalidWeekday` - weekday outside 0..=6
/// * `UnknownWorker` - no worker exists with that id
pub fn clear_day_off(
    conn: &mut SqliteConnection,
    worker_id: &str,
    weekday: i32,
) -> Result<bool, Error> {
    if !(0..=6).contains(&weekday) {
        return Err(Error::InvalidWeekday(weekday));
    }
    RosterRepository::new(conn)
        .find_worker(worker_id)?
        .ok_or_else(|| Error::UnknownWorker(worker_id.to_string()))?;

    let removed = AvailabilityRepository::new(conn).delete_rule(worker_id, weekday)?;
    Ok(removed > 0)
}

/// Re-grades the cleaning level a task requires
///
/// # Errors
///
/// * `UnknownLevel` - the rank is not one of L1, L2, L3
/// * `UnknownTask` - no task exists with that id
pub fn regrade_task(
    conn: &mut SqliteConnection,
    task_id: &str,
    rank: &str,
) -> Result<Task, Error> {
    let level = RosterRepository::new(conn)
        .find_level_by_rank(rank)?
        .ok_or_else(|| Error::UnknownLevel(rank.to_string()))?;

    let mut repo = TaskRepository::new(conn);
    repo.find_task_by_id(task_id)?
        .ok_or_else(|| Error::UnknownTask(task_id.to_string()))?;

    repo.update_task_level(task_id, &level.id)?;
    info!("Task {} re-graded to {}", task_id, rank);

    repo.find_task_by_id(task_id)?
        .ok_or_else(|| Error::UnknownTask(task_id.to_string()))
}
