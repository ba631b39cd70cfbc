use crate::constants::STATUS_CAS_ATTEMPTS;
use crate::core::assignment_status::AssignmentStatus;
use crate::db::models::Assignment;
use crate::db::TaskRepository;
use crate::errors::Error;
use chrono::Utc;
use diesel::sqlite::SqliteConnection;
use std::str::FromStr;
use tracing::{debug, info};

/// Advances an assignment's status, stamping timestamps exactly once
///
/// Same-state requests succeed without writing anything, so repeating a
/// transition is safe. Backward requests fail with `IllegalTransition` and
/// leave the assignment untouched. The write is a compare-and-set on the
/// current status; a lost race re-reads and re-validates against the status
/// that won.
///
/// # Errors
///
/// * `UnknownAssignment` - no assignment exists with that id
/// * `IllegalTransition` - the request would move the status backwards
/// * `RepositoryUnavailable` - the row stayed contended across every retry
pub fn transition(
    conn: &mut SqliteConnection,
    assignment_id: &str,
    target: AssignmentStatus,
) -> Result<Assignment, Error> {
    for attempt in 0..STATUS_CAS_ATTEMPTS {
        let mut repo = TaskRepository::new(conn);

        let current = repo
            .find_assignment(assignment_id)?
            .ok_or_else(|| Error::UnknownAssignment(assignment_id.to_string()))?;
        let from = AssignmentStatus::from_str(&current.status)
            .map_err(|_| Error::UnrecognizedStatus(current.status.clone()))?;

        if from == target {
            debug!("Assignment {} already {}, nothing to do", current.id, target);
            return Ok(current);
        }
        if !from.can_advance_to(target) {
            return Err(Error::IllegalTransition { from, to: target });
        }

        let now = Utc::now().to_rfc3339();
        let started_at = match target {
            AssignmentStatus::InProgress if current.started_at.is_none() => Some(now.clone()),
            _ => current.started_at.clone(),
        };
        let completed_at = match target {
            AssignmentStatus::Completed if current.completed_at.is_none() => Some(now.clone()),
            _ => current.completed_at.clone(),
        };

        let changed = repo.update_assignment_status(
            assignment_id,
            from,
            target,
            started_at,
            completed_at,
        )?;

        if changed == 1 {
            info!("Assignment {} moved {} -> {}", assignment_id, from, target);
            return repo
                .find_assignment(assignment_id)?
                .ok_or_else(|| Error::UnknownAssignment(assignment_id.to_string()));
        }

        // someone else moved the status first; validate against what they left
        debug!(
            "Assignment {} changed under us (attempt {}), re-reading",
            assignment_id,
            attempt + 1
        );
    }

    Err(Error::RepositoryUnavailable(format!(
        "assignment {} stayed contended",
        assignment_id
    )))
}
