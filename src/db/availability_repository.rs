use crate::db::models::AvailabilityRule;
use crate::errors::Error;
use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use uuid::Uuid;

/// Repository for the sparse per-weekday day-off rules
pub struct AvailabilityRepository<'a> {
    /// Database connection
    pub conn: &'a mut SqliteConnection,
}

impl<'a> AvailabilityRepository<'a> {
    /// Creates a new AvailabilityRepository instance
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        AvailabilityRepository { conn }
    }

    /// Retrieves the rules for a set of workers in one query
    ///
    /// # Arguments
    ///
    /// * `worker_ids` - Workers whose rules to load
    ///
    /// # Returns
    ///
    /// All rules belonging to any of the given workers
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn rules_for_workers(
        &mut self,
        worker_ids: &[String],
    ) -> Result<Vec<AvailabilityRule>, Error> {
        use crate::schema::availability_rules::dsl::*;

        let found = availability_rules
            .filter(worker_id.eq_any(worker_ids))
            .load::<AvailabilityRule>(self.conn)?;

        Ok(found)
    }

    /// Inserts or updates the rule for a (worker, weekday) pair
    ///
    /// At most one row exists per pair; a second write for the same pair
    /// updates the existing row in place.
    ///
    /// # Arguments
    ///
    /// * `the_worker_id` - Worker the rule applies to
    /// * `the_weekday` - Weekday index, 0=Sunday..6=Saturday
    /// * `the_is_off` - Whether the worker is off on that weekday
    ///
    /// # Returns
    ///
    /// The stored rule after the write
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn upsert_rule(
        &mut self,
        the_worker_id: &str,
        the_weekday: i32,
        the_is_off: bool,
    ) -> Result<AvailabilityRule, Error> {
        use crate::schema::availability_rules::dsl::*;

        let now = Utc::now().to_rfc3339();

        let existing = availability_rules
            .filter(worker_id.eq(the_worker_id))
            .filter(weekday.eq(the_weekday))
            .first::<AvailabilityRule>(self.conn)
            .optional()?;

        if let Some(found) = existing {
            diesel::update(availability_rules.filter(id.eq(&found.id)))
                .set((is_off.eq(the_is_off), updated_at.eq(&now)))
                .execute(self.conn)?;

            return Ok(AvailabilityRule {
                is_off: the_is_off,
                updated_at: now,
                ..found
            });
        }

        let new_rule = AvailabilityRule {
            id: Uuid::new_v4().to_string(),
            worker_id: the_worker_id.to_string(),
            weekday: the_weekday,
            is_off: the_is_off,
            created_at: now.clone(),
            updated_at: now,
        };

        diesel::insert_into(availability_rules)
            .values(&new_rule)
            .execute(self.conn)?;

        Ok(new_rule)
    }

    /// Deletes the rule for a (worker, weekday) pair, restoring the default
    ///
    /// # Returns
    ///
    /// The number of rows removed (0 when no rule existed)
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn delete_rule(&mut self, the_worker_id: &str, the_weekday: i32) -> Result<usize, Error> {
        use crate::schema::availability_rules::dsl::*;

        let removed = diesel::delete(
            availability_rules
                .filter(worker_id.eq(the_worker_id))
                .filter(weekday.eq(the_weekday)),
        )
        .execute(self.conn)?;

        Ok(removed)
    }
}
