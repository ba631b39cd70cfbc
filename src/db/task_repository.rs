use crate::core::AssignmentStatus;
use crate::db::models::{Assignment, Room, Task};
use crate::errors::Error;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::SqliteConnection;
use uuid::Uuid;

/// Repository for task and assignment records
pub struct TaskRepository<'a> {
    /// Database connection
    pub conn: &'a mut SqliteConnection,
}

impl<'a> TaskRepository<'a> {
    /// Creates a new TaskRepository instance
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        TaskRepository { conn }
    }

    /// Retrieves the task covering a room on a date, if any
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn find_task(
        &mut self,
        the_room_id: &str,
        date: NaiveDate,
    ) -> Result<Option<Task>, Error> {
        use crate::schema::tasks::dsl::*;

        let found = tasks
            .filter(room_id.eq(the_room_id))
            .filter(task_date.eq(date))
            .first::<Task>(self.conn)
            .optional()?;

        Ok(found)
    }

    /// Retrieves a single task by id
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn find_task_by_id(&mut self, the_task_id: &str) -> Result<Option<Task>, Error> {
        use crate::schema::tasks::dsl::*;

        let found = tasks
            .filter(id.eq(the_task_id))
            .first::<Task>(self.conn)
            .optional()?;

        Ok(found)
    }

    /// Retrieves the ids of rooms already holding a task on a date
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn room_ids_with_task_on(&mut self, date: NaiveDate) -> Result<Vec<String>, Error> {
        use crate::schema::tasks::dsl::*;

        let found = tasks
            .filter(task_date.eq(date))
            .select(room_id)
            .load::<String>(self.conn)?;

        Ok(found)
    }

    /// Inserts a new task for a room on a date
    ///
    /// At most one task exists per (room, date); a concurrent run that
    /// covered the room first wins, and this insert reports `None` so the
    /// caller can treat the room as already covered.
    ///
    /// # Arguments
    ///
    /// * `room` - Room the task covers; its harvest flag is copied onto the task
    /// * `date` - Calendar date of the task
    /// * `level_id` - Required cleaning level
    ///
    /// # Returns
    ///
    /// The inserted task, or `None` when the (room, date) pair was already covered
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn insert_task(
        &mut self,
        room: &Room,
        date: NaiveDate,
        level_id: &str,
    ) -> Result<Option<Task>, Error> {
        use crate::schema::tasks;

        let now = Utc::now().to_rfc3339();
        let new_task = Task {
            id: Uuid::new_v4().to_string(),
            task_date: date,
            room_id: room.id.clone(),
            cleaning_level_id: level_id.to_string(),
            is_harvest_shift: room.is_harvest,
            created_at: now.clone(),
            updated_at: now,
        };

        let inserted = diesel::insert_into(tasks::table)
            .values(&new_task)
            .execute(self.conn);

        match inserted {
            Ok(_) => Ok(Some(new_task)),
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Retrieves the cleaning level of the room's most recent task before `date`
    ///
    /// # Returns
    ///
    /// The level id to carry forward, or `None` when the room has no prior task
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn latest_level_for_room(
        &mut self,
        the_room_id: &str,
        before: NaiveDate,
    ) -> Result<Option<String>, Error> {
        use crate::schema::tasks::dsl::*;

        let found = tasks
            .filter(room_id.eq(the_room_id))
            .filter(task_date.lt(before))
            .order_by(task_date.desc())
            .select(cleaning_level_id)
            .first::<String>(self.conn)
            .optional()?;

        Ok(found)
    }

    /// Updates the required cleaning level of a task (admin re-grade)
    ///
    /// # Returns
    ///
    /// The number of rows changed (0 when the task does not exist)
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn update_task_level(
        &mut self,
        the_task_id: &str,
        level_id: &str,
    ) -> Result<usize, Error> {
        use crate::schema::tasks::dsl::*;

        let now = Utc::now().to_rfc3339();
        let changed = diesel::update(tasks.filter(id.eq(the_task_id)))
            .set((cleaning_level_id.eq(level_id), updated_at.eq(&now)))
            .execute(self.conn)?;

        Ok(changed)
    }

    /// Inserts a new assignment binding a worker to a task, status not_started
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn insert_assignment(
        &mut self,
        the_task_id: &str,
        the_worker_id: &str,
    ) -> Result<Assignment, Error> {
        use crate::schema::assignments;

        let now = Utc::now().to_rfc3339();
        let new_assignment = Assignment {
            id: Uuid::new_v4().to_string(),
            task_id: the_task_id.to_string(),
            worker_id: the_worker_id.to_string(),
            status: AssignmentStatus::NotStarted.to_string(),
            started_at: None,
            completed_at: None,
            created_at: now.clone(),
            updated_at: now,
        };

        diesel::insert_into(assignments::table)
            .values(&new_assignment)
            .execute(self.conn)?;

        Ok(new_assignment)
    }

    /// Retrieves a single assignment by id
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn find_assignment(
        &mut self,
        the_assignment_id: &str,
    ) -> Result<Option<Assignment>, Error> {
        use crate::schema::assignments::dsl::*;

        let found = assignments
            .filter(id.eq(the_assignment_id))
            .first::<Assignment>(self.conn)
            .optional()?;

        Ok(found)
    }

    /// Compare-and-set update of an assignment's status and timestamps
    ///
    /// The write only lands when the row still holds `expected` as its
    /// status, so two sessions toggling the same assignment cannot lose an
    /// update to each other.
    ///
    /// # Arguments
    ///
    /// * `the_assignment_id` - Assignment to update
    /// * `expected` - Status the row must still hold for the write to land
    /// * `target` - New status
    /// * `new_started_at` - Full replacement value for started_at
    /// * `new_completed_at` - Full replacement value for completed_at
    ///
    /// # Returns
    ///
    /// The number of rows changed: 1 on success, 0 when the status moved underneath the caller
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn update_assignment_status(
        &mut self,
        the_assignment_id: &str,
        expected: AssignmentStatus,
        target: AssignmentStatus,
        new_started_at: Option<String>,
        new_completed_at: Option<String>,
    ) -> Result<usize, Error> {
        use crate::schema::assignments::dsl::*;

        let now = Utc::now().to_rfc3339();
        let changed = diesel::update(
            assignments
                .filter(id.eq(the_assignment_id))
                .filter(status.eq(expected.to_string())),
        )
        .set((
            status.eq(target.to_string()),
            started_at.eq(new_started_at),
            completed_at.eq(new_completed_at),
            updated_at.eq(&now),
        ))
        .execute(self.conn)?;

        Ok(changed)
    }

    /// Worker ids of every assignment whose task date falls in the range, inclusive
    ///
    /// One entry per assignment; callers fold the list into load counts.
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn assignment_workers_between(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<String>, Error> {
        use crate::schema::{assignments, tasks};

        let found = assignments::table
            .inner_join(tasks::table)
            .filter(tasks::task_date.between(start, end))
            .select(assignments::worker_id)
            .load::<String>(self.conn)?;

        Ok(found)
    }

    /// Assignment rows joined with their worker and room, for the rotation view
    ///
    /// # Returns
    ///
    /// Tuples of (worker id, worker name, task date, room name) for every
    /// assignment whose task date falls in the range, inclusive
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn assignment_rooms_between(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(String, String, NaiveDate, String)>, Error> {
        use crate::schema::{assignments, rooms, tasks, workers};

        let found = assignments::table
            .inner_join(tasks::table.inner_join(rooms::table))
            .inner_join(workers::table)
            .filter(tasks::task_date.between(start, end))
            .select((
                assignments::worker_id,
                workers::name,
                tasks::task_date,
                rooms::name,
            ))
            .load::<(String, String, NaiveDate, String)>(self.conn)?;

        Ok(found)
    }

    /// All assignments bound to a task
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn assignments_for_task(&mut self, the_task_id: &str) -> Result<Vec<Assignment>, Error> {
        use crate::schema::assignments::dsl::*;

        let found = assignments
            .filter(task_id.eq(the_task_id))
            .load::<Assignment>(self.conn)?;

        Ok(found)
    }
}
