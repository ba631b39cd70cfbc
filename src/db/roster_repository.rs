use crate::db::models::{CleaningLevel, Room, Worker};
use crate::errors::Error;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

/// Read-only repository over the room, worker and cleaning level catalog
///
/// Rooms and workers are managed by the surrounding application; the
/// scheduling engine only ever reads them.
pub struct RosterRepository<'a> {
    /// Database connection
    pub conn: &'a mut SqliteConnection,
}

impl<'a> RosterRepository<'a> {
    /// Creates a new RosterRepository instance
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        RosterRepository { conn }
    }

    /// Retrieves all active rooms, ordered by id ascending for deterministic runs
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn list_active_rooms(&mut self) -> Result<Vec<Room>, Error> {
        use crate::schema::rooms::dsl::*;

        let found = rooms
            .filter(active.eq(true))
            .order_by(id.asc())
            .load::<Room>(self.conn)?;

        Ok(found)
    }

    /// Retrieves all active workers, regardless of role
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn list_active_workers(&mut self) -> Result<Vec<Worker>, Error> {
        use crate::schema::workers::dsl::*;

        let found = workers
            .filter(active.eq(true))
            .order_by(name.asc())
            .load::<Worker>(self.conn)?;

        Ok(found)
    }

    /// Retrieves a single worker by id
    ///
    /// # Returns
    ///
    /// The worker if one exists with that id
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn find_worker(&mut self, the_worker_id: &str) -> Result<Option<Worker>, Error> {
        use crate::schema::workers::dsl::*;

        let found = workers
            .filter(id.eq(the_worker_id))
            .first::<Worker>(self.conn)
            .optional()?;

        Ok(found)
    }

    /// Retrieves a single room by id
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn find_room(&mut self, the_room_id: &str) -> Result<Option<Room>, Error> {
        use crate::schema::rooms::dsl::*;

        let found = rooms
            .filter(id.eq(the_room_id))
            .first::<Room>(self.conn)
            .optional()?;

        Ok(found)
    }

    /// Retrieves a cleaning level by its rank code (L1, L2, L3)
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn find_level_by_rank(&mut self, the_rank: &str) -> Result<Option<CleaningLevel>, Error> {
        use crate::schema::cleaning_levels::dsl::*;

        let found = cleaning_levels
            .filter(rank.eq(the_rank))
            .first::<CleaningLevel>(self.conn)
            .optional()?;

        Ok(found)
    }
}
