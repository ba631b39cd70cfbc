#![allow(dead_code)]

use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::MigrationHarness;

use rotaclean::config::ScheduleConfig;
use rotaclean::db::{Assignment, Room, Task, Worker, MIGRATIONS};

/// Fresh in-memory database with the schema applied
pub fn test_conn() -> SqliteConnection {
    let mut conn = SqliteConnection::establish(":memory:").expect("in-memory database");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("failed to apply migrations");
    conn
}

pub fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn config() -> ScheduleConfig {
    ScheduleConfig::default()
}

pub fn config_with_crew(harvest_crew_size: usize) -> ScheduleConfig {
    ScheduleConfig {
        harvest_crew_size,
        ..ScheduleConfig::default()
    }
}

pub fn insert_room(conn: &mut SqliteConnection, id: &str, name: &str, is_harvest: bool) -> Room {
    use rotaclean::schema::rooms;

    let now = Utc::now().to_rfc3339();
    let room = Room {
        id: id.to_string(),
        name: name.to_string(),
        is_harvest,
        active: true,
        created_at: now.clone(),
        updated_at: now,
    };
    diesel::insert_into(rooms::table)
        .values(&room)
        .execute(conn)
        .unwrap();
    room
}

pub fn insert_worker(conn: &mut SqliteConnection, id: &str, name: &str) -> Worker {
    insert_worker_role(conn, id, name, "worker")
}

pub fn insert_worker_role(
    conn: &mut SqliteConnection,
    id: &str,
    name: &str,
    role: &str,
) -> Worker {
    use rotaclean::schema::workers;

    let now = Utc::now().to_rfc3339();
    let worker = Worker {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        active: true,
        created_at: now.clone(),
        updated_at: now,
    };
    diesel::insert_into(workers::table)
        .values(&worker)
        .execute(conn)
        .unwrap();
    worker
}

pub fn deactivate_room(conn: &mut SqliteConnection, room_id: &str) {
    use rotaclean::schema::rooms::dsl::*;

    diesel::update(rooms.filter(id.eq(room_id)))
        .set(active.eq(false))
        .execute(conn)
        .unwrap();
}

pub fn deactivate_worker(conn: &mut SqliteConnection, worker_id: &str) {
    use rotaclean::schema::workers::dsl::*;

    diesel::update(workers.filter(id.eq(worker_id)))
        .set(active.eq(false))
        .execute(conn)
        .unwrap();
}

pub fn level_id_for_rank(conn: &mut SqliteConnection, the_rank: &str) -> String {
    use rotaclean::schema::cleaning_levels::dsl::*;

    cleaning_levels
        .filter(rank.eq(the_rank))
        .select(id)
        .first::<String>(conn)
        .unwrap()
}

pub fn all_tasks(conn: &mut SqliteConnection) -> Vec<Task> {
    use rotaclean::schema::tasks::dsl::*;

    tasks.order_by(room_id.asc()).load::<Task>(conn).unwrap()
}

pub fn all_assignments(conn: &mut SqliteConnection) -> Vec<Assignment> {
    use rotaclean::schema::assignments::dsl::*;

    assignments.load::<Assignment>(conn).unwrap()
}

pub fn assignments_for_task(conn: &mut SqliteConnection, the_task_id: &str) -> Vec<Assignment> {
    use rotaclean::schema::assignments::dsl::*;

    assignments
        .filter(task_id.eq(the_task_id))
        .load::<Assignment>(conn)
        .unwrap()
}

pub fn task_for_room(conn: &mut SqliteConnection, the_room_id: &str, date: NaiveDate) -> Task {
    use rotaclean::schema::tasks::dsl::*;

    tasks
        .filter(room_id.eq(the_room_id))
        .filter(task_date.eq(date))
        .first::<Task>(conn)
        .unwrap()
}
