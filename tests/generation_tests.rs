mod common;

use common::*;
use rotaclean::core::{is_available, regrade_task, set_day_off, AssignmentGenerator};
use rotaclean::errors::Error;

#[test]
fn creates_one_task_per_uncovered_room() {
    let mut conn = test_conn();
    insert_room(&mut conn, "room-1", "Kitchen", false);
    insert_room(&mut conn, "room-2", "Hall", false);
    insert_room(&mut conn, "room-3", "Stable", false);
    insert_worker(&mut conn, "w-1", "Ana");
    insert_worker(&mut conn, "w-2", "Ben");

    let config = config();
    let result = AssignmentGenerator::new(&mut conn, &config)
        .generate(d(2024, 6, 3))
        .unwrap();

    assert_eq!(result.tasks_created, 3);
    assert_eq!(result.assignments_created, 3);
    assert_eq!(all_tasks(&mut conn).len(), 3);
    assert_eq!(all_assignments(&mut conn).len(), 3);
}

#[test]
fn balances_load_with_name_as_tie_break() {
    let mut conn = test_conn();
    insert_room(&mut conn, "room-1", "Kitchen", false);
    insert_room(&mut conn, "room-2", "Hall", false);
    insert_room(&mut conn, "room-3", "Stable", false);
    insert_worker(&mut conn, "w-1", "Ana");
    insert_worker(&mut conn, "w-2", "Ben");

    let config = config();
    AssignmentGenerator::new(&mut conn, &config)
        .generate(d(2024, 6, 3))
        .unwrap();

    // rooms are handled in id order: Ana, then Ben, then the tie goes to Ana
    let task1 = task_for_room(&mut conn, "room-1", d(2024, 6, 3));
    let task2 = task_for_room(&mut conn, "room-2", d(2024, 6, 3));
    let task3 = task_for_room(&mut conn, "room-3", d(2024, 6, 3));
    assert_eq!(assignments_for_task(&mut conn, &task1.id)[0].worker_id, "w-1");
    assert_eq!(assignments_for_task(&mut conn, &task2.id)[0].worker_id, "w-2");
    assert_eq!(assignments_for_task(&mut conn, &task3.id)[0].worker_id, "w-1");
}

#[test]
fn generation_is_idempotent() {
    let mut conn = test_conn();
    insert_room(&mut conn, "room-1", "Kitchen", false);
    insert_room(&mut conn, "room-2", "Hall", false);
    insert_worker(&mut conn, "w-1", "Ana");

    let config = config();
    let first = AssignmentGenerator::new(&mut conn, &config)
        .generate(d(2024, 6, 3))
        .unwrap();
    let second = AssignmentGenerator::new(&mut conn, &config)
        .generate(d(2024, 6, 3))
        .unwrap();

    assert_eq!(first.tasks_created, 2);
    assert_eq!(second.tasks_created, 0);
    assert_eq!(second.assignments_created, 0);
    assert_eq!(all_tasks(&mut conn).len(), 2);
    assert_eq!(all_assignments(&mut conn).len(), 2);
}

#[test]
fn covers_only_rooms_added_since_the_last_run() {
    let mut conn = test_conn();
    insert_room(&mut conn, "room-1", "Kitchen", false);
    insert_worker(&mut conn, "w-1", "Ana");

    let config = config();
    AssignmentGenerator::new(&mut conn, &config)
        .generate(d(2024, 6, 3))
        .unwrap();

    insert_room(&mut conn, "room-0", "Annex", false);
    let second = AssignmentGenerator::new(&mut conn, &config)
        .generate(d(2024, 6, 3))
        .unwrap();

    assert_eq!(second.tasks_created, 1);
    assert_eq!(
        task_for_room(&mut conn, "room-0", d(2024, 6, 3)).room_id,
        "room-0"
    );
}

#[test]
fn harvest_rooms_draw_a_distinct_crew() {
    let mut conn = test_conn();
    insert_room(&mut conn, "room-1", "Kitchen", false);
    insert_room(&mut conn, "room-2", "Harvest hall", true);
    insert_room(&mut conn, "room-3", "Stable", false);
    insert_worker(&mut conn, "w-1", "Ana");
    insert_worker(&mut conn, "w-2", "Ben");
    insert_worker(&mut conn, "w-3", "Cora");

    let config = config_with_crew(2);
    let result = AssignmentGenerator::new(&mut conn, &config)
        .generate(d(2024, 6, 3))
        .unwrap();

    assert_eq!(result.tasks_created, 3);
    assert_eq!(result.assignments_created, 4);

    // Kitchen goes to Ana; the harvest hall then draws the two least loaded
    let harvest_task = task_for_room(&mut conn, "room-2", d(2024, 6, 3));
    assert!(harvest_task.is_harvest_shift);
    let mut crew: Vec<String> = assignments_for_task(&mut conn, &harvest_task.id)
        .into_iter()
        .map(|a| a.worker_id)
        .collect();
    crew.sort();
    assert_eq!(crew, vec!["w-2".to_string(), "w-3".to_string()]);

    // everyone is back to equal load, so the stable returns to Ana
    let stable_task = task_for_room(&mut conn, "room-3", d(2024, 6, 3));
    assert_eq!(
        assignments_for_task(&mut conn, &stable_task.id)[0].worker_id,
        "w-1"
    );
}

#[test]
fn harvest_crew_is_capped_at_the_eligible_set() {
    let mut conn = test_conn();
    insert_room(&mut conn, "room-1", "Harvest hall", true);
    insert_worker(&mut conn, "w-1", "Ana");
    insert_worker(&mut conn, "w-2", "Ben");

    let config = config_with_crew(5);
    let result = AssignmentGenerator::new(&mut conn, &config)
        .generate(d(2024, 6, 3))
        .unwrap();

    assert_eq!(result.tasks_created, 1);
    assert_eq!(result.assignments_created, 2);
}

#[test]
fn no_eligible_workers_fails_without_writing() {
    let mut conn = test_conn();
    insert_room(&mut conn, "room-1", "Kitchen", false);
    insert_worker(&mut conn, "w-1", "Ana");
    set_day_off(&mut conn, "w-1", 1, true).unwrap();

    let config = config();
    // 2024-06-03 is a Monday
    let err = AssignmentGenerator::new(&mut conn, &config)
        .generate(d(2024, 6, 3))
        .unwrap_err();

    assert!(matches!(err, Error::NoEligibleWorkers(_)));
    assert!(all_tasks(&mut conn).is_empty());
    assert!(all_assignments(&mut conn).is_empty());
}

#[test]
fn day_off_workers_are_never_assigned() {
    let mut conn = test_conn();
    insert_room(&mut conn, "room-1", "Kitchen", false);
    insert_room(&mut conn, "room-2", "Hall", false);
    insert_worker(&mut conn, "w-1", "Dora");
    insert_worker(&mut conn, "w-2", "Elsa");
    set_day_off(&mut conn, "w-1", 1, true).unwrap();

    assert!(!is_available(&mut conn, "w-1", d(2024, 6, 3)).unwrap());

    let config = config();
    AssignmentGenerator::new(&mut conn, &config)
        .generate(d(2024, 6, 3))
        .unwrap();

    for assignment in all_assignments(&mut conn) {
        assert_eq!(assignment.worker_id, "w-2");
    }
}

#[test]
fn an_empty_day_is_not_an_error() {
    let mut conn = test_conn();
    insert_worker(&mut conn, "w-1", "Ana");

    let config = config();
    let result = AssignmentGenerator::new(&mut conn, &config)
        .generate(d(2024, 6, 3))
        .unwrap();

    assert_eq!(result.tasks_created, 0);
    assert_eq!(result.assignments_created, 0);
}

#[test]
fn a_roster_of_admins_generates_nothing() {
    let mut conn = test_conn();
    insert_room(&mut conn, "room-1", "Kitchen", false);
    insert_worker_role(&mut conn, "w-1", "Ana", "admin");

    let config = config();
    let result = AssignmentGenerator::new(&mut conn, &config)
        .generate(d(2024, 6, 3))
        .unwrap();

    assert_eq!(result.tasks_created, 0);
    assert!(all_assignments(&mut conn).is_empty());
}

#[test]
fn inactive_rooms_are_skipped() {
    let mut conn = test_conn();
    insert_room(&mut conn, "room-1", "Kitchen", false);
    insert_room(&mut conn, "room-2", "Hall", false);
    deactivate_room(&mut conn, "room-2");
    insert_worker(&mut conn, "w-1", "Ana");

    let config = config();
    let result = AssignmentGenerator::new(&mut conn, &config)
        .generate(d(2024, 6, 3))
        .unwrap();

    assert_eq!(result.tasks_created, 1);
    assert_eq!(all_tasks(&mut conn)[0].room_id, "room-1");
}

#[test]
fn workers_take_multiple_rooms_when_outnumbered() {
    let mut conn = test_conn();
    insert_room(&mut conn, "room-1", "Kitchen", false);
    insert_room(&mut conn, "room-2", "Hall", false);
    insert_room(&mut conn, "room-3", "Stable", false);
    insert_worker(&mut conn, "w-1", "Ana");

    let config = config();
    let result = AssignmentGenerator::new(&mut conn, &config)
        .generate(d(2024, 6, 3))
        .unwrap();

    assert_eq!(result.assignments_created, 3);
    for assignment in all_assignments(&mut conn) {
        assert_eq!(assignment.worker_id, "w-1");
    }
}

#[test]
fn weekly_load_carries_across_days_of_the_same_week() {
    let mut conn = test_conn();
    insert_room(&mut conn, "room-1", "Kitchen", false);
    insert_worker(&mut conn, "w-1", "Ana");
    insert_worker(&mut conn, "w-2", "Ben");

    let config = config();
    // Monday: the tie goes to Ana
    AssignmentGenerator::new(&mut conn, &config)
        .generate(d(2024, 6, 3))
        .unwrap();
    // Tuesday: Ana already carries one assignment this week, so Ben is next
    AssignmentGenerator::new(&mut conn, &config)
        .generate(d(2024, 6, 4))
        .unwrap();

    let tuesday_task = task_for_room(&mut conn, "room-1", d(2024, 6, 4));
    assert_eq!(
        assignments_for_task(&mut conn, &tuesday_task.id)[0].worker_id,
        "w-2"
    );

    // the following Monday starts a fresh week, so the tie returns to Ana
    AssignmentGenerator::new(&mut conn, &config)
        .generate(d(2024, 6, 10))
        .unwrap();
    let next_week_task = task_for_room(&mut conn, "room-1", d(2024, 6, 10));
    assert_eq!(
        assignments_for_task(&mut conn, &next_week_task.id)[0].worker_id,
        "w-1"
    );
}

#[test]
fn new_rooms_get_the_default_level() {
    let mut conn = test_conn();
    insert_room(&mut conn, "room-1", "Kitchen", false);
    insert_worker(&mut conn, "w-1", "Ana");

    let config = config();
    AssignmentGenerator::new(&mut conn, &config)
        .generate(d(2024, 6, 3))
        .unwrap();

    let task = task_for_room(&mut conn, "room-1", d(2024, 6, 3));
    assert_eq!(task.cleaning_level_id, level_id_for_rank(&mut conn, "L1"));
}

#[test]
fn regraded_levels_carry_forward_to_the_next_occurrence() {
    let mut conn = test_conn();
    insert_room(&mut conn, "room-1", "Kitchen", false);
    insert_worker(&mut conn, "w-1", "Ana");

    let config = config();
    AssignmentGenerator::new(&mut conn, &config)
        .generate(d(2024, 6, 3))
        .unwrap();

    let task = task_for_room(&mut conn, "room-1", d(2024, 6, 3));
    regrade_task(&mut conn, &task.id, "L3").unwrap();

    AssignmentGenerator::new(&mut conn, &config)
        .generate(d(2024, 6, 4))
        .unwrap();

    let next = task_for_room(&mut conn, "room-1", d(2024, 6, 4));
    assert_eq!(next.cleaning_level_id, level_id_for_rank(&mut conn, "L3"));
}
