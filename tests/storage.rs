use chrono::NaiveDate;

use remind_server::db::Database;

#[test]
fn insert_assigns_increasing_ids_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::new(dir.path().join("tasks.db").to_str().unwrap()).unwrap();

    let due = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let first = db.insert_task("Pay rent", "a@b.com", due, false).unwrap();
    let second = db.insert_task("Buy milk", "c@d.com", due, true).unwrap();
    assert!(second.id > first.id);

    let stored = db.get_task(first.id).unwrap().unwrap();
    assert_eq!(stored.id, first.id);
    assert_eq!(stored.title, "Pay rent");
    assert_eq!(stored.email, "a@b.com");
    assert_eq!(stored.due_date, due);
    assert!(!stored.notified);

    let stored = db.get_task(second.id).unwrap().unwrap();
    assert!(stored.notified);
}

#[test]
fn get_task_returns_none_for_unknown_id() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::new(dir.path().join("tasks.db").to_str().unwrap()).unwrap();

    assert!(db.get_task(42).unwrap().is_none());
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.db");

    let due = NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();

    let db_first = Database::new(path.to_str().unwrap()).unwrap();
    let task = db_first.insert_task("Dentist", "a@b.com", due, false).unwrap();
    drop(db_first);

    let db_second = Database::new(path.to_str().unwrap()).unwrap();
    let stored = db_second.get_task(task.id).unwrap().unwrap();
    assert_eq!(stored.title, "Dentist");
    assert_eq!(stored.due_date, due);
}
