use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{count_log, ds, get_raw, init_db, put_raw, setup_test_db, today_str};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_creates_schema");

    ds("init_creates_schema")
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert_eq!(count_log(&db_path, "migration_applied"), 2);
    assert_eq!(count_log(&db_path, "init"), 1);
}

#[test]
fn test_show_empty_sheet() {
    let db_path = setup_test_db("show_empty");
    init_db("show_empty", &db_path);

    ds("show_empty")
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("Today's Priorities"))
        .stdout(contains("6:00 AM"))
        .stdout(contains("2:00 PM"))
        .stdout(contains("Nothing saved for today yet."));
}

#[test]
fn test_edits_are_auto_saved_once_per_command() {
    let db_path = setup_test_db("autosave_once");
    init_db("autosave_once", &db_path);

    ds("autosave_once")
        .args([
            "--db",
            &db_path,
            "priority",
            "add",
            "Call lab",
            "Restock forms",
            "Confirm rooms",
        ])
        .assert()
        .success()
        .stdout(contains("Priority #6 added: Confirm rooms"));

    assert_eq!(count_log(&db_path, "autosave"), 1);

    let raw = get_raw(&db_path, "daySheet_auto").expect("auto slot written");
    assert!(raw.contains(&today_str()));
    assert!(raw.contains("\"Call lab\",\"Restock forms\",\"Confirm rooms\""));
    assert!(get_raw(&db_path, "daySheet").is_none());
}

#[test]
fn test_sheet_survives_between_commands() {
    let db_path = setup_test_db("survives");
    init_db("survives", &db_path);

    ds("survives")
        .args(["--db", &db_path, "slot", "set", "8:00 AM", "Morning huddle"])
        .assert()
        .success();

    ds("survives")
        .args(["--db", &db_path, "notes", "Dr. K out after 3"])
        .assert()
        .success();

    ds("survives")
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("Morning huddle"))
        .stdout(contains("Dr. K out after 3"))
        .stdout(contains("Nothing saved").not());
}

#[test]
fn test_priority_set_and_remove() {
    let db_path = setup_test_db("priority_set_remove");
    init_db("priority_set_remove", &db_path);

    ds("priority_set_remove")
        .args(["--db", &db_path, "priority", "set", "1", "Verify insurance"])
        .assert()
        .success();

    ds("priority_set_remove")
        .args(["--db", &db_path, "priority", "set", "2", "Fax referrals"])
        .assert()
        .success();

    ds("priority_set_remove")
        .args(["--db", &db_path, "priority", "remove", "1"])
        .assert()
        .success()
        .stdout(contains("Priority #1 removed: Verify insurance"));

    ds("priority_set_remove")
        .args(["--db", &db_path, "show", "--view", "priorities"])
        .assert()
        .success()
        .stdout(contains("Fax referrals"))
        .stdout(contains("Verify insurance").not());
}

#[test]
fn test_priority_out_of_range_fails() {
    let db_path = setup_test_db("priority_oor");
    init_db("priority_oor", &db_path);

    ds("priority_oor")
        .args(["--db", &db_path, "priority", "set", "9", "nope"])
        .assert()
        .failure()
        .stderr(contains("No priority row #9"));

    assert!(get_raw(&db_path, "daySheet_auto").is_none());
}

#[test]
fn test_slot_add_uses_next_label() {
    let db_path = setup_test_db("slot_add");
    init_db("slot_add", &db_path);

    ds("slot_add")
        .args(["--db", &db_path, "slot", "add", "Charting"])
        .assert()
        .success()
        .stdout(contains("Time slot 4:00 PM added"));

    ds("slot_add")
        .args(["--db", &db_path, "slot", "add", "--label", "5:30 PM", "Lock up"])
        .assert()
        .success();

    ds("slot_add")
        .args(["--db", &db_path, "show", "--view", "schedule"])
        .assert()
        .success()
        .stdout(contains("4:00 PM"))
        .stdout(contains("Charting"))
        .stdout(contains("5:30 PM"))
        .stdout(contains("Lock up"));
}

#[test]
fn test_slot_add_without_activity_warns() {
    let db_path = setup_test_db("slot_empty");
    init_db("slot_empty", &db_path);

    ds("slot_empty")
        .args(["--db", &db_path, "slot", "add", "--label", "5:30 PM"])
        .assert()
        .success()
        .stdout(contains("Time slot 5:30 PM added"))
        .stderr(contains("Empty time slots are not saved"));

    ds("slot_empty")
        .args(["--db", &db_path, "slot", "add", "--label", "6:30 PM", "Lock up"])
        .assert()
        .success()
        .stderr(contains("Empty time slots").not());
}

#[test]
fn test_slot_set_unknown_label_fails() {
    let db_path = setup_test_db("slot_unknown");
    init_db("slot_unknown", &db_path);

    ds("slot_unknown")
        .args(["--db", &db_path, "slot", "set", "7:15 AM", "x"])
        .assert()
        .failure()
        .stderr(contains("No time slot labelled 7:15 AM"));
}

#[test]
fn test_manual_save() {
    let db_path = setup_test_db("manual_save");
    init_db("manual_save", &db_path);

    ds("manual_save")
        .args(["--db", &db_path, "notes", "Billing closes early"])
        .assert()
        .success();

    ds("manual_save")
        .args(["--db", &db_path, "save"])
        .assert()
        .success()
        .stdout(contains("Saved!"));

    let raw = get_raw(&db_path, "daySheet").expect("manual slot written");
    assert!(raw.contains("Billing closes early"));
    assert!(raw.contains("savedAt"));
    assert_eq!(count_log(&db_path, "save"), 1);
}

#[test]
fn test_stale_record_is_not_loaded() {
    let db_path = setup_test_db("stale_record");
    init_db("stale_record", &db_path);

    let stale = r#"{"date":"2001-02-03","priorities":["Old task"],"schedule":[{"time":"6:00 AM","activity":"Old slot"}],"notes":"old notes","savedAt":"2001-02-03T09:00:00Z"}"#;
    put_raw(&db_path, "daySheet_auto", stale);

    ds("stale_record")
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("Old task").not())
        .stdout(contains("old notes").not())
        .stdout(contains("Nothing saved for today yet."));

    // ignored, not deleted
    assert_eq!(get_raw(&db_path, "daySheet_auto").as_deref(), Some(stale));
}

#[test]
fn test_corrupt_record_is_treated_as_absent() {
    let db_path = setup_test_db("corrupt_record");
    init_db("corrupt_record", &db_path);
    put_raw(&db_path, "daySheet_auto", "{not json");

    ds("corrupt_record")
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stderr(contains("Could not load saved data"))
        .stdout(contains("Nothing saved for today yet."));
}

#[test]
fn test_record_from_browser_is_reconciled() {
    let db_path = setup_test_db("browser_record");
    init_db("browser_record", &db_path);

    let rec = format!(
        r#"{{"date":"{}","priorities":["One","Two","Three","Four"],"schedule":[{{"time":"6:00 AM","activity":"Open doors"}},{{"time":"7:30 AM","activity":"Fax refills"}}],"notes":"hello","savedAt":"2026-01-01T08:00:00.000Z"}}"#,
        today_str()
    );
    put_raw(&db_path, "daySheet", &rec);

    ds("browser_record")
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("Four"))
        .stdout(contains("Open doors"))
        .stdout(contains("7:30 AM"))
        .stdout(contains("Fax refills"));
}

#[test]
fn test_clear_declined_keeps_data() {
    let db_path = setup_test_db("clear_declined");
    init_db("clear_declined", &db_path);

    ds("clear_declined")
        .args(["--db", &db_path, "notes", "keep me"])
        .assert()
        .success();
    ds("clear_declined")
        .args(["--db", &db_path, "save"])
        .assert()
        .success();

    ds("clear_declined")
        .args(["--db", &db_path, "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    assert!(get_raw(&db_path, "daySheet").is_some());
    assert!(get_raw(&db_path, "daySheet_auto").is_some());
    assert_eq!(count_log(&db_path, "clear"), 0);
}

#[test]
fn test_clear_confirmed_removes_both_slots() {
    let db_path = setup_test_db("clear_confirmed");
    init_db("clear_confirmed", &db_path);

    ds("clear_confirmed")
        .args(["--db", &db_path, "priority", "add", "gone"])
        .assert()
        .success();
    ds("clear_confirmed")
        .args(["--db", &db_path, "save"])
        .assert()
        .success();

    ds("clear_confirmed")
        .args(["--db", &db_path, "clear"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Day sheet cleared."));

    assert!(get_raw(&db_path, "daySheet").is_none());
    assert!(get_raw(&db_path, "daySheet_auto").is_none());

    ds("clear_confirmed")
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("gone").not());
}

#[test]
fn test_goals_persist_and_survive_clear() {
    let db_path = setup_test_db("goals");
    init_db("goals", &db_path);

    ds("goals")
        .args(["--db", &db_path, "goal", "--revenue", " 15000 ", "--patients", "42"])
        .assert()
        .success()
        .stdout(contains("Revenue goal set: 15000"));

    assert_eq!(get_raw(&db_path, "revenueGoal").as_deref(), Some("15000"));

    ds("goals")
        .args(["--db", &db_path, "clear", "--yes"])
        .assert()
        .success();

    ds("goals")
        .args(["--db", &db_path, "goal"])
        .assert()
        .success()
        .stdout(contains("15000"))
        .stdout(contains("42"));
}

#[test]
fn test_log_print_lists_operations() {
    let db_path = setup_test_db("log_print");
    init_db("log_print", &db_path);

    ds("log_print")
        .args(["--db", &db_path, "notes", "x"])
        .assert()
        .success();

    ds("log_print")
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("init"))
        .stdout(contains("autosave"));
}
