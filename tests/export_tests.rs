use predicates::str::contains;
use std::fs;

mod common;
use common::{ds, init_db, setup_test_db, temp_out, today_str};

fn seed(name: &str, db_path: &str) {
    init_db(name, db_path);
    ds(name)
        .args(["--db", db_path, "priority", "set", "1", "Call lab"])
        .assert()
        .success();
    ds(name)
        .args(["--db", db_path, "slot", "set", "10:00 AM", "New patient intake"])
        .assert()
        .success();
    ds(name)
        .args(["--db", db_path, "goal", "--patients", "38"])
        .assert()
        .success();
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    seed("export_json", &db_path);
    let out = temp_out("export_json", "json");

    ds("export_json")
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(v["date"], today_str());
    assert_eq!(v["priorities"][0], "Call lab");
    assert_eq!(v["schedule"][0]["time"], "10:00 AM");
    assert_eq!(v["patientGoal"], "38");
    assert!(v.get("revenueGoal").is_none());
}

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    seed("export_csv", &db_path);
    let out = temp_out("export_csv", "csv");

    ds("export_csv")
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("section,slot,text"));
    assert!(content.contains("goal,Patients,38"));
    assert!(content.contains("priority,1,Call lab"));
    assert!(content.contains("schedule,10:00 AM,New patient intake"));
}

#[test]
fn test_export_pdf() {
    let db_path = setup_test_db("export_pdf");
    seed("export_pdf", &db_path);
    let out = temp_out("export_pdf", "pdf");

    ds("export_pdf")
        .args(["--db", &db_path, "export", "--format", "pdf", "--file", &out])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let db_path = setup_test_db("export_overwrite");
    seed("export_overwrite", &db_path);
    let out = temp_out("export_overwrite", "json");
    fs::write(&out, "keep").unwrap();

    ds("export_overwrite")
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep");

    ds("export_overwrite")
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--force",
        ])
        .assert()
        .success();
    assert_ne!(fs::read_to_string(&out).unwrap(), "keep");
}
