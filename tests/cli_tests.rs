use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, rhk, setup_test_db, snapshot_json, temp_out, write_csv};

const DAY1: &str = "2026-03-07T12:00:00Z";
const DAY2: &str = "2026-03-08T12:00:00Z";

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rhk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_show_json_maps_seeded_tables() {
    let db_path = setup_test_db("cli_show_json");
    init_db_with_data(&db_path, "cli_show_json");

    let snap = snapshot_json(&db_path, Some(DAY1));

    let rooms = snap["rooms"].as_array().expect("rooms array");
    let numbers: Vec<&str> = rooms
        .iter()
        .map(|r| r["roomNumber"].as_str().unwrap())
        .collect();
    assert_eq!(numbers, vec!["101", "102", "201"]);

    // ids are physical rows: header, floor, 101, 102, floor, 201
    assert_eq!(rooms[0]["id"], 3);
    assert_eq!(rooms[2]["id"], 6);
    assert_eq!(rooms[0]["floor"], "1st Floor");
    assert_eq!(rooms[2]["floor"], "2nd Floor");

    let areas = snap["areas"].as_array().expect("areas array");
    assert_eq!(areas.len(), 2);
    assert_eq!(areas[1]["name"], "Gym");
    assert_eq!(areas[1]["location"], "Unassigned");

    assert_eq!(snap["staff"].as_array().unwrap().len(), 2);
    assert_eq!(snap["counts"]["totalRooms"], 3);
    assert_eq!(snap["counts"]["totalAreas"], 2);
}

#[test]
fn test_first_snapshot_of_the_day_resets_board() {
    let db_path = setup_test_db("cli_first_reset");
    init_db_with_data(&db_path, "cli_first_reset");

    let snap = snapshot_json(&db_path, Some(DAY1));

    for room in snap["rooms"].as_array().unwrap() {
        assert_eq!(room["status"], "Dirty");
        assert_eq!(room["assignedTo"], "");
    }
    assert_eq!(snap["areas"][0]["status"], "Dirty");
    assert_eq!(snap["areas"][0]["assignedTo"], "");
    assert_eq!(snap["counts"]["dirtyRooms"], 3);
    assert_eq!(snap["counts"]["cleanRooms"], 0);
}

#[test]
fn test_room_update_survives_same_day_and_resets_next_day() {
    let db_path = setup_test_db("cli_room_update");
    init_db_with_data(&db_path, "cli_room_update");

    let out = rhk()
        .env("RHOUSEKEEPER_NOW", DAY1)
        .args([
            "--db", &db_path, "room", "--id", "3", "--status", "clean", "--assign", "Ana",
            "--time-in", "--json",
        ])
        .output()
        .expect("run room");
    assert!(out.status.success());

    let snap: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid json");
    let room = &snap["rooms"][0];
    assert_eq!(room["status"], "Clean");
    assert_eq!(room["assignedTo"], "Ana");
    assert!(room["timeIn"].as_str().unwrap().contains("2026"));
    assert_eq!(room["timeOut"], "");
    assert_eq!(snap["counts"]["cleanRooms"], 1);

    let same_day = snapshot_json(&db_path, Some(DAY1));
    assert_eq!(same_day["rooms"][0]["status"], "Clean");

    let next_day = snapshot_json(&db_path, Some(DAY2));
    assert_eq!(next_day["rooms"][0]["status"], "Dirty");
    assert_eq!(next_day["rooms"][0]["assignedTo"], "");
    assert_eq!(next_day["rooms"][0]["timeIn"], "");
}

#[test]
fn test_area_reset_wins_over_time_in() {
    let db_path = setup_test_db("cli_area_reset");
    init_db_with_data(&db_path, "cli_area_reset");

    let out = rhk()
        .env("RHOUSEKEEPER_NOW", DAY1)
        .args([
            "--db", &db_path, "area", "--id", "2", "--status", "in-progress", "--assign", "Bo",
            "--time-in", "--reset", "--json",
        ])
        .output()
        .expect("run area");
    assert!(out.status.success());

    let snap: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid json");
    let lobby = &snap["areas"][0];
    assert_eq!(lobby["status"], "In Progress");
    assert_eq!(lobby["assignedTo"], "");
    assert_eq!(lobby["timeIn"], "");
    assert_eq!(snap["counts"]["inProgressAreas"], 1);
}

#[test]
fn test_update_rejects_header_row() {
    let db_path = setup_test_db("cli_invalid_id");
    init_db_with_data(&db_path, "cli_invalid_id");

    rhk()
        .args(["--db", &db_path, "room", "--id", "1", "--status", "clean"])
        .assert()
        .failure()
        .stderr(contains("Invalid row id"));

    rhk()
        .args(["--db", &db_path, "area", "--id", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid row id"));
}

#[test]
fn test_update_rejects_rows_past_the_table() {
    let db_path = setup_test_db("cli_row_past_end");
    init_db_with_data(&db_path, "cli_row_past_end");

    rhk()
        .env("RHOUSEKEEPER_NOW", DAY1)
        .args(["--db", &db_path, "room", "--id", "9223372036854775807", "--status", "clean"])
        .assert()
        .failure()
        .stderr(contains("Invalid row id"));

    let snap = snapshot_json(&db_path, Some(DAY1));
    assert_eq!(snap["counts"]["totalRooms"], 3);
    assert_eq!(snap["counts"]["cleanRooms"], 0);
}

#[test]
fn test_update_rejects_unknown_status() {
    let db_path = setup_test_db("cli_invalid_status");
    init_db_with_data(&db_path, "cli_invalid_status");

    rhk()
        .args(["--db", &db_path, "room", "--id", "3", "--status", "sparkling"])
        .assert()
        .failure()
        .stderr(contains("Invalid status"));
}

#[test]
fn test_reset_if_due_runs_once_per_day() {
    let db_path = setup_test_db("cli_reset_if_due");
    init_db_with_data(&db_path, "cli_reset_if_due");

    rhk()
        .env("RHOUSEKEEPER_NOW", DAY1)
        .args(["--db", &db_path, "reset", "--if-due"])
        .assert()
        .success()
        .stdout(contains("Daily reset for 2026-03-07"));

    rhk()
        .env("RHOUSEKEEPER_NOW", DAY1)
        .args(["--db", &db_path, "reset", "--if-due"])
        .assert()
        .success()
        .stdout(contains("already done"));

    // The scheduled path always runs.
    rhk()
        .env("RHOUSEKEEPER_NOW", DAY1)
        .args(["--db", &db_path, "reset"])
        .assert()
        .success()
        .stdout(contains("3 rooms and 2 areas"));
}

#[test]
fn test_scheduled_reset_clears_work_done_today() {
    let db_path = setup_test_db("cli_reset_scheduled");
    init_db_with_data(&db_path, "cli_reset_scheduled");

    rhk()
        .env("RHOUSEKEEPER_NOW", DAY1)
        .args(["--db", &db_path, "room", "--id", "4", "--status", "clean"])
        .assert()
        .success();

    rhk()
        .env("RHOUSEKEEPER_NOW", DAY1)
        .args(["--db", &db_path, "reset"])
        .assert()
        .success();

    let snap = snapshot_json(&db_path, Some(DAY1));
    assert_eq!(snap["rooms"][1]["status"], "Dirty");
}

#[test]
fn test_show_without_tables_is_empty() {
    let db_path = setup_test_db("cli_show_empty");

    rhk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let snap = snapshot_json(&db_path, Some(DAY1));
    assert_eq!(snap["rooms"].as_array().unwrap().len(), 0);
    assert_eq!(snap["counts"]["totalRooms"], 0);
}

#[test]
fn test_show_prints_tables() {
    let db_path = setup_test_db("cli_show_text");
    init_db_with_data(&db_path, "cli_show_text");

    rhk()
        .env("RHOUSEKEEPER_NOW", DAY1)
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("Rooms: 3 total"))
        .stdout(contains("Lobby"))
        .stdout(contains("Supervisor"));
}

#[test]
fn test_import_requires_header() {
    let db_path = setup_test_db("cli_import_empty");
    rhk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let file = write_csv("cli_import_empty", "");
    rhk()
        .args(["--db", &db_path, "import", "--table", "rooms", "--file", &file])
        .assert()
        .failure()
        .stderr(contains("header row is required"));
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("cli_export");
    init_db_with_data(&db_path, "cli_export");

    let csv_out = temp_out("cli_export", "csv");
    rhk()
        .env("RHOUSEKEEPER_NOW", DAY1)
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &csv_out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&csv_out).expect("csv written");
    assert!(content.starts_with("kind,id,name,group,status"));
    assert!(content.contains("room,3,101,1st Floor,Dirty"));
    assert!(content.contains("area,3,Gym,Unassigned,Dirty"));

    let json_out = temp_out("cli_export", "json");
    rhk()
        .env("RHOUSEKEEPER_NOW", DAY1)
        .args(["--db", &db_path, "export", "--format", "json", "--file", &json_out])
        .assert()
        .success();

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(parsed["counts"]["totalAreas"], 2);
}

#[test]
fn test_export_refuses_relative_path() {
    let db_path = setup_test_db("cli_export_relative");
    init_db_with_data(&db_path, "cli_export_relative");

    rhk()
        .args(["--db", &db_path, "export", "--file", "board.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path, "cli_log");

    rhk()
        .env("RHOUSEKEEPER_NOW", DAY1)
        .args(["--db", &db_path, "room", "--id", "3", "--status", "clean"])
        .assert()
        .success();

    rhk()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("import"))
        .stdout(contains("reset").and(contains("update_room")));
}

#[test]
fn test_db_info_shows_reset_marker() {
    let db_path = setup_test_db("cli_db_info");
    init_db_with_data(&db_path, "cli_db_info");

    rhk()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("never"));

    rhk()
        .env("RHOUSEKEEPER_NOW", DAY1)
        .args(["--db", &db_path, "reset"])
        .assert()
        .success();

    rhk()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("2026-03-07"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_repair_on_clean_table() {
    let db_path = setup_test_db("cli_repair");
    init_db_with_data(&db_path, "cli_repair");

    rhk()
        .args(["--db", &db_path, "repair"])
        .assert()
        .success()
        .stdout(contains("No area rows needed repair"));
}

#[test]
fn test_repair_moves_spilled_area_columns() {
    let db_path = setup_test_db("cli_repair_shift");
    rhk()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let file = write_csv(
        "cli_repair_shift",
        "Area,Location,Status,Assigned To,Time In,Time Out\n\
         Spa,Level 2,Clean,,Dee,\"3/7/2026, 9:00:00 AM\",\"3/7/2026, 10:00:00 AM\"\n",
    );
    rhk()
        .args(["--db", &db_path, "import", "--table", "areas", "--file", &file])
        .assert()
        .success();

    rhk()
        .args(["--db", &db_path, "repair"])
        .assert()
        .success()
        .stdout(contains("Repaired 1 area rows"));
}

#[test]
fn test_backup_creates_copy() {
    let db_path = setup_test_db("cli_backup");
    init_db_with_data(&db_path, "cli_backup");

    let dest = temp_out("cli_backup", "sqlite");
    rhk()
        .args(["--db", &db_path, "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&dest).exists());
}
