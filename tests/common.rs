#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with its config dir moved into the temp dir so the
/// user's own configuration is never read.
pub fn rhk() -> Command {
    let mut cmd = cargo_bin_cmd!("rhousekeeper");
    let mut home: PathBuf = env::temp_dir();
    home.push("rhousekeeper_test_home");
    cmd.env("RHOUSEKEEPER_HOME", home);
    cmd.env_remove("RHOUSEKEEPER_NOW");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rhousekeeper.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a CSV seed file into the temp dir and return its path.
pub fn write_csv(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_seed.csv", name));
    fs::write(&path, content).expect("write seed csv");
    path.to_string_lossy().to_string()
}

pub const ROOMS_CSV: &str = "\
Room,Status,Assigned To,Time In,Time Out
1st Floor,,,,
101,Clean,Ana,,
102,,,,
2nd Floor,,,,
201,In Progress,Bo,,
";

pub const AREAS_CSV: &str = "\
Area,Location,Status,Assigned To,Time In,Time Out
Lobby,Ground,Clean,Cy,,
Gym,,,,,
";

pub const STAFF_CSV: &str = "\
Name,Role
Ana,Housekeeper
Bo,Supervisor
";

/// Initialize DB and import the three seed tables.
pub fn init_db_with_data(db_path: &str, name: &str) {
    rhk()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (table, content) in [("rooms", ROOMS_CSV), ("areas", AREAS_CSV), ("staff", STAFF_CSV)] {
        let file = write_csv(&format!("{name}_{table}"), content);
        rhk()
            .args(["--db", db_path, "import", "--table", table, "--file", &file])
            .assert()
            .success();
    }
}

/// Run `show --json` and parse the board.
pub fn snapshot_json(db_path: &str, now: Option<&str>) -> serde_json::Value {
    let mut cmd = rhk();
    if let Some(now) = now {
        cmd.env("RHOUSEKEEPER_NOW", now);
    }
    let out = cmd
        .args(["--db", db_path, "show", "--json"])
        .output()
        .expect("run show");
    assert!(out.status.success(), "show failed: {:?}", out);
    serde_json::from_slice(&out.stdout).expect("valid json")
}
