#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the user's configuration.
pub fn rsl(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rsheetlog");
    cmd.env("RSHEETLOG_CONFIG", temp_path(&format!("{name}_absent"), "conf"))
        .env_remove("RSHEETLOG_PASSWORD");
    cmd
}

/// Binary under test reading the given configuration file.
pub fn rsl_with_config(config: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rsheetlog");
    cmd.env("RSHEETLOG_CONFIG", config)
        .env_remove("RSHEETLOG_PASSWORD");
    cmd
}

fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rsheetlog.{}", name, ext));
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let db_path = temp_path(name, "sqlite");
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let p = temp_path(&format!("{name}_out"), ext);
    fs::remove_file(&p).ok();
    p
}

/// Write a configuration file for `db_path` and return its path.
pub fn write_config(name: &str, db_path: &str, extra_yaml: &str) -> String {
    let p = temp_path(name, "conf");
    let yaml = format!("database: '{db_path}'\n{extra_yaml}");
    fs::write(&p, yaml).expect("write config");
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(name: &str, db_path: &str) {
    rsl(name)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rsl(name)
        .args(["--db", db_path, "add", "--set", "A=alpha", "--set", "B=one"])
        .assert()
        .success();

    rsl(name)
        .args(["--db", db_path, "add", "--set", "A=beta", "--set", "B=2"])
        .assert()
        .success();
}
