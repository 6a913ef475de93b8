#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use staffclock::config::Config;
use staffclock::db::initialize::init_db;
use staffclock::db::pool::DbPool;
use staffclock::db::queries;
use staffclock::models::employee::Employee;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sc() -> Command {
    cargo_bin_cmd!("staffclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_staffclock.sqlite", name));
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

/// Config pointing at the test DB, everything else default
pub fn test_cfg(db_path: &str) -> Config {
    Config {
        database: db_path.to_string(),
        ..Config::default()
    }
}

/// Open (and initialize) a pool on the test DB via the library API
pub fn open_pool(db_path: &str) -> DbPool {
    let pool = DbPool::new(db_path).expect("open db");
    init_db(&pool.conn).expect("init db");
    pool
}

/// Insert a directory row with all defaults and return the new id
pub fn seed_employee(pool: &DbPool, name: &str) -> i64 {
    queries::insert_employee(
        &pool.conn,
        &Employee {
            id: 0,
            name: name.to_string(),
            daily_target_minutes: None,
            work_days: None,
            annual_leave_days: None,
            max_carry_over: None,
            manager_id: None,
        },
    )
    .expect("insert employee")
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}

pub fn dt(date: &str, time: &str) -> NaiveDateTime {
    d(date).and_time(
        chrono::NaiveTime::parse_from_str(time, "%H:%M").expect("time"),
    )
}
