mod common;

use common::{d, dt, open_pool, seed_employee, setup_test_db, test_cfg};
use staffclock::core::ledger::{current_state, current_status, record_event};
use staffclock::errors::AppError;
use staffclock::models::clock_state::ClockState;
use staffclock::models::event_source::EventSource;
use staffclock::models::event_type::EventType;

fn clock(
    pool: &mut staffclock::db::pool::DbPool,
    cfg: &staffclock::config::Config,
    emp: i64,
    kind: EventType,
    time: &str,
) -> Result<staffclock::models::clock_event::ClockEvent, AppError> {
    record_event(
        pool,
        cfg,
        emp,
        kind,
        EventSource::Web,
        None,
        None,
        dt("2026-03-02", time),
    )
}

#[test]
fn test_full_day_cycle() {
    let db = setup_test_db("ledger_cycle");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");

    clock(&mut pool, &cfg, emp, EventType::ClockIn, "09:00").unwrap();
    assert_eq!(current_state(&pool.conn, emp).unwrap(), ClockState::ClockedIn);

    clock(&mut pool, &cfg, emp, EventType::BreakStart, "12:00").unwrap();
    assert_eq!(current_state(&pool.conn, emp).unwrap(), ClockState::OnBreak);

    clock(&mut pool, &cfg, emp, EventType::BreakEnd, "12:30").unwrap();
    assert_eq!(current_state(&pool.conn, emp).unwrap(), ClockState::ClockedIn);

    clock(&mut pool, &cfg, emp, EventType::ClockOut, "17:00").unwrap();
    assert_eq!(current_state(&pool.conn, emp).unwrap(), ClockState::ClockedOut);
}

#[test]
fn test_double_clock_in_is_conflict() {
    let db = setup_test_db("ledger_double_in");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");

    clock(&mut pool, &cfg, emp, EventType::ClockIn, "09:00").unwrap();
    let err = clock(&mut pool, &cfg, emp, EventType::ClockIn, "09:05").unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {err:?}");

    // the failed call must not have appended anything
    assert_eq!(current_state(&pool.conn, emp).unwrap(), ClockState::ClockedIn);
}

#[test]
fn test_wrong_state_transitions_fail() {
    let db = setup_test_db("ledger_wrong_state");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");

    // everything except clock-in fails from CLOCKED_OUT
    for kind in [EventType::ClockOut, EventType::BreakStart, EventType::BreakEnd] {
        let err = clock(&mut pool, &cfg, emp, kind, "09:00").unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)), "{kind:?} gave {err:?}");
    }

    clock(&mut pool, &cfg, emp, EventType::ClockIn, "09:00").unwrap();
    clock(&mut pool, &cfg, emp, EventType::BreakStart, "10:00").unwrap();

    // no clock-out while on break
    let err = clock(&mut pool, &cfg, emp, EventType::ClockOut, "10:10").unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[test]
fn test_unknown_employee_is_not_found() {
    let db = setup_test_db("ledger_unknown_emp");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);

    let err = clock(&mut pool, &cfg, 99, EventType::ClockIn, "09:00").unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn test_state_is_independent_per_employee() {
    let db = setup_test_db("ledger_two_emps");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let ada = seed_employee(&pool, "Ada");
    let bob = seed_employee(&pool, "Bob");

    clock(&mut pool, &cfg, ada, EventType::ClockIn, "09:00").unwrap();

    assert_eq!(current_state(&pool.conn, ada).unwrap(), ClockState::ClockedIn);
    assert_eq!(current_state(&pool.conn, bob).unwrap(), ClockState::ClockedOut);
}

#[test]
fn test_status_snapshot_open_interval() {
    let db = setup_test_db("ledger_status");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");

    clock(&mut pool, &cfg, emp, EventType::ClockIn, "09:00").unwrap();

    let snap = current_status(&mut pool, emp, dt("2026-03-02", "10:30")).unwrap();
    assert_eq!(snap.state, ClockState::ClockedIn);
    assert_eq!(snap.clocked_in_since, Some(dt("2026-03-02", "09:00")));
    assert_eq!(snap.elapsed_work_minutes, 90);
    assert_eq!(snap.today_work_minutes, 90);
    assert_eq!(snap.today_break_minutes, 0);
}

#[test]
fn test_status_snapshot_on_break() {
    let db = setup_test_db("ledger_status_break");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");

    clock(&mut pool, &cfg, emp, EventType::ClockIn, "09:00").unwrap();
    clock(&mut pool, &cfg, emp, EventType::BreakStart, "12:00").unwrap();

    let snap = current_status(&mut pool, emp, dt("2026-03-02", "12:20")).unwrap();
    assert_eq!(snap.state, ClockState::OnBreak);
    assert_eq!(snap.break_started_at, Some(dt("2026-03-02", "12:00")));
    assert_eq!(snap.elapsed_break_minutes, 20);
    // the work interval is still open and runs through the break
    assert_eq!(snap.today_work_minutes, 200);
    assert_eq!(snap.today_break_minutes, 20);
}

#[test]
fn test_status_when_clocked_out_counts_nothing_open() {
    let db = setup_test_db("ledger_status_out");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");

    clock(&mut pool, &cfg, emp, EventType::ClockIn, "09:00").unwrap();
    clock(&mut pool, &cfg, emp, EventType::ClockOut, "11:00").unwrap();

    let snap = current_status(&mut pool, emp, dt("2026-03-02", "15:00")).unwrap();
    assert_eq!(snap.state, ClockState::ClockedOut);
    assert_eq!(snap.clocked_in_since, None);
    assert_eq!(snap.elapsed_work_minutes, 0);
    assert_eq!(snap.today_work_minutes, 120);
}

#[test]
fn test_clock_out_books_the_day() {
    let db = setup_test_db("ledger_books_day");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");

    clock(&mut pool, &cfg, emp, EventType::ClockIn, "09:00").unwrap();
    clock(&mut pool, &cfg, emp, EventType::ClockOut, "17:00").unwrap();

    let s = staffclock::db::queries::get_summary(&pool.conn, emp, &d("2026-03-02"))
        .unwrap()
        .expect("summary persisted on clock-out");
    assert_eq!(s.work_minutes, 480);
}
