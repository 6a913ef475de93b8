mod common;

use common::{d, dt, open_pool, seed_employee, setup_test_db, test_cfg};
use staffclock::core::accounting::{get_daily_summary, get_timesheet, recalculate};
use staffclock::core::calculator::minutes::calculate_minutes;
use staffclock::core::ledger::add_manual_entry;
use staffclock::db::queries;
use staffclock::models::clock_event::ClockEvent;
use staffclock::models::event_source::EventSource;
use staffclock::models::event_type::EventType;
use chrono::NaiveTime;

fn ev(emp: i64, date: &str, time: &str, kind: EventType) -> ClockEvent {
    ClockEvent::new(
        emp,
        d(date),
        NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
        kind,
        EventSource::Web,
        None,
        None,
    )
}

#[test]
fn test_split_day_without_breaks() {
    // 09:00→12:00 plus 13:00→17:00 with no break events
    let events = vec![
        ev(1, "2026-03-02", "09:00", EventType::ClockIn),
        ev(1, "2026-03-02", "12:00", EventType::ClockOut),
        ev(1, "2026-03-02", "13:00", EventType::ClockIn),
        ev(1, "2026-03-02", "17:00", EventType::ClockOut),
    ];

    let totals = calculate_minutes(&events, None);
    assert_eq!(totals.work_minutes, 420);
    assert_eq!(totals.break_minutes, 0);
}

#[test]
fn test_break_pairing() {
    let events = vec![
        ev(1, "2026-03-02", "09:00", EventType::ClockIn),
        ev(1, "2026-03-02", "12:00", EventType::BreakStart),
        ev(1, "2026-03-02", "12:45", EventType::BreakEnd),
        ev(1, "2026-03-02", "17:00", EventType::ClockOut),
    ];

    let totals = calculate_minutes(&events, None);
    assert_eq!(totals.work_minutes, 480);
    assert_eq!(totals.break_minutes, 45);
}

#[test]
fn test_open_interval_contributes_zero_when_unclosed() {
    let events = vec![ev(1, "2026-03-02", "09:00", EventType::ClockIn)];

    let totals = calculate_minutes(&events, None);
    assert_eq!(totals.work_minutes, 0);
    assert_eq!(totals.open_work_since, Some(dt("2026-03-02", "09:00")));
}

#[test]
fn test_open_interval_contributes_up_to_open_end() {
    let events = vec![ev(1, "2026-03-02", "09:00", EventType::ClockIn)];

    let totals = calculate_minutes(&events, Some(dt("2026-03-02", "10:15")));
    assert_eq!(totals.work_minutes, 75);
}

#[test]
fn test_double_clock_in_discards_earlier_interval() {
    // inherited leniency: the 08:00 open interval is silently dropped
    let events = vec![
        ev(1, "2026-03-02", "08:00", EventType::ClockIn),
        ev(1, "2026-03-02", "10:00", EventType::ClockIn),
        ev(1, "2026-03-02", "12:00", EventType::ClockOut),
    ];

    let totals = calculate_minutes(&events, None);
    assert_eq!(totals.work_minutes, 120);
}

#[test]
fn test_unsorted_input_is_sorted_internally() {
    let events = vec![
        ev(1, "2026-03-02", "17:00", EventType::ClockOut),
        ev(1, "2026-03-02", "09:00", EventType::ClockIn),
    ];

    let totals = calculate_minutes(&events, None);
    assert_eq!(totals.work_minutes, 480);
}

#[test]
fn test_recalculate_is_idempotent() {
    let db = setup_test_db("acct_idempotent");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");

    let mgr = seed_employee(&pool, "Boss");
    add_manual_entry(
        &mut pool, &cfg, mgr, emp,
        d("2026-03-02"),
        NaiveTime::parse_from_str("09:00", "%H:%M").unwrap(),
        EventType::ClockIn,
        None,
    )
    .unwrap();
    add_manual_entry(
        &mut pool, &cfg, mgr, emp,
        d("2026-03-02"),
        NaiveTime::parse_from_str("18:00", "%H:%M").unwrap(),
        EventType::ClockOut,
        None,
    )
    .unwrap();

    let first = recalculate(&pool.conn, &cfg, emp, d("2026-03-02")).unwrap();
    let second = recalculate(&pool.conn, &cfg, emp, d("2026-03-02")).unwrap();

    assert_eq!(first.work_minutes, 540);
    assert_eq!(second.work_minutes, 540);
    assert_eq!(first.overtime_minutes, 60); // default target 480

    // still exactly one row
    let rows = queries::load_summaries_between(
        &pool.conn, emp, &d("2026-03-01"), &d("2026-03-31"),
    )
    .unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_get_daily_summary_computes_if_absent() {
    let db = setup_test_db("acct_lazy_summary");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");

    // no events at all: an empty but persisted summary
    let s = get_daily_summary(&mut pool, &cfg, emp, d("2026-03-02")).unwrap();
    assert_eq!(s.work_minutes, 0);
    assert!(s.is_compliant);
    assert!(
        queries::get_summary(&pool.conn, emp, &d("2026-03-02"))
            .unwrap()
            .is_some()
    );
}

#[test]
fn test_custom_daily_target_changes_overtime() {
    let db = setup_test_db("acct_custom_target");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");

    let mut e = queries::get_employee(&pool.conn, emp).unwrap();
    e.daily_target_minutes = Some(360);
    queries::update_employee(&pool.conn, &e).unwrap();

    let mgr = seed_employee(&pool, "Boss");
    add_manual_entry(
        &mut pool, &cfg, mgr, emp,
        d("2026-03-02"),
        NaiveTime::parse_from_str("09:00", "%H:%M").unwrap(),
        EventType::ClockIn,
        None,
    )
    .unwrap();
    add_manual_entry(
        &mut pool, &cfg, mgr, emp,
        d("2026-03-02"),
        NaiveTime::parse_from_str("16:00", "%H:%M").unwrap(),
        EventType::ClockOut,
        None,
    )
    .unwrap();

    let s = queries::get_summary(&pool.conn, emp, &d("2026-03-02"))
        .unwrap()
        .unwrap();
    assert_eq!(s.work_minutes, 420);
    assert_eq!(s.overtime_minutes, 60);
}

#[test]
fn test_timesheet_totals() {
    let db = setup_test_db("acct_timesheet");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");
    let mgr = seed_employee(&pool, "Boss");

    for (day, start, end) in [("2026-03-02", "09:00", "17:30"), ("2026-03-03", "09:00", "17:00")] {
        add_manual_entry(
            &mut pool, &cfg, mgr, emp,
            d(day),
            NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            EventType::ClockIn,
            None,
        )
        .unwrap();
        add_manual_entry(
            &mut pool, &cfg, mgr, emp,
            d(day),
            NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
            EventType::ClockOut,
            None,
        )
        .unwrap();
    }

    let sheet = get_timesheet(&mut pool, &cfg, emp, d("2026-03-01"), d("2026-03-07")).unwrap();
    assert_eq!(sheet.summaries.len(), 2);
    assert_eq!(sheet.entries.len(), 4);
    assert_eq!(sheet.totals.work_minutes, 510 + 480);
    assert_eq!(sheet.totals.overtime_minutes, 30);
    // both days worked >6h with no break
    assert_eq!(sheet.totals.non_compliant_days, 2);
}

#[test]
fn test_timesheet_rejects_inverted_range() {
    let db = setup_test_db("acct_bad_range");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");

    let err = get_timesheet(&mut pool, &cfg, emp, d("2026-03-07"), d("2026-03-01")).unwrap_err();
    assert!(matches!(err, staffclock::errors::AppError::Validation(_)));
}

#[test]
fn test_manual_edit_triggers_recompute_of_both_days() {
    let db = setup_test_db("acct_edit_recompute");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");
    let mgr = seed_employee(&pool, "Boss");

    let t = |s| NaiveTime::parse_from_str(s, "%H:%M").unwrap();
    let e_in =
        add_manual_entry(&mut pool, &cfg, mgr, emp, d("2026-03-02"), t("09:00"), EventType::ClockIn, None)
            .unwrap();
    add_manual_entry(&mut pool, &cfg, mgr, emp, d("2026-03-02"), t("17:00"), EventType::ClockOut, None)
        .unwrap();

    assert_eq!(
        queries::get_summary(&pool.conn, emp, &d("2026-03-02")).unwrap().unwrap().work_minutes,
        480
    );

    // move the clock-in to the next day: old day loses its pair
    staffclock::core::ledger::edit_entry(
        &mut pool, &cfg, mgr, e_in.id,
        Some(d("2026-03-03")), None, None, None,
    )
    .unwrap();

    assert_eq!(
        queries::get_summary(&pool.conn, emp, &d("2026-03-02")).unwrap().unwrap().work_minutes,
        0
    );
    let moved = queries::get_event(&pool.conn, e_in.id).unwrap();
    assert!(moved.is_modified);
    assert_eq!(moved.modified_by, Some(mgr));
}

#[test]
fn test_manual_delete_recomputes() {
    let db = setup_test_db("acct_del_recompute");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");
    let mgr = seed_employee(&pool, "Boss");

    let t = |s| NaiveTime::parse_from_str(s, "%H:%M").unwrap();
    add_manual_entry(&mut pool, &cfg, mgr, emp, d("2026-03-02"), t("09:00"), EventType::ClockIn, None)
        .unwrap();
    let e_out =
        add_manual_entry(&mut pool, &cfg, mgr, emp, d("2026-03-02"), t("17:00"), EventType::ClockOut, None)
            .unwrap();

    staffclock::core::ledger::delete_entry(&mut pool, &cfg, mgr, e_out.id).unwrap();

    // the day is open again: booked time drops to zero
    assert_eq!(
        queries::get_summary(&pool.conn, emp, &d("2026-03-02")).unwrap().unwrap().work_minutes,
        0
    );

    let err = staffclock::core::ledger::delete_entry(&mut pool, &cfg, mgr, e_out.id).unwrap_err();
    assert!(matches!(err, staffclock::errors::AppError::NotFound(_)));
}
