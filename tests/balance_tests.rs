mod common;

use common::{open_pool, seed_employee, setup_test_db, test_cfg};
use staffclock::core::leave::{get_balance, set_balance, trigger_carry_over};
use staffclock::errors::AppError;
use staffclock::models::leave_balance::LeaveBalance;

#[test]
fn test_remaining_days_formula() {
    let b = LeaveBalance {
        id: 0,
        employee_id: 1,
        year: 2026,
        total_days: 30.0,
        used_days: 5.0,
        carried_over_days: 2.0,
    };
    assert_eq!(b.remaining_days(), 27.0);

    let overdrawn = LeaveBalance {
        used_days: 40.0,
        ..b
    };
    assert_eq!(overdrawn.remaining_days(), 0.0);
    assert_eq!(overdrawn.signed_remaining(), -8.0);
}

#[test]
fn test_lazy_creation_uses_entitlement() {
    let db = setup_test_db("bal_lazy");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");

    let b = get_balance(&mut pool, &cfg, emp, 2026).unwrap();
    assert_eq!(b.total_days, 30.0); // config default
    assert_eq!(b.used_days, 0.0);
    assert_eq!(b.carried_over_days, 0.0); // no previous year
}

#[test]
fn test_carry_over_is_capped() {
    let db = setup_test_db("bal_capped");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");

    // previous year: 30 total, 18 used → 12 remaining, cap is 10
    get_balance(&mut pool, &cfg, emp, 2025).unwrap();
    set_balance(&mut pool, &cfg, emp, 2025, None, Some(18.0), None).unwrap();

    let b = get_balance(&mut pool, &cfg, emp, 2026).unwrap();
    assert_eq!(b.carried_over_days, 10.0);
}

#[test]
fn test_carry_over_below_cap_passes_through() {
    let db = setup_test_db("bal_below_cap");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");

    get_balance(&mut pool, &cfg, emp, 2025).unwrap();
    set_balance(&mut pool, &cfg, emp, 2025, None, Some(26.5), None).unwrap();

    let b = get_balance(&mut pool, &cfg, emp, 2026).unwrap();
    assert_eq!(b.carried_over_days, 3.5);
}

#[test]
fn test_negative_previous_remaining_carries_nothing() {
    let db = setup_test_db("bal_negative");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");

    // 30 total, 32 used → remaining −2
    get_balance(&mut pool, &cfg, emp, 2025).unwrap();
    set_balance(&mut pool, &cfg, emp, 2025, None, Some(32.0), None).unwrap();

    let b = get_balance(&mut pool, &cfg, emp, 2026).unwrap();
    assert_eq!(b.carried_over_days, 0.0);
}

#[test]
fn test_lazy_path_never_overwrites_existing_row() {
    let db = setup_test_db("bal_no_overwrite");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");

    get_balance(&mut pool, &cfg, emp, 2026).unwrap();

    // previous year changes afterwards
    get_balance(&mut pool, &cfg, emp, 2025).unwrap();
    set_balance(&mut pool, &cfg, emp, 2025, None, Some(18.0), None).unwrap();

    // lazy read does not pick up the new carry-over
    let b = get_balance(&mut pool, &cfg, emp, 2026).unwrap();
    assert_eq!(b.carried_over_days, 0.0);

    // the explicit trigger does, and touches only carried_over_days
    set_balance(&mut pool, &cfg, emp, 2026, None, Some(4.0), None).unwrap();
    let b = trigger_carry_over(&mut pool, &cfg, emp, 2026).unwrap();
    assert_eq!(b.carried_over_days, 10.0);
    assert_eq!(b.used_days, 4.0);
    assert_eq!(b.total_days, 30.0);
}

#[test]
fn test_set_balance_partial_update() {
    let db = setup_test_db("bal_set_partial");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");

    let b = set_balance(&mut pool, &cfg, emp, 2026, Some(25.0), None, Some(1.5)).unwrap();
    assert_eq!(b.total_days, 25.0);
    assert_eq!(b.used_days, 0.0);
    assert_eq!(b.carried_over_days, 1.5);
    assert_eq!(b.remaining_days(), 26.5);
}

#[test]
fn test_set_balance_rejects_negative_values() {
    let db = setup_test_db("bal_set_negative");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");

    let err = set_balance(&mut pool, &cfg, emp, 2026, Some(-1.0), None, None).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn test_employee_specific_entitlement_and_cap() {
    let db = setup_test_db("bal_custom_emp");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);
    let emp = seed_employee(&pool, "Ada");

    let mut e = staffclock::db::queries::get_employee(&pool.conn, emp).unwrap();
    e.annual_leave_days = Some(24.0);
    e.max_carry_over = Some(5.0);
    staffclock::db::queries::update_employee(&pool.conn, &e).unwrap();

    get_balance(&mut pool, &cfg, emp, 2025).unwrap();
    set_balance(&mut pool, &cfg, emp, 2025, None, Some(10.0), None).unwrap();

    let b = get_balance(&mut pool, &cfg, emp, 2026).unwrap();
    assert_eq!(b.total_days, 24.0);
    // 14 remaining, capped at the employee's own 5
    assert_eq!(b.carried_over_days, 5.0);
}

#[test]
fn test_unknown_employee_is_not_found() {
    let db = setup_test_db("bal_unknown");
    let cfg = test_cfg(&db);
    let mut pool = open_pool(&db);

    let err = get_balance(&mut pool, &cfg, 42, 2026).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
