mod common;
use common::{at, engine, engine_with_rows};

use rattendance::core::{AttendanceEngine, CutoffPolicy};
use rattendance::errors::AppError;
use rattendance::models::summary::{Attendance, ParticipantTotal, Stats};
use rattendance::store::{LedgerRow, LedgerStore, MemoryLedger};

#[test]
fn test_log_before_cutoff_is_rejected_without_touching_the_store() {
    let mut store = MemoryLedger::new("early");
    let mut eng = AttendanceEngine::new(&mut store, CutoffPolicy::default());

    let err = eng.log("Alice", at(2024, 3, 4, 15, 59)).unwrap_err();
    match err {
        AppError::TooEarly { cutoff } => assert_eq!(cutoff, at(2024, 3, 4, 16, 0)),
        other => panic!("expected TooEarly, got {other:?}"),
    }
    assert_eq!(
        err_message(eng.log("Alice", at(2024, 3, 4, 9, 0))),
        "Attendance can only be logged after 4:00 PM"
    );

    drop(eng);
    assert!(store.rows().is_empty(), "no I/O before the cutoff check");
}

#[test]
fn test_log_durations_are_floored_minutes_since_cutoff() {
    let mut eng = engine();

    let exact = eng.log("Alice", at(2024, 3, 4, 16, 0)).unwrap();
    assert_eq!(exact.minutes, 0);
    assert_eq!(exact.duration_str(), "0h 0m");

    let late = eng
        .log(
            "Alice",
            at(2024, 3, 4, 17, 5)
                .checked_add_signed(chrono::TimeDelta::seconds(59))
                .unwrap(),
        )
        .unwrap();
    assert_eq!(late.minutes, 65);
    assert_eq!(late.date_str(), "2024-03-04");
}

#[test]
fn test_exempt_identities_always_get_240_minutes() {
    let mut eng = engine();

    for (name, when) in [
        ("TestUser 1", at(2024, 3, 4, 8, 0)),
        ("TestUser 2", at(2024, 3, 4, 23, 59)),
    ] {
        let ev = eng.log(name, when).unwrap();
        assert_eq!(ev.minutes, 240);
        assert_eq!(ev.duration_str(), "4h 0m");
    }
}

#[test]
fn test_empty_name_is_a_validation_error() {
    let mut eng = engine();
    assert!(matches!(
        eng.log("   ", at(2024, 3, 4, 18, 0)),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(eng.attendance(""), Err(AppError::Validation(_))));
    assert!(matches!(eng.exists(""), Err(AppError::Validation(_))));
}

#[test]
fn test_log_appends_one_row_per_call() {
    let mut store = MemoryLedger::new("append");
    {
        let mut eng = AttendanceEngine::new(&mut store, CutoffPolicy::default());
        eng.log("Alice", at(2024, 3, 4, 16, 30)).unwrap();
        eng.log("Alice", at(2024, 3, 4, 16, 30)).unwrap();
    }

    let rows = store.rows();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].is_header());
    assert_eq!(
        rows[1],
        LedgerRow::new("Alice", "2024-03-04T16:30:00", "0h 30m")
    );
    assert_eq!(rows[1], rows[2]);
}

#[test]
fn test_two_visits_sum_into_attendance() {
    let mut eng = engine();

    let first = eng.log("Alice", at(2024, 3, 4, 16, 30)).unwrap();
    let second = eng.log("Alice", at(2024, 3, 4, 18, 0)).unwrap();
    assert_eq!(first.duration_str(), "0h 30m");
    assert_eq!(second.duration_str(), "2h 0m");

    assert_eq!(eng.attendance("Alice").unwrap(), Attendance::Total(150));
    assert_eq!(eng.attendance("alice").unwrap(), Attendance::NoRecords);
}

#[test]
fn test_zero_minute_visits_read_as_no_records() {
    let mut eng = engine();
    eng.log("Zed", at(2024, 3, 4, 16, 0)).unwrap();

    assert_eq!(eng.attendance("Zed").unwrap(), Attendance::NoRecords);
    assert!(eng.exists("Zed").unwrap());
}

#[test]
fn test_stats_skip_malformed_rows() {
    let mut eng = engine_with_rows(&[
        ("Bob", "2024-03-04T17:00:00", "soon"),
        ("Bob", "2024-03-05T17:00:00", "1h 0m"),
    ]);

    assert_eq!(
        eng.stats().unwrap(),
        Stats::Totals(vec![ParticipantTotal {
            name: "Bob".into(),
            minutes: 60,
        }])
    );
}

#[test]
fn test_stats_keep_first_seen_order_and_accept_partial_forms() {
    let mut eng = engine_with_rows(&[
        ("Zoe", "2024-03-04T17:00:00", "2h"),
        ("Adam", "2024-03-04T17:00:00", "45m"),
        ("Zoe", "2024-03-05T17:00:00", "0h 15m"),
    ]);

    let Stats::Totals(totals) = eng.stats().unwrap() else {
        panic!("expected totals");
    };
    let names: Vec<_> = totals.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Zoe", "Adam"]);
    assert_eq!(totals[0].minutes, 135);
    assert_eq!(totals[1].minutes, 45);
}

#[test]
fn test_huge_hand_edited_durations_saturate_instead_of_overflowing() {
    let huge = "153722867280912930h";
    let mut eng = engine_with_rows(&[
        ("Bob", "2024-03-04T17:00:00", huge),
        ("Bob", "2024-03-05T17:00:00", huge),
    ]);

    assert_eq!(
        eng.stats().unwrap(),
        Stats::Totals(vec![ParticipantTotal {
            name: "Bob".into(),
            minutes: i64::MAX,
        }])
    );
    assert_eq!(eng.attendance("Bob").unwrap(), Attendance::Total(i64::MAX));

    let top = eng.top_stats().unwrap();
    assert_eq!(top.top_hours.value, i64::MAX);
    assert_eq!(top.top_consecutive.value, 2);
}

#[test]
fn test_stats_on_empty_ledger_is_no_data() {
    assert_eq!(engine().stats().unwrap(), Stats::NoData);
}

#[test]
fn test_top_stats_streak_and_leaders() {
    let mut eng = engine_with_rows(&[
        ("Alice", "2024-05-01T17:00:00", "1h 0m"),
        ("Bob", "2024-05-01T20:00:00", "4h 0m"),
        ("Alice", "2024-05-02T17:00:00", "1h 0m"),
        ("Alice", "2024-05-03T17:00:00", "1h 0m"),
        ("Alice", "2024-05-05T17:00:00", "1h 0m"),
        ("Bob", "2024-05-06T20:00:00", "4h 0m"),
    ]);

    let top = eng.top_stats().unwrap();
    assert_eq!(top.top_hours.name, "Bob");
    assert_eq!(top.top_hours.value, 480);
    assert_eq!(top.top_visits.name, "Alice");
    assert_eq!(top.top_visits.value, 4);
    assert_eq!(top.top_consecutive.name, "Alice");
    assert_eq!(top.top_consecutive.value, 3);
}

#[test]
fn test_top_stats_tolerates_dirty_rows() {
    let mut eng = engine_with_rows(&[
        ("Carl", "not a date", "3h 0m"),
        ("Dina", "2024-05-01T17:00:00", "??"),
        ("Dina", "2024-05-02T17:00:00", "1h 0m"),
    ]);

    let top = eng.top_stats().unwrap();
    assert_eq!(top.top_hours.name, "Carl");
    assert_eq!(top.top_hours.value, 180);
    assert_eq!(top.top_visits.name, "Dina");
    assert_eq!(top.top_consecutive.name, "Dina");
    assert_eq!(top.top_consecutive.value, 2);
}

#[test]
fn test_top_stats_on_empty_ledger_fails() {
    assert!(matches!(engine().top_stats(), Err(AppError::EmptyLedger)));
}

#[test]
fn test_clear_returns_to_empty_state() {
    let mut eng = engine();
    eng.log("Alice", at(2024, 3, 4, 17, 0)).unwrap();
    eng.clear().unwrap();

    assert_eq!(eng.attendance("Alice").unwrap(), Attendance::NoRecords);
    assert_eq!(eng.stats().unwrap(), Stats::NoData);
    assert!(!eng.exists("Alice").unwrap());
    assert!(matches!(eng.top_stats(), Err(AppError::EmptyLedger)));

    let rows = eng.rows().unwrap();
    assert_eq!(rows, vec![LedgerRow::header()]);

    let ops: Vec<_> = eng
        .audit_entries()
        .unwrap()
        .into_iter()
        .map(|e| e.operation)
        .collect();
    assert_eq!(ops, ["log", "clear"]);
}

#[test]
fn test_store_failures_surface_verbatim() {
    let mut eng = AttendanceEngine::new(
        MemoryLedger::unavailable("quota exceeded"),
        CutoffPolicy::default(),
    );

    assert_eq!(err_message(eng.stats()), "Store error: quota exceeded");
    assert_eq!(
        err_message(eng.log("Alice", at(2024, 3, 4, 17, 0))),
        "Store error: quota exceeded"
    );
    assert!(matches!(
        eng.log("Alice", at(2024, 3, 4, 10, 0)),
        Err(AppError::TooEarly { .. })
    ));
}

#[test]
fn test_link_is_the_store_identity() {
    let mut eng = engine();
    assert_eq!(eng.link().unwrap(), "memory://test");
    assert_eq!(eng.store().identity_url(), "memory://test");
}

fn err_message<T: std::fmt::Debug>(r: Result<T, AppError>) -> String {
    r.unwrap_err().to_string()
}
