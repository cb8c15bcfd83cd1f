//! Re-planning from partial progress.

use bible_year::{
    Catalog, DailyTargets, ErrorKind, PlanError, TOTAL_CHAPTERS, catch_up_plan, catch_up_reading,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn on_schedule_matches_yearly_plan() {
    // Jan 1-3 2025 are weekdays: 9 chapters read before Saturday the 4th.
    let r = catch_up_reading(
        date(2025, 1, 4),
        9,
        Catalog::canonical(),
        &DailyTargets::default(),
        "NIV",
    )
    .unwrap();
    assert_eq!(r.label, "Genesis 10–13");
    assert_eq!(r.meta.days_left_after_today, 361);
}

#[test]
fn far_behind_still_finishes_on_december_31() {
    let plan = catch_up_plan(
        date(2025, 12, 1),
        0,
        Catalog::canonical(),
        &DailyTargets::default(),
    )
    .unwrap();
    assert_eq!(plan.allocations.len(), 31);
    assert_eq!(plan.first().unwrap().start_flat_index, 0);
    assert_eq!(plan.last().unwrap().end_flat_index, TOTAL_CHAPTERS);
    assert!(plan.allocations.iter().all(|a| a.len() >= 1));
}

#[test]
fn last_day_takes_whatever_is_left() {
    let r = catch_up_reading(
        date(2025, 12, 31),
        1180,
        Catalog::canonical(),
        &DailyTargets::default(),
        "NIV",
    )
    .unwrap();
    assert_eq!(r.chapters_count, 9);
    assert_eq!(r.meta.remaining_chapters_after_today, 0);
}

#[test]
fn finished_reader_gets_plan_complete() {
    let err = catch_up_plan(
        date(2025, 6, 1),
        TOTAL_CHAPTERS,
        Catalog::canonical(),
        &DailyTargets::default(),
    )
    .unwrap_err();
    assert_eq!(err, PlanError::PlanComplete { total: TOTAL_CHAPTERS });
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn few_chapters_left_is_ahead_of_schedule() {
    let err = catch_up_plan(
        date(2025, 12, 25),
        TOTAL_CHAPTERS - 2,
        Catalog::canonical(),
        &DailyTargets::default(),
    )
    .unwrap_err();
    assert_eq!(err, PlanError::AheadOfSchedule { remaining: 2, days: 7 });
}
