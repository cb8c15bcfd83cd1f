use chrono::NaiveDate;
use log::info;

use crate::calendar;
use crate::catalog::Catalog;
use crate::error::PlanError;
use crate::models::DailyTargets;
use crate::plan::YearPlan;
use crate::plan::generator::allocate;

/// Re-plan the rest of the year from `date`, given `chapters_read` chapters
/// already finished before it. The remaining chapters still end on December 31.
pub fn catch_up_plan(
    date: NaiveDate,
    chapters_read: usize,
    catalog: &Catalog,
    targets: &DailyTargets,
) -> Result<YearPlan, PlanError> {
    let total = catalog.len();
    if chapters_read > total {
        return Err(PlanError::InvalidProgress {
            read: chapters_read,
            total,
        });
    }

    let remaining = total - chapters_read;
    if remaining == 0 {
        return Err(PlanError::PlanComplete { total });
    }

    let days = calendar::days_from(date)?;
    if remaining < days.len() {
        return Err(PlanError::AheadOfSchedule {
            remaining,
            days: days.len(),
        });
    }

    info!(
        "catch-up from {}: {} chapters over {} days",
        date,
        remaining,
        days.len()
    );
    allocate(&days, chapters_read, total, targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn starts_at_chapters_read() {
        let plan = catch_up_plan(
            date(2025, 1, 2),
            10,
            Catalog::canonical(),
            &DailyTargets::default(),
        )
        .unwrap();
        let first = plan.first().unwrap();
        assert_eq!(first.ordinal, 2);
        assert_eq!(first.range(), 10..13);
        assert_eq!(plan.last().unwrap().end_flat_index, 1189);
    }

    #[test]
    fn over_read_is_rejected() {
        let result = catch_up_plan(
            date(2025, 6, 1),
            2000,
            Catalog::canonical(),
            &DailyTargets::default(),
        );
        assert_eq!(
            result,
            Err(PlanError::InvalidProgress {
                read: 2000,
                total: 1189
            })
        );
    }

    #[test]
    fn finished_catalog_is_reported_as_complete() {
        let result = catch_up_plan(
            date(2025, 12, 31),
            1189,
            Catalog::canonical(),
            &DailyTargets::default(),
        );
        assert_eq!(result, Err(PlanError::PlanComplete { total: 1189 }));
    }

    #[test]
    fn too_far_ahead_is_rejected() {
        let result = catch_up_plan(
            date(2025, 12, 25),
            1185,
            Catalog::canonical(),
            &DailyTargets::default(),
        );
        assert_eq!(
            result,
            Err(PlanError::AheadOfSchedule {
                remaining: 4,
                days: 7
            })
        );
    }
}
