use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::error::PlanError;
use crate::models::ChapterUnit;
use crate::plan::YearPlan;

/// One day's slice of a plan, resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayReading<'a> {
    pub ordinal: u32,
    pub date: NaiveDate,
    pub chapters: &'a [ChapterUnit],
    /// First flat index read today (0-based).
    pub flat_index_start: usize,
    /// One past the last flat index read today.
    pub flat_index_end: usize,
    pub remaining_after: usize,
    pub days_left_after: u32,
}

impl DayReading<'_> {
    pub fn chapters_count(&self) -> usize {
        self.flat_index_end - self.flat_index_start
    }
}

pub fn lookup<'a>(
    plan: &YearPlan,
    catalog: &'a Catalog,
    date: NaiveDate,
) -> Result<DayReading<'a>, PlanError> {
    let allocation = plan
        .allocation_for(date)
        .ok_or(PlanError::DateOutOfRange {
            date,
            year: plan.year,
        })?;

    Ok(DayReading {
        ordinal: allocation.ordinal,
        date: allocation.date,
        chapters: catalog.slice(allocation.range()),
        flat_index_start: allocation.start_flat_index,
        flat_index_end: allocation.end_flat_index,
        remaining_after: plan.total_units - allocation.end_flat_index,
        days_left_after: plan.days_in_year - allocation.ordinal,
    })
}
