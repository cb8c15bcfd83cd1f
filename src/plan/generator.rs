use chrono::{Datelike, NaiveDate};
use log::{debug, error, warn};

use crate::calendar;
use crate::error::PlanError;
use crate::models::{CalendarDay, DailyTargets, DayAllocation};

/// A full partition of a chapter range over a run of days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearPlan {
    pub year: i32,
    pub days_in_year: u32,
    /// Size of the catalog the plan finishes.
    pub total_units: usize,
    pub allocations: Vec<DayAllocation>,
}

impl YearPlan {
    pub fn first(&self) -> Option<&DayAllocation> {
        self.allocations.first()
    }

    pub fn last(&self) -> Option<&DayAllocation> {
        self.allocations.last()
    }

    /// Allocation for `date`, if the plan covers it.
    pub fn allocation_for(&self, date: NaiveDate) -> Option<&DayAllocation> {
        if date.year() != self.year {
            return None;
        }
        let first = self.first()?;
        let offset = date.ordinal().checked_sub(first.ordinal)?;
        self.allocations.get(offset as usize)
    }

    /// Allocations from `from` through `to`, inclusive, clipped to the plan.
    pub fn range(&self, from: NaiveDate, to: NaiveDate) -> impl Iterator<Item = &DayAllocation> {
        self.allocations
            .iter()
            .filter(move |a| a.date >= from && a.date <= to)
    }
}

/// Right-to-left running sum of base targets; `suffix[i]` covers days `i..`.
fn suffix_capacity(days: &[CalendarDay], targets: &DailyTargets) -> Vec<usize> {
    let mut suffix = vec![0usize; days.len() + 1];
    for i in (0..days.len()).rev() {
        suffix[i] = suffix[i + 1] + targets.for_day(&days[i]) as usize;
    }
    suffix
}

/// Spread `total_units` chapters over `days` so that every day gets at least one,
/// days aim for their base target, and the last day ends exactly on `total_units`.
pub fn generate_plan(
    days: &[CalendarDay],
    total_units: usize,
    targets: &DailyTargets,
) -> Result<YearPlan, PlanError> {
    allocate(days, 0, total_units, targets)
}

/// Plan for every day of `year`.
pub fn generate_year(
    year: i32,
    total_units: usize,
    targets: &DailyTargets,
) -> Result<YearPlan, PlanError> {
    let days = calendar::days_in_year(year)?;
    generate_plan(&days, total_units, targets)
}

/// Allocate flat indices `first_index..total_units` over `days`.
pub(crate) fn allocate(
    days: &[CalendarDay],
    first_index: usize,
    total_units: usize,
    targets: &DailyTargets,
) -> Result<YearPlan, PlanError> {
    let first_day = days.first().ok_or(PlanError::EmptyCalendar)?;
    DailyTargets::new(targets.weekday, targets.weekend)?;

    let units = total_units.saturating_sub(first_index);
    if units < days.len() {
        return Err(PlanError::InsufficientUnits {
            units,
            days: days.len(),
        });
    }

    let year = first_day.date.year();
    let n = days.len();
    let suffix = suffix_capacity(days, targets);

    let mut consumed = first_index;
    let mut allocations = Vec::with_capacity(n);

    for (d, day) in days.iter().enumerate() {
        let remaining = total_units - consumed;
        let after = n - d - 1;
        let base = targets.for_day(day) as usize;

        let mut min_today = remaining.saturating_sub(suffix[d + 1]).max(1);
        let mut max_today = remaining.saturating_sub(after);

        if min_today > max_today {
            warn!(
                "allocation band inverted on {} (min {}, max {}, remaining {})",
                day.date, min_today, max_today, remaining
            );
            let pinned = if after == 0 {
                remaining
            } else {
                min_today.min(max_today).max(1)
            };
            min_today = pinned;
            max_today = pinned;
        }

        if max_today == 0 || max_today > remaining {
            let message = format!(
                "no chapters left for {} (remaining {}, days after {})",
                day.date, remaining, after
            );
            error!("{}", message);
            return Err(PlanError::Invariant { message });
        }

        let today = base.clamp(min_today, max_today);
        allocations.push(DayAllocation {
            ordinal: day.ordinal,
            date: day.date,
            start_flat_index: consumed,
            end_flat_index: consumed + today,
        });
        consumed += today;
    }

    if consumed != total_units {
        let message = format!("plan ended at {} of {} chapters", consumed, total_units);
        error!("{}", message);
        return Err(PlanError::Invariant { message });
    }

    debug!(
        "planned {} chapters over {} days from {} (weekday {}, weekend {})",
        units, n, first_day.date, targets.weekday, targets.weekend
    );

    Ok(YearPlan {
        year,
        days_in_year: calendar::year_length(year),
        total_units,
        allocations,
    })
}
