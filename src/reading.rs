//! The per-date reading report handed to callers (CLI, JSON consumers).

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::PlanError;
use crate::models::{ChapterUnit, DailyTargets};
use crate::plan::{self, DayReading, YearPlan};
use crate::utils::format::chapter_label;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingMeta {
    pub total_chapters: usize,
    /// 1-based, inclusive.
    pub chapter_index_start: usize,
    /// 1-based, inclusive.
    pub chapter_index_end: usize,
    pub remaining_chapters_after_today: usize,
    pub days_left_after_today: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingReport {
    pub date: NaiveDate,
    pub year: i32,
    pub version: String,
    pub chapters_count: usize,
    pub chapters: Vec<ChapterUnit>,
    pub label: String,
    pub meta: ReadingMeta,
}

impl ReadingReport {
    pub fn from_day(reading: &DayReading<'_>, year: i32, total: usize, version: &str) -> Self {
        Self {
            date: reading.date,
            year,
            version: version.to_string(),
            chapters_count: reading.chapters_count(),
            chapters: reading.chapters.to_vec(),
            label: chapter_label(reading.chapters),
            meta: ReadingMeta {
                total_chapters: total,
                chapter_index_start: reading.flat_index_start + 1,
                chapter_index_end: reading.flat_index_end,
                remaining_chapters_after_today: reading.remaining_after,
                days_left_after_today: reading.days_left_after,
            },
        }
    }

    /// Share of the catalog read once this day is done.
    pub fn progress_ratio(&self) -> f64 {
        if self.meta.total_chapters == 0 {
            0.0
        } else {
            self.meta.chapter_index_end as f64 / self.meta.total_chapters as f64
        }
    }
}

/// Report for `date` from an already generated plan.
pub fn report_from_plan(
    plan: &YearPlan,
    catalog: &Catalog,
    date: NaiveDate,
    version: &str,
) -> Result<ReadingReport, PlanError> {
    let reading = plan::lookup(plan, catalog, date)?;
    Ok(ReadingReport::from_day(
        &reading,
        plan.year,
        plan.total_units,
        version,
    ))
}

/// The reading assigned to `date` in `year`'s plan. The date must fall in `year`.
pub fn reading_for_date(
    year: i32,
    date: NaiveDate,
    catalog: &Catalog,
    targets: &DailyTargets,
    version: &str,
) -> Result<ReadingReport, PlanError> {
    if date.year() != year {
        return Err(PlanError::DateOutOfRange { date, year });
    }
    let plan = plan::generate_year(year, catalog.len(), targets)?;
    report_from_plan(&plan, catalog, date, version)
}

/// The reading for `date` when `chapters_read` chapters were finished before it.
pub fn catch_up_reading(
    date: NaiveDate,
    chapters_read: usize,
    catalog: &Catalog,
    targets: &DailyTargets,
    version: &str,
) -> Result<ReadingReport, PlanError> {
    let plan = plan::catch_up_plan(date, chapters_read, catalog, targets)?;
    report_from_plan(&plan, catalog, date, version)
}
