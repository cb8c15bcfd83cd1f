//! Year-long daily Bible reading planner.
//!
//! Splits the 1,189 chapters of the canon over the days of a year: three on
//! weekdays, four on weekends, at least one every day, finishing exactly on
//! December 31.

pub mod calendar;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod plan;
pub mod reading;
pub mod utils;

pub use catalog::{Catalog, TOTAL_CHAPTERS};
pub use error::{ErrorKind, PlanError};
pub use models::{CalendarDay, ChapterUnit, DailyTargets, DayAllocation};
pub use plan::{DayReading, PlanCache, YearPlan, catch_up_plan, generate_plan, lookup};
pub use reading::{ReadingReport, catch_up_reading, reading_for_date};
