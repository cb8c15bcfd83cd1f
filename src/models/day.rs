use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    /// 1-based day of the year.
    pub ordinal: u32,
    pub date: NaiveDate,
    pub is_weekend: bool,
}

/// The chapters given to one day, as a half-open range of flat indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayAllocation {
    pub ordinal: u32,
    pub date: NaiveDate,
    pub start_flat_index: usize,
    pub end_flat_index: usize,
}

impl DayAllocation {
    pub fn len(&self) -> usize {
        self.end_flat_index - self.start_flat_index
    }

    pub fn is_empty(&self) -> bool {
        self.end_flat_index == self.start_flat_index
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start_flat_index..self.end_flat_index
    }
}

/// Base number of chapters a day aims for, by weekday/weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DailyTargets {
    pub weekday: u32,
    pub weekend: u32,
}

impl Default for DailyTargets {
    fn default() -> Self {
        Self {
            weekday: 3,
            weekend: 4,
        }
    }
}

impl DailyTargets {
    pub fn new(weekday: u32, weekend: u32) -> Result<Self, PlanError> {
        if weekday == 0 || weekend == 0 {
            return Err(PlanError::InvalidTarget { weekday, weekend });
        }
        Ok(Self { weekday, weekend })
    }

    pub fn for_day(&self, day: &CalendarDay) -> u32 {
        if day.is_weekend {
            self.weekend
        } else {
            self.weekday
        }
    }
}
