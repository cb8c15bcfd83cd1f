//! Error types for plan generation and lookup.

use chrono::NaiveDate;

/// Broad category of a [`PlanError`], used by callers to decide how to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A static setup problem (catalog too small, bad targets). Fatal.
    Configuration,
    /// A rejected request (date outside the year, unparseable input).
    Validation,
    /// The generator broke one of its own invariants.
    Internal,
}

/// Error type for all fallible operations in the planner.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Returned when the day sequence is empty.
    #[error("cannot plan over an empty calendar")]
    EmptyCalendar,

    /// Returned when there are fewer units than days to fill.
    #[error("{units} chapters cannot cover {days} days at one chapter per day")]
    InsufficientUnits {
        /// Units available to allocate.
        units: usize,
        /// Days in the sequence.
        days: usize,
    },

    /// Returned when a per-day base target is zero.
    #[error("daily targets must be >= 1, got weekday={weekday} weekend={weekend}")]
    InvalidTarget {
        /// Configured weekday target.
        weekday: u32,
        /// Configured weekend target.
        weekend: u32,
    },

    /// Returned when the year cannot be represented as a calendar year.
    #[error("year {year} is out of the supported calendar range")]
    InvalidYear {
        /// The rejected year.
        year: i32,
    },

    /// Returned when a date is not covered by the requested plan.
    #[error("date {date} must be within the selected year {year}")]
    DateOutOfRange {
        /// The requested date.
        date: NaiveDate,
        /// The plan's year.
        year: i32,
    },

    /// Returned when a date string does not parse as `YYYY-MM-DD`.
    #[error("invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate {
        /// The raw input.
        input: String,
    },

    /// Returned when more chapters are reported read than the catalog holds.
    #[error("{read} chapters read exceeds the {total} chapters in the catalog")]
    InvalidProgress {
        /// Chapters reported read.
        read: usize,
        /// Catalog size.
        total: usize,
    },

    /// Returned when the chapters left cannot give every remaining day one chapter.
    #[error("only {remaining} chapters left for {days} remaining days")]
    AheadOfSchedule {
        /// Chapters still unread.
        remaining: usize,
        /// Days left in the year, including the requested date.
        days: usize,
    },

    /// Returned when every chapter has already been read.
    #[error("all {total} chapters are already read; nothing left to plan")]
    PlanComplete {
        /// Catalog size.
        total: usize,
    },

    /// Returned when a run of days is empty or longer than a year.
    #[error("day span must be between 1 and {max}, got {days}")]
    InvalidSpan {
        /// Requested number of days.
        days: u32,
        /// Largest accepted span.
        max: u32,
    },

    /// Returned when a run of days passes the last representable date.
    #[error("{days} days from {start} runs past the supported calendar range")]
    DateOverflow {
        /// First day of the run.
        start: NaiveDate,
        /// Requested number of days.
        days: u32,
    },

    /// Returned when plan generation violates its own postconditions.
    #[error("plan invariant violated: {message}")]
    Invariant {
        /// Description of the violation.
        message: String,
    },
}

impl PlanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlanError::EmptyCalendar
            | PlanError::InsufficientUnits { .. }
            | PlanError::InvalidTarget { .. }
            | PlanError::InvalidYear { .. } => ErrorKind::Configuration,
            PlanError::DateOutOfRange { .. }
            | PlanError::InvalidDate { .. }
            | PlanError::InvalidProgress { .. }
            | PlanError::AheadOfSchedule { .. }
            | PlanError::PlanComplete { .. }
            | PlanError::InvalidSpan { .. }
            | PlanError::DateOverflow { .. } => ErrorKind::Validation,
            PlanError::Invariant { .. } => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_insufficient_units() {
        let e = PlanError::InsufficientUnits { units: 10, days: 365 };
        assert_eq!(
            e.to_string(),
            "10 chapters cannot cover 365 days at one chapter per day"
        );
        assert_eq!(e.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn error_date_out_of_range() {
        let e = PlanError::DateOutOfRange {
            date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            year: 2025,
        };
        assert_eq!(
            e.to_string(),
            "date 2026-01-01 must be within the selected year 2025"
        );
        assert_eq!(e.kind(), ErrorKind::Validation);
    }

    #[test]
    fn error_invalid_date() {
        let e = PlanError::InvalidDate {
            input: "2025-13-01".into(),
        };
        assert_eq!(e.to_string(), "invalid date '2025-13-01', expected YYYY-MM-DD");
    }

    #[test]
    fn error_plan_complete() {
        let e = PlanError::PlanComplete { total: 1189 };
        assert_eq!(
            e.to_string(),
            "all 1189 chapters are already read; nothing left to plan"
        );
        assert_eq!(e.kind(), ErrorKind::Validation);
    }

    #[test]
    fn error_invalid_span() {
        let e = PlanError::InvalidSpan { days: 0, max: 366 };
        assert_eq!(e.to_string(), "day span must be between 1 and 366, got 0");
        assert_eq!(e.kind(), ErrorKind::Validation);
    }

    #[test]
    fn error_invariant_is_internal() {
        let e = PlanError::Invariant {
            message: "consumed 1188 of 1189".into(),
        };
        assert_eq!(e.to_string(), "plan invariant violated: consumed 1188 of 1189");
        assert_eq!(e.kind(), ErrorKind::Internal);
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<PlanError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<PlanError>();
    }
}
