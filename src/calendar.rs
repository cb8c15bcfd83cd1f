//! Day sequences for a calendar year.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::PlanError;
use crate::models::CalendarDay;

/// Gregorian leap rule: every 4th year, except centuries not divisible by 400.
/// Longest run of days a multi-day view may request.
pub const MAX_SPAN_DAYS: u32 = 366;

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn year_length(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn year_bounds(year: i32) -> Result<(NaiveDate, NaiveDate), PlanError> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(PlanError::InvalidYear { year })?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(PlanError::InvalidYear { year })?;
    Ok((start, end))
}

/// First and last day of `month` (1-12) in `year`.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), PlanError> {
    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or(PlanError::InvalidYear { year })?;
    if month == 12 {
        let (_, end) = year_bounds(year)?;
        return Ok((start, end));
    }
    let end = NaiveDate::from_ymd_opt(year, month + 1, 1)
        .and_then(|d| d.pred_opt())
        .ok_or(PlanError::InvalidYear { year })?;
    Ok((start, end))
}

/// Every day of `year` in order.
pub fn days_in_year(year: i32) -> Result<Vec<CalendarDay>, PlanError> {
    let (start, _) = year_bounds(year)?;
    days_from(start)
}

/// The days from `start` through December 31 of its year.
pub fn days_from(start: NaiveDate) -> Result<Vec<CalendarDay>, PlanError> {
    let year = start.year();
    let (_, end) = year_bounds(year)?;
    let mut days = Vec::with_capacity(year_length(year) as usize);
    // Stepping with succ_opt keeps December 31 of the last supported year.
    let mut next = Some(start);
    while let Some(date) = next.filter(|d| *d <= end) {
        days.push(CalendarDay {
            ordinal: date.ordinal(),
            date,
            is_weekend: is_weekend(date),
        });
        next = date.succ_opt();
    }
    Ok(days)
}

/// `days` consecutive dates starting at `start`.
pub fn date_span(start: NaiveDate, days: u32) -> Result<Vec<NaiveDate>, PlanError> {
    if days == 0 || days > MAX_SPAN_DAYS {
        return Err(PlanError::InvalidSpan {
            days,
            max: MAX_SPAN_DAYS,
        });
    }
    (0..days)
        .map(|offset| {
            start
                .checked_add_signed(Duration::days(offset as i64))
                .ok_or(PlanError::DateOverflow { start, days })
        })
        .collect()
}

pub fn parse_date(input: &str) -> Result<NaiveDate, PlanError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| PlanError::InvalidDate {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_rule() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2025));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn year_sequence_lengths() {
        assert_eq!(days_in_year(2025).unwrap().len(), 365);
        assert_eq!(days_in_year(2024).unwrap().len(), 366);
        assert_eq!(days_in_year(2000).unwrap().len(), 366);
        assert_eq!(days_in_year(1900).unwrap().len(), 365);
    }

    #[test]
    fn ordinals_are_one_based_and_sequential() {
        let days = days_in_year(2024).unwrap();
        for (i, day) in days.iter().enumerate() {
            assert_eq!(day.ordinal as usize, i + 1);
        }
        assert_eq!(days[365].date, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn weekends_in_2025() {
        let days = days_in_year(2025).unwrap();
        // 2025-01-01 is a Wednesday
        assert!(!days[0].is_weekend);
        assert!(days[3].is_weekend);
        assert!(days[4].is_weekend);
        assert!(!days[5].is_weekend);
        assert_eq!(days.iter().filter(|d| d.is_weekend).count(), 104);
    }

    #[test]
    fn days_from_mid_year() {
        let start = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
        let days = days_from(start).unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].ordinal, 359);
        assert_eq!(days[6].ordinal, 365);
    }

    #[test]
    fn month_bounds_handle_february_and_december() {
        let (start, end) = month_bounds(2024, 2).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        let (_, end) = month_bounds(2025, 12).unwrap();
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn last_supported_year_is_complete() {
        let year = NaiveDate::MAX.year();
        let days = days_in_year(year).unwrap();
        assert_eq!(days.len() as u32, year_length(year));
        assert_eq!(days.last().unwrap().date, NaiveDate::MAX);
        let (_, end) = month_bounds(year, 12).unwrap();
        assert_eq!(end, NaiveDate::MAX);
    }

    #[test]
    fn date_span_counts_consecutive_days() {
        let start = NaiveDate::from_ymd_opt(2025, 12, 30).unwrap();
        let span = date_span(start, 3).unwrap();
        assert_eq!(span.len(), 3);
        assert_eq!(span[2], NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    }

    #[test]
    fn date_span_rejects_empty_and_oversized_runs() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(
            date_span(start, 0),
            Err(PlanError::InvalidSpan { days: 0, max: 366 })
        );
        assert_eq!(
            date_span(start, 4_000_000_000),
            Err(PlanError::InvalidSpan {
                days: 4_000_000_000,
                max: 366
            })
        );
    }

    #[test]
    fn date_span_past_last_date_is_an_error() {
        let start = NaiveDate::MAX.pred_opt().unwrap();
        assert_eq!(
            date_span(start, 3),
            Err(PlanError::DateOverflow { start, days: 3 })
        );
    }

    #[test]
    fn unrepresentable_year_is_rejected() {
        assert_eq!(
            days_in_year(i32::MAX),
            Err(PlanError::InvalidYear { year: i32::MAX })
        );
    }

    #[test]
    fn parse_date_accepts_iso_only() {
        assert_eq!(
            parse_date("2025-03-09").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
        );
        assert!(matches!(
            parse_date("03/09/2025"),
            Err(PlanError::InvalidDate { .. })
        ));
        assert!(matches!(
            parse_date("2025-02-30"),
            Err(PlanError::InvalidDate { .. })
        ));
    }
}
