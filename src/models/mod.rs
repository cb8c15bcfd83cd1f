pub mod chapter;
pub mod day;

pub use chapter::{Book, ChapterUnit, Testament};
pub use day::{CalendarDay, DailyTargets, DayAllocation};
