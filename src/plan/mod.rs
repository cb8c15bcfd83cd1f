//! Chapter allocation over the days of a year.
//!
//! Every plan is a contiguous partition of flat catalog indices: each day gets
//! at least one chapter, aims for its weekday/weekend base target, and the last
//! day ends exactly on the catalog size.

pub mod cache;
pub mod catch_up;
pub mod generator;
pub mod query;

pub use cache::PlanCache;
pub use catch_up::catch_up_plan;
pub use generator::{YearPlan, generate_plan, generate_year};
pub use query::{DayReading, lookup};
