//! Monthly rollup of actual hours per project and employee.
//!
//! A rollup row holds twelve hour slots, `month_01` through `month_12`.
//! The row is created by the first assignment seen for a (project,
//! employee) pair and only that assignment's month is filled in. Later
//! assignments for the same pair leave the row as it is.

pub mod planner;
pub mod types;

pub use planner::{RollupAction, RollupPlanner};
pub use types::{MONTHS_PER_YEAR, MonthNumber, MonthOutOfRange, MonthSlots, MonthlyRollup};
