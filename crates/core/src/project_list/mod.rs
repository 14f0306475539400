//! Project list aggregates.
//!
//! A project list row summarises every assignment of its project. The
//! totals are recomputed whenever an assignment of that project is created
//! or updated.

pub mod totals;

pub use totals::{CostTotals, HourTotals};
