//! Per-month, per-employee list rows.
//!
//! A list row points at a project, a month, optionally an employee, and
//! optionally the assignment whose figures it shows. The figures are never
//! stored on the row; they are read through the linked assignment.

pub mod service;
pub mod types;

pub use service::ListingService;
pub use types::{MirroredFigures, NavigationAction, NavigationFilter, PER_MONTH_ASSIGNMENT_LIST, PerMonthListRow};
