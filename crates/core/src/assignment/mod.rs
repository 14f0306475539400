//! Project employee assignments.
//!
//! An assignment records planned and actual operating hours for one
//! project, employee, year, and month. Its costs are derived from the
//! employee's billing class unit price and are never set by callers.
//!
//! This module holds the pure rules:
//! - Domain types and the partial update input
//! - The cost formula
//! - Reference status validation
//! - Error types for assignment operations

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::AssignmentError;
pub use service::AssignmentService;
pub use types::{
    Assignment, AssignmentCosts, AssignmentField, CreateAssignmentInput, UpdateAssignmentInput,
};
