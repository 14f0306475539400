//! Reference masters referenced by assignments.
//!
//! Projects, employees, years, and months are never physically deleted.
//! Retiring one flips its status so historical assignments stay intact
//! while new assignments are refused.

pub mod types;

pub use types::{ReferenceCheck, ReferenceKind, ReferenceStatus};
