//! Core business logic for Opcost.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `assignment` - Project employee assignments, cost derivation, and validation
//! - `reference` - Reference master status (active / retired)
//! - `rollup` - Monthly rollup slots and the upsert decision
//! - `listing` - Per-month list rows and navigation descriptors
//! - `project_list` - Hour and cost totals for project list aggregates

pub mod assignment;
pub mod listing;
pub mod project_list;
pub mod reference;
pub mod rollup;
