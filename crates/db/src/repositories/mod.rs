//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.
//! Lifecycle steps that must share a transaction take a
//! [`UnitOfWork`](crate::unit_of_work::UnitOfWork) instead of `&self`.

pub mod assignment;
pub mod listing;
pub mod project_list;
pub mod reference;
pub mod rollup;

pub use assignment::{AssignmentFilter, AssignmentRepoError, AssignmentRepository};
pub use listing::{CreateListRowInput, ListingError, ListingRepository};
pub use project_list::{ProjectListError, ProjectListRepository};
pub use reference::{ReferenceError, ReferenceRepository};
pub use rollup::RollupRepository;
