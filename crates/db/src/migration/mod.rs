//! Database migrations.
//!
//! Migrations are managed using sea-orm-migration and are written with the
//! schema builder so they run on both PostgreSQL and SQLite.

pub use sea_orm_migration::prelude::*;

mod m20260301_000001_reference_masters;
mod m20260301_000002_assignments;
mod m20260301_000003_reporting;

/// Migrator for running database migrations.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_reference_masters::Migration),
            Box::new(m20260301_000002_assignments::Migration),
            Box::new(m20260301_000003_reporting::Migration),
        ]
    }
}
