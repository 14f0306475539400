//! Shared fixtures for repository integration tests.
//!
//! Every test gets its own in-memory SQLite database with all migrations
//! applied. The pool holds a single connection so the database lives as
//! long as the test.

#![allow(dead_code)]

use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use opcost_core::assignment::CreateAssignmentInput;
use opcost_db::ReferenceRepository;
use opcost_db::migration::Migrator;
use opcost_shared::types::{BillingClassId, EmployeeId, MonthId, ProjectId, YearId};

/// Opens a fresh migrated in-memory database.
pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

/// Reference masters for one project, one priced employee, and a year.
pub struct Fixture {
    pub db: DatabaseConnection,
    pub project_id: ProjectId,
    pub employee_id: EmployeeId,
    pub billing_class_id: BillingClassId,
    pub year_id: YearId,
    months: Vec<MonthId>,
}

impl Fixture {
    /// Seeds masters; the employee's class is priced at `unit_price`.
    pub async fn new(unit_price: Option<Decimal>) -> Self {
        let db = setup_db().await;
        let refs = ReferenceRepository::new(db.clone());

        let project = refs
            .create_project("P-001", "Harbor Renewal")
            .await
            .expect("Failed to create project");
        let class = refs
            .create_billing_class("SENIOR", "Senior Engineer", unit_price)
            .await
            .expect("Failed to create billing class");
        let employee = refs
            .create_employee("E-001", "Kim Lee", Some(BillingClassId::from_uuid(class.id)))
            .await
            .expect("Failed to create employee");
        let year = refs.create_year(2026).await.expect("Failed to create year");

        let mut months = Vec::with_capacity(12);
        for number in 1..=12_i16 {
            let month = refs
                .create_month(number, &format!("Month {number}"))
                .await
                .expect("Failed to create month");
            months.push(MonthId::from_uuid(month.id));
        }

        Self {
            db,
            project_id: ProjectId::from_uuid(project.id),
            employee_id: EmployeeId::from_uuid(employee.id),
            billing_class_id: BillingClassId::from_uuid(class.id),
            year_id: YearId::from_uuid(year.id),
            months,
        }
    }

    /// Month master for calendar month `number` (1-12).
    pub fn month(&self, number: usize) -> MonthId {
        self.months[number - 1]
    }

    pub fn references(&self) -> ReferenceRepository {
        ReferenceRepository::new(self.db.clone())
    }

    /// Assignment input for the fixture's project and employee.
    pub fn input(&self, month: usize, planned: Decimal, actual: Decimal) -> CreateAssignmentInput {
        CreateAssignmentInput {
            project_id: self.project_id,
            employee_id: self.employee_id,
            year_id: self.year_id,
            month_id: self.month(month),
            hours_planned: planned,
            hours_actual: actual,
        }
    }

    /// Adds another employee, optionally in a new class priced at `unit_price`.
    pub async fn add_employee(&self, code: &str, unit_price: Option<Decimal>) -> EmployeeId {
        let refs = self.references();
        let class = refs
            .create_billing_class(&format!("CLASS-{code}"), "Class", unit_price)
            .await
            .expect("Failed to create billing class");
        let employee = refs
            .create_employee(code, "Other Employee", Some(BillingClassId::from_uuid(class.id)))
            .await
            .expect("Failed to create employee");
        EmployeeId::from_uuid(employee.id)
    }

    /// Adds another active project.
    pub async fn add_project(&self, code: &str) -> ProjectId {
        let project = self
            .references()
            .create_project(code, "Other Project")
            .await
            .expect("Failed to create project");
        ProjectId::from_uuid(project.id)
    }
}
