//! Database seeder for local development.
//!
//! Seeds billing classes, employees, a fiscal year with its twelve months,
//! two projects, and a handful of assignments, then builds project lists and
//! per-month list rows on top of them. Running it twice is a no-op.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use opcost_core::assignment::CreateAssignmentInput;
use opcost_db::entities::project_masters;
use opcost_db::{
    AssignmentRepository, CreateListRowInput, ListingRepository, ProjectListRepository,
    ReferenceRepository,
};
use opcost_shared::AppConfig;
use opcost_shared::types::{BillingClassId, EmployeeId, MonthId, ProjectId, YearId};

const SEED_YEAR: i32 = 2026;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Billing classes as (code, name, unit price).
const BILLING_CLASSES: [(&str, &str, Option<Decimal>); 4] = [
    ("SENIOR", "Senior Engineer", Some(dec!(80))),
    ("MID", "Engineer", Some(dec!(50))),
    ("JUNIOR", "Junior Engineer", Some(dec!(40))),
    ("TRAINEE", "Trainee", None),
];

/// Employees as (code, name, index into `BILLING_CLASSES`).
const EMPLOYEES: [(&str, &str, usize); 4] = [
    ("E-001", "Kim Lee", 0),
    ("E-002", "Ana Souza", 1),
    ("E-003", "Ravi Patel", 2),
    ("E-004", "Noa Levi", 3),
];

const PROJECTS: [(&str, &str); 2] = [("P-001", "Harbor Renewal"), ("P-002", "Transit Signals")];

/// Assignments as (project index, employee index, month, planned, actual).
const ASSIGNMENTS: [(usize, usize, usize, Decimal, Decimal); 6] = [
    (0, 0, 1, dec!(40), dec!(36)),
    (0, 0, 2, dec!(40), dec!(44)),
    (0, 1, 1, dec!(80), dec!(80)),
    (0, 3, 1, dec!(20), dec!(12.5)),
    (1, 1, 2, dec!(16), dec!(8)),
    (1, 2, 3, dec!(60), dec!(64)),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = opcost_db::connect_with(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!("Connected to database");

    if already_seeded(&db).await? {
        info!("Seed data already present, skipping");
        return Ok(());
    }

    let refs = ReferenceRepository::new(db.clone());

    let mut classes = Vec::with_capacity(BILLING_CLASSES.len());
    for (code, name, unit_price) in BILLING_CLASSES {
        let class = refs.create_billing_class(code, name, unit_price).await?;
        classes.push(BillingClassId::from_uuid(class.id));
    }
    info!(count = classes.len(), "Seeded billing classes");

    let mut employees = Vec::with_capacity(EMPLOYEES.len());
    for (code, name, class) in EMPLOYEES {
        let employee = refs.create_employee(code, name, Some(classes[class])).await?;
        employees.push(EmployeeId::from_uuid(employee.id));
    }
    info!(count = employees.len(), "Seeded employees");

    let year = YearId::from_uuid(refs.create_year(SEED_YEAR).await?.id);
    let mut months = Vec::with_capacity(MONTH_NAMES.len());
    for (number, name) in (1_i16..).zip(MONTH_NAMES) {
        let month = refs.create_month(number, name).await?;
        months.push(MonthId::from_uuid(month.id));
    }
    info!(year = SEED_YEAR, "Seeded year and months");

    let mut projects = Vec::with_capacity(PROJECTS.len());
    for (code, name) in PROJECTS {
        let project = refs.create_project(code, name).await?;
        projects.push(ProjectId::from_uuid(project.id));
    }

    let lists = ProjectListRepository::new(db.clone());
    for (project, (_, name)) in projects.iter().zip(PROJECTS) {
        lists.create_project_list(*project, name).await?;
    }
    info!(count = projects.len(), "Seeded projects and project lists");

    let assignments = AssignmentRepository::new(db.clone());
    let listing = ListingRepository::new(db.clone());
    for (project, employee, month, planned, actual) in ASSIGNMENTS {
        let assignment = assignments
            .create_assignment(CreateAssignmentInput {
                project_id: projects[project],
                employee_id: employees[employee],
                year_id: year,
                month_id: months[month - 1],
                hours_planned: planned,
                hours_actual: actual,
            })
            .await?;

        listing
            .create_row(CreateListRowInput {
                project_id: assignment.project_id,
                month_id: assignment.month_id,
                employee_id: Some(assignment.employee_id),
                assignment_id: Some(assignment.id),
            })
            .await?;
    }
    info!(count = ASSIGNMENTS.len(), "Seeded assignments and list rows");

    info!("Seeding complete");
    Ok(())
}

async fn already_seeded(db: &DatabaseConnection) -> anyhow::Result<bool> {
    let existing = project_masters::Entity::find()
        .filter(project_masters::Column::Code.eq(PROJECTS[0].0))
        .one(db)
        .await?;
    Ok(existing.is_some())
}
