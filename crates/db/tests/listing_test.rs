//! Integration tests for per-month list rows.

mod common;

use common::Fixture;
use opcost_core::assignment::UpdateAssignmentInput;
use opcost_db::{AssignmentRepository, CreateListRowInput, ListingError, ListingRepository};
use opcost_shared::types::{AssignmentId, EmployeeId, ListRowId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

#[tokio::test]
async fn test_row_mirrors_assignment_after_update() {
    let fx = Fixture::new(Some(dec!(50))).await;
    let assignments = AssignmentRepository::new(fx.db.clone());
    let listing = ListingRepository::new(fx.db.clone());

    let assignment = assignments
        .create_assignment(fx.input(3, dec!(8), dec!(10)))
        .await
        .expect("Failed to create assignment");
    let row = listing
        .create_row(CreateListRowInput {
            project_id: fx.project_id,
            month_id: fx.month(3),
            employee_id: Some(fx.employee_id),
            assignment_id: Some(assignment.id),
        })
        .await
        .expect("Failed to create row");

    assert_eq!(row.figures.hours_actual, dec!(10));
    assert_eq!(row.figures.actual_cost, dec!(500));

    assignments
        .update_assignment(
            assignment.id,
            UpdateAssignmentInput {
                hours_actual: Some(dec!(12)),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update assignment");

    let row = listing.get_row(row.id).await.expect("Row should exist");
    assert_eq!(row.figures.hours_planned, dec!(8));
    assert_eq!(row.figures.hours_actual, dec!(12));
    assert_eq!(row.figures.planned_cost, dec!(400));
    assert_eq!(row.figures.actual_cost, dec!(600));
}

#[tokio::test]
async fn test_row_without_assignment_has_zero_figures() {
    let fx = Fixture::new(Some(dec!(50))).await;
    let listing = ListingRepository::new(fx.db.clone());

    let row = listing
        .create_row(CreateListRowInput {
            project_id: fx.project_id,
            month_id: fx.month(1),
            employee_id: None,
            assignment_id: None,
        })
        .await
        .expect("Failed to create row");

    let row = listing.get_row(row.id).await.expect("Row should exist");
    assert_eq!(row.figures.hours_planned, Decimal::ZERO);
    assert_eq!(row.figures.actual_cost, Decimal::ZERO);
}

#[tokio::test]
async fn test_list_rows_by_project_and_month() {
    let fx = Fixture::new(Some(dec!(50))).await;
    let assignments = AssignmentRepository::new(fx.db.clone());
    let listing = ListingRepository::new(fx.db.clone());

    for month in [1, 1, 2] {
        listing
            .create_row(CreateListRowInput {
                project_id: fx.project_id,
                month_id: fx.month(month),
                employee_id: Some(fx.employee_id),
                assignment_id: None,
            })
            .await
            .expect("Failed to create row");
    }
    let assignment = assignments
        .create_assignment(fx.input(1, dec!(4), dec!(4)))
        .await
        .expect("Failed to create assignment");
    listing
        .create_row(CreateListRowInput {
            project_id: fx.project_id,
            month_id: fx.month(1),
            employee_id: Some(fx.employee_id),
            assignment_id: Some(assignment.id),
        })
        .await
        .expect("Failed to create row");

    let rows = listing
        .list_rows(fx.project_id, fx.month(1))
        .await
        .expect("Failed to list rows");

    assert_eq!(rows.len(), 3);
    let linked: Vec<_> = rows.iter().filter(|r| r.assignment_id.is_some()).collect();
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].figures.planned_cost, dec!(200));
}

#[tokio::test]
async fn test_create_row_with_missing_assignment() {
    let fx = Fixture::new(Some(dec!(50))).await;
    let listing = ListingRepository::new(fx.db.clone());

    let result = listing
        .create_row(CreateListRowInput {
            project_id: fx.project_id,
            month_id: fx.month(1),
            employee_id: None,
            assignment_id: Some(AssignmentId::new()),
        })
        .await;

    assert!(matches!(result, Err(ListingError::AssignmentNotFound(_))));
}

#[tokio::test]
async fn test_open_employee_assignments_action() {
    let fx = Fixture::new(Some(dec!(50))).await;
    let listing = ListingRepository::new(fx.db.clone());

    let row = listing
        .create_row(CreateListRowInput {
            project_id: fx.project_id,
            month_id: fx.month(1),
            employee_id: Some(fx.employee_id),
            assignment_id: None,
        })
        .await
        .expect("Failed to create row");

    let action = listing
        .open_employee_assignments(row.id)
        .await
        .expect("Failed to build action");

    assert_eq!(
        serde_json::to_value(&action).expect("serializable"),
        json!({
            "target": "per-month-assignment-list",
            "filter": { "employee": fx.employee_id.to_string() },
            "defaultEmployee": fx.employee_id.to_string(),
        })
    );
}

#[tokio::test]
async fn test_missing_row() {
    let fx = Fixture::new(Some(dec!(50))).await;
    let listing = ListingRepository::new(fx.db.clone());

    let result = listing.get_row(ListRowId::new()).await;

    assert!(matches!(result, Err(ListingError::NotFound(_))));
}

#[tokio::test]
async fn test_create_row_with_unknown_employee() {
    let fx = Fixture::new(Some(dec!(50))).await;
    let listing = ListingRepository::new(fx.db.clone());
    let unknown = EmployeeId::new();

    let result = listing
        .create_row(CreateListRowInput {
            project_id: fx.project_id,
            month_id: fx.month(1),
            employee_id: Some(unknown),
            assignment_id: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(ListingError::EmployeeNotFound(missing)) if missing == unknown
    ));
}
