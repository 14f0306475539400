//! Integration tests for the monthly rollup.

mod common;

use common::Fixture;
use opcost_core::assignment::UpdateAssignmentInput;
use opcost_core::rollup::MonthNumber;
use opcost_db::{AssignmentRepository, RollupRepository};
use rust_decimal_macros::dec;

fn month(number: u8) -> MonthNumber {
    MonthNumber::new(number).expect("valid month")
}

#[tokio::test]
async fn test_first_assignment_creates_rollup() {
    let fx = Fixture::new(Some(dec!(50))).await;
    let assignments = AssignmentRepository::new(fx.db.clone());
    let rollups = RollupRepository::new(fx.db.clone());

    assignments
        .create_assignment(fx.input(3, dec!(8), dec!(10)))
        .await
        .expect("Failed to create assignment");

    let rollup = rollups
        .get_rollup(fx.project_id, fx.employee_id)
        .await
        .expect("Failed to load rollup")
        .expect("Rollup should exist");

    assert_eq!(rollup.slot(month(3)), Some(dec!(10)));
    for number in (1..=12).filter(|n| *n != 3) {
        assert_eq!(rollup.slot(month(number)), None, "month {number}");
    }
}

#[tokio::test]
async fn test_second_month_leaves_rollup_untouched() {
    let fx = Fixture::new(Some(dec!(50))).await;
    let assignments = AssignmentRepository::new(fx.db.clone());
    let rollups = RollupRepository::new(fx.db.clone());

    assignments
        .create_assignment(fx.input(3, dec!(8), dec!(10)))
        .await
        .expect("Failed to create assignment");
    assignments
        .create_assignment(fx.input(4, dec!(8), dec!(12)))
        .await
        .expect("Failed to create assignment");

    let rollup = rollups
        .get_rollup(fx.project_id, fx.employee_id)
        .await
        .expect("Failed to load rollup")
        .expect("Rollup should exist");

    assert_eq!(rollup.slot(month(3)), Some(dec!(10)));
    assert_eq!(rollup.slot(month(4)), None);

    let count = rollups
        .count_rollups(fx.project_id, fx.employee_id)
        .await
        .expect("Failed to count rollups");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_update_does_not_touch_rollup() {
    let fx = Fixture::new(Some(dec!(50))).await;
    let assignments = AssignmentRepository::new(fx.db.clone());
    let rollups = RollupRepository::new(fx.db.clone());

    let created = assignments
        .create_assignment(fx.input(3, dec!(8), dec!(10)))
        .await
        .expect("Failed to create assignment");
    assignments
        .update_assignment(
            created.id,
            UpdateAssignmentInput {
                hours_actual: Some(dec!(20)),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update assignment");

    let rollup = rollups
        .get_rollup(fx.project_id, fx.employee_id)
        .await
        .expect("Failed to load rollup")
        .expect("Rollup should exist");
    assert_eq!(rollup.slot(month(3)), Some(dec!(10)));
}

#[tokio::test]
async fn test_rollups_are_per_employee() {
    let fx = Fixture::new(Some(dec!(50))).await;
    let assignments = AssignmentRepository::new(fx.db.clone());
    let rollups = RollupRepository::new(fx.db.clone());
    let other = fx.add_employee("E-002", None).await;

    assignments
        .create_assignment(fx.input(3, dec!(8), dec!(10)))
        .await
        .expect("Failed to create assignment");
    let mut input = fx.input(6, dec!(4), dec!(5));
    input.employee_id = other;
    assignments
        .create_assignment(input)
        .await
        .expect("Failed to create assignment");

    let rollup = rollups
        .get_rollup(fx.project_id, other)
        .await
        .expect("Failed to load rollup")
        .expect("Rollup should exist");
    assert_eq!(rollup.slot(month(6)), Some(dec!(5)));
    assert_eq!(rollup.slot(month(3)), None);
}

#[tokio::test]
async fn test_no_rollup_before_first_assignment() {
    let fx = Fixture::new(Some(dec!(50))).await;
    let rollups = RollupRepository::new(fx.db.clone());

    let rollup = rollups
        .get_rollup(fx.project_id, fx.employee_id)
        .await
        .expect("Failed to load rollup");
    assert!(rollup.is_none());
}
