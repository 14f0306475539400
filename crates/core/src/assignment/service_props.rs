//! Property-based tests for AssignmentService.
//!
//! - Costs are unit price times hours whenever a non-zero price exists
//! - Costs are zero without a price
//! - A single retired reference always blocks the write

use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::error::AssignmentError;
use super::service::AssignmentService;
use crate::reference::{ReferenceCheck, ReferenceKind, ReferenceStatus};

/// Strategy to generate hours (0.00 to 744.00, a month of wall-clock hours).
fn hours() -> impl Strategy<Value = Decimal> {
    (0i64..74_400i64).prop_map(|v| Decimal::new(v, 2))
}

/// Strategy to generate positive unit prices (0.01 to 10,000.00).
fn positive_price() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn reference_kind() -> impl Strategy<Value = ReferenceKind> {
    prop_oneof![
        Just(ReferenceKind::Project),
        Just(ReferenceKind::Employee),
        Just(ReferenceKind::Year),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_costs_are_price_times_hours(
        price in positive_price(),
        planned in hours(),
        actual in hours(),
    ) {
        let costs = AssignmentService::compute_costs(Some(price), planned, actual);

        prop_assert_eq!(costs.planned_cost, price * planned);
        prop_assert_eq!(costs.actual_cost, price * actual);
    }

    #[test]
    fn prop_costs_without_price_are_zero(
        planned in hours(),
        actual in hours(),
    ) {
        let costs = AssignmentService::compute_costs(None, planned, actual);

        prop_assert_eq!(costs.planned_cost, Decimal::ZERO);
        prop_assert_eq!(costs.actual_cost, Decimal::ZERO);
    }

    #[test]
    fn prop_costs_scale_with_hours(
        price in positive_price(),
        planned in hours(),
        extra in hours(),
    ) {
        let base = AssignmentService::compute_costs(Some(price), planned, planned);
        let more = AssignmentService::compute_costs(Some(price), planned + extra, planned);

        prop_assert!(more.planned_cost >= base.planned_cost);
        prop_assert_eq!(more.actual_cost, base.actual_cost);
    }

    #[test]
    fn prop_any_retired_reference_blocks(
        retired_kind in reference_kind(),
        position in 0usize..3,
    ) {
        let mut checks: Vec<ReferenceCheck> = [ReferenceKind::Project, ReferenceKind::Employee, ReferenceKind::Year]
            .into_iter()
            .map(|kind| ReferenceCheck::new(kind, Uuid::new_v4(), ReferenceStatus::Active))
            .collect();
        let retired_id = Uuid::new_v4();
        checks[position] = ReferenceCheck::new(retired_kind, retired_id, ReferenceStatus::Retired);

        let result = AssignmentService::validate_references(&checks);

        prop_assert!(
            matches!(
                result,
                Err(AssignmentError::Validation { kind, id }) if kind == retired_kind && id == retired_id
            ),
            "expected validation error"
        );
    }
}
