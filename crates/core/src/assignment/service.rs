//! Assignment rules: cost derivation and reference validation.

use rust_decimal::Decimal;

use super::error::AssignmentError;
use super::types::{AssignmentCosts, AssignmentField};
use crate::reference::ReferenceCheck;

/// Assignment service for business logic.
pub struct AssignmentService;

impl AssignmentService {
    /// Derives planned and actual costs from the billing class unit price.
    ///
    /// `unit_price` is `None` when the employee has no billing class or the
    /// class has no price. A missing or zero price yields zero costs;
    /// otherwise each cost is `unit_price * hours`.
    #[must_use]
    pub fn compute_costs(
        unit_price: Option<Decimal>,
        hours_planned: Decimal,
        hours_actual: Decimal,
    ) -> AssignmentCosts {
        match unit_price {
            Some(price) if !price.is_zero() => AssignmentCosts {
                planned_cost: price * hours_planned,
                actual_cost: price * hours_actual,
            },
            _ => AssignmentCosts::default(),
        }
    }

    /// Rejects the write if any referenced master is retired.
    ///
    /// # Errors
    ///
    /// Returns `AssignmentError::Validation` naming the first retired master.
    pub fn validate_references(checks: &[ReferenceCheck]) -> Result<(), AssignmentError> {
        match checks.iter().find(|check| check.status.is_retired()) {
            Some(retired) => Err(AssignmentError::Validation {
                kind: retired.kind,
                id: retired.id,
            }),
            None => Ok(()),
        }
    }

    /// Returns true if any changed field requires reference validation.
    #[must_use]
    pub fn needs_reference_check(changed: &[AssignmentField]) -> bool {
        changed
            .iter()
            .any(|field| field.requires_reference_check())
    }

    /// Returns true if any changed field invalidates the stored costs.
    #[must_use]
    pub fn needs_cost_recompute(changed: &[AssignmentField]) -> bool {
        changed.iter().any(|field| field.affects_costs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{ReferenceKind, ReferenceStatus};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    #[test]
    fn test_costs_use_unit_price() {
        let costs = AssignmentService::compute_costs(Some(dec!(50)), dec!(8), dec!(10));

        assert_eq!(costs.planned_cost, dec!(400));
        assert_eq!(costs.actual_cost, dec!(500));
    }

    #[test]
    fn test_costs_without_price_are_zero() {
        let costs = AssignmentService::compute_costs(None, dec!(8), dec!(10));

        assert_eq!(costs, AssignmentCosts::default());
    }

    #[test]
    fn test_costs_with_zero_price_are_zero() {
        let costs = AssignmentService::compute_costs(Some(Decimal::ZERO), dec!(8), dec!(10));

        assert_eq!(costs.planned_cost, Decimal::ZERO);
        assert_eq!(costs.actual_cost, Decimal::ZERO);
    }

    #[test]
    fn test_fractional_price_and_hours() {
        let costs = AssignmentService::compute_costs(Some(dec!(37.5)), dec!(7.5), dec!(0.25));

        assert_eq!(costs.planned_cost, dec!(281.25));
        assert_eq!(costs.actual_cost, dec!(9.375));
    }

    #[test]
    fn test_active_references_pass() {
        let checks = [
            ReferenceCheck::new(ReferenceKind::Project, Uuid::new_v4(), ReferenceStatus::Active),
            ReferenceCheck::new(ReferenceKind::Employee, Uuid::new_v4(), ReferenceStatus::Active),
            ReferenceCheck::new(ReferenceKind::Year, Uuid::new_v4(), ReferenceStatus::Active),
        ];

        assert!(AssignmentService::validate_references(&checks).is_ok());
    }

    #[test]
    fn test_retired_reference_rejected() {
        let year_id = Uuid::new_v4();
        let checks = [
            ReferenceCheck::new(ReferenceKind::Project, Uuid::new_v4(), ReferenceStatus::Active),
            ReferenceCheck::new(ReferenceKind::Year, year_id, ReferenceStatus::Retired),
        ];

        let result = AssignmentService::validate_references(&checks);

        assert!(matches!(
            result,
            Err(AssignmentError::Validation { kind: ReferenceKind::Year, id }) if id == year_id
        ));
    }

    #[test]
    fn test_change_classification() {
        assert!(!AssignmentService::needs_reference_check(&[
            AssignmentField::Month,
            AssignmentField::HoursActual,
        ]));
        assert!(AssignmentService::needs_reference_check(&[
            AssignmentField::Year
        ]));
        assert!(AssignmentService::needs_cost_recompute(&[
            AssignmentField::Employee
        ]));
        assert!(!AssignmentService::needs_cost_recompute(&[]));
    }
}
