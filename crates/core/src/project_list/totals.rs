//! Hour and cost totals over a project's assignments.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;

/// Summed planned and actual hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HourTotals {
    /// Total planned hours.
    pub planned: Decimal,
    /// Total actual hours.
    pub actual: Decimal,
}

impl HourTotals {
    /// Sums the hours of `assignments`.
    pub fn sum<'a>(assignments: impl IntoIterator<Item = &'a Assignment>) -> Self {
        assignments
            .into_iter()
            .fold(Self::default(), |acc, a| Self {
                planned: acc.planned + a.hours_planned,
                actual: acc.actual + a.hours_actual,
            })
    }
}

/// Summed planned and actual costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CostTotals {
    /// Total planned cost.
    pub planned: Decimal,
    /// Total actual cost.
    pub actual: Decimal,
}

impl CostTotals {
    /// Sums the stored costs of `assignments`.
    pub fn sum<'a>(assignments: impl IntoIterator<Item = &'a Assignment>) -> Self {
        assignments
            .into_iter()
            .fold(Self::default(), |acc, a| Self {
                planned: acc.planned + a.planned_cost,
                actual: acc.actual + a.actual_cost,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use opcost_shared::types::{AssignmentId, EmployeeId, MonthId, ProjectId, YearId};
    use rust_decimal_macros::dec;

    fn assignment(hp: Decimal, ha: Decimal, pc: Decimal, ac: Decimal) -> Assignment {
        Assignment {
            id: AssignmentId::new(),
            project_id: ProjectId::new(),
            employee_id: EmployeeId::new(),
            year_id: YearId::new(),
            month_id: MonthId::new(),
            hours_planned: hp,
            hours_actual: ha,
            planned_cost: pc,
            actual_cost: ac,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_totals_are_zero() {
        assert_eq!(HourTotals::sum(&[] as &[Assignment]), HourTotals::default());
        assert_eq!(CostTotals::sum(&[] as &[Assignment]), CostTotals::default());
    }

    #[test]
    fn test_totals_sum_all_assignments() {
        let rows = [
            assignment(dec!(8), dec!(10), dec!(400), dec!(500)),
            assignment(dec!(5), dec!(6), dec!(250), dec!(300)),
            assignment(dec!(1.5), dec!(0), dec!(0), dec!(0)),
        ];

        let hours = HourTotals::sum(&rows);
        let costs = CostTotals::sum(&rows);

        assert_eq!(hours.planned, dec!(14.5));
        assert_eq!(hours.actual, dec!(16));
        assert_eq!(costs.planned, dec!(650));
        assert_eq!(costs.actual, dec!(800));
    }
}
