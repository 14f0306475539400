//! List row and navigation types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;
use opcost_shared::types::{AssignmentId, EmployeeId, ListRowId, MonthId, ProjectId};

/// Identifier of the per-month assignment list view.
pub const PER_MONTH_ASSIGNMENT_LIST: &str = "per-month-assignment-list";

/// Hours and costs mirrored from an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MirroredFigures {
    /// Planned hours.
    pub hours_planned: Decimal,
    /// Actual hours.
    pub hours_actual: Decimal,
    /// Planned cost.
    pub planned_cost: Decimal,
    /// Actual cost.
    pub actual_cost: Decimal,
}

impl MirroredFigures {
    /// Copies the figures of `assignment`; zeros when there is none.
    #[must_use]
    pub fn from_assignment(assignment: Option<&Assignment>) -> Self {
        assignment.map_or_else(Self::default, |a| Self {
            hours_planned: a.hours_planned,
            hours_actual: a.hours_actual,
            planned_cost: a.planned_cost,
            actual_cost: a.actual_cost,
        })
    }
}

/// A per-month list row with its mirrored figures resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerMonthListRow {
    /// Row ID.
    pub id: ListRowId,
    /// Project.
    pub project_id: ProjectId,
    /// Month master.
    pub month_id: MonthId,
    /// Employee, if the row is bound to one.
    pub employee_id: Option<EmployeeId>,
    /// Linked assignment.
    pub assignment_id: Option<AssignmentId>,
    /// Figures read through the linked assignment.
    #[serde(flatten)]
    pub figures: MirroredFigures,
}

/// Filter part of a navigation action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationFilter {
    /// Restrict the target list to this employee.
    pub employee: Option<EmployeeId>,
}

/// Descriptor for opening another list from a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationAction {
    /// Target list identifier.
    pub target: String,
    /// Filter applied to the target list.
    pub filter: NavigationFilter,
    /// Employee pre-filled when creating rows from the target list.
    pub default_employee: Option<EmployeeId>,
}
