//! Assignment data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use opcost_shared::types::{AssignmentId, EmployeeId, MonthId, ProjectId, YearId};

/// A project employee assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assignment ID.
    pub id: AssignmentId,
    /// Project worked on.
    pub project_id: ProjectId,
    /// Employee doing the work.
    pub employee_id: EmployeeId,
    /// Year master.
    pub year_id: YearId,
    /// Month master.
    pub month_id: MonthId,
    /// Planned operating hours.
    pub hours_planned: Decimal,
    /// Actual operating hours.
    pub hours_actual: Decimal,
    /// Unit price times planned hours.
    pub planned_cost: Decimal,
    /// Unit price times actual hours.
    pub actual_cost: Decimal,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Assignment {
    /// Returns the derived costs currently stored on the assignment.
    #[must_use]
    pub const fn costs(&self) -> AssignmentCosts {
        AssignmentCosts {
            planned_cost: self.planned_cost,
            actual_cost: self.actual_cost,
        }
    }
}

/// Derived planned and actual costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssignmentCosts {
    /// Planned cost.
    pub planned_cost: Decimal,
    /// Actual cost.
    pub actual_cost: Decimal,
}

/// Input for creating an assignment.
#[derive(Debug, Clone)]
pub struct CreateAssignmentInput {
    /// Project ID.
    pub project_id: ProjectId,
    /// Employee ID.
    pub employee_id: EmployeeId,
    /// Year master ID.
    pub year_id: YearId,
    /// Month master ID.
    pub month_id: MonthId,
    /// Planned hours.
    pub hours_planned: Decimal,
    /// Actual hours.
    pub hours_actual: Decimal,
}

/// Writable assignment fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentField {
    /// `project_id`
    Project,
    /// `employee_id`
    Employee,
    /// `year_id`
    Year,
    /// `month_id`
    Month,
    /// `hours_planned`
    HoursPlanned,
    /// `hours_actual`
    HoursActual,
}

impl AssignmentField {
    /// Returns true if changing this field re-checks reference status.
    #[must_use]
    pub const fn requires_reference_check(self) -> bool {
        matches!(self, Self::Project | Self::Employee | Self::Year)
    }

    /// Returns true if the stored costs depend on this field.
    #[must_use]
    pub const fn affects_costs(self) -> bool {
        matches!(self, Self::Employee | Self::HoursPlanned | Self::HoursActual)
    }
}

impl fmt::Display for AssignmentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Project => "project_id",
            Self::Employee => "employee_id",
            Self::Year => "year_id",
            Self::Month => "month_id",
            Self::HoursPlanned => "hours_planned",
            Self::HoursActual => "hours_actual",
        };
        f.write_str(name)
    }
}

/// Partial update of an assignment. `None` leaves the field as it is.
#[derive(Debug, Clone, Default)]
pub struct UpdateAssignmentInput {
    /// New project.
    pub project_id: Option<ProjectId>,
    /// New employee.
    pub employee_id: Option<EmployeeId>,
    /// New year.
    pub year_id: Option<YearId>,
    /// New month.
    pub month_id: Option<MonthId>,
    /// New planned hours.
    pub hours_planned: Option<Decimal>,
    /// New actual hours.
    pub hours_actual: Option<Decimal>,
}

impl UpdateAssignmentInput {
    /// Returns the fields whose new value differs from `current`.
    #[must_use]
    pub fn changed_fields(&self, current: &Assignment) -> Vec<AssignmentField> {
        fn differs<T: PartialEq>(new: Option<&T>, old: &T) -> bool {
            new.is_some_and(|value| value != old)
        }

        let candidates = [
            (
                AssignmentField::Project,
                differs(self.project_id.as_ref(), &current.project_id),
            ),
            (
                AssignmentField::Employee,
                differs(self.employee_id.as_ref(), &current.employee_id),
            ),
            (
                AssignmentField::Year,
                differs(self.year_id.as_ref(), &current.year_id),
            ),
            (
                AssignmentField::Month,
                differs(self.month_id.as_ref(), &current.month_id),
            ),
            (
                AssignmentField::HoursPlanned,
                differs(self.hours_planned.as_ref(), &current.hours_planned),
            ),
            (
                AssignmentField::HoursActual,
                differs(self.hours_actual.as_ref(), &current.hours_actual),
            ),
        ];

        candidates
            .into_iter()
            .filter_map(|(field, changed)| changed.then_some(field))
            .collect()
    }

    /// Returns the assignment as it will look once this update is applied.
    ///
    /// Costs are carried over unchanged; callers recompute them afterwards.
    #[must_use]
    pub fn apply_to(&self, current: &Assignment) -> Assignment {
        Assignment {
            project_id: self.project_id.unwrap_or(current.project_id),
            employee_id: self.employee_id.unwrap_or(current.employee_id),
            year_id: self.year_id.unwrap_or(current.year_id),
            month_id: self.month_id.unwrap_or(current.month_id),
            hours_planned: self.hours_planned.unwrap_or(current.hours_planned),
            hours_actual: self.hours_actual.unwrap_or(current.hours_actual),
            ..current.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_assignment() -> Assignment {
        Assignment {
            id: AssignmentId::new(),
            project_id: ProjectId::new(),
            employee_id: EmployeeId::new(),
            year_id: YearId::new(),
            month_id: MonthId::new(),
            hours_planned: dec!(8),
            hours_actual: dec!(10),
            planned_cost: dec!(400),
            actual_cost: dec!(500),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_update_changes_nothing() {
        let current = sample_assignment();
        assert!(
            UpdateAssignmentInput::default()
                .changed_fields(&current)
                .is_empty()
        );
    }

    #[test]
    fn test_same_values_are_not_changes() {
        let current = sample_assignment();
        let update = UpdateAssignmentInput {
            project_id: Some(current.project_id),
            hours_planned: Some(dec!(8.00)),
            ..Default::default()
        };
        assert!(update.changed_fields(&current).is_empty());
    }

    #[test]
    fn test_changed_fields_in_declaration_order() {
        let current = sample_assignment();
        let update = UpdateAssignmentInput {
            hours_actual: Some(dec!(12)),
            employee_id: Some(EmployeeId::new()),
            ..Default::default()
        };
        assert_eq!(
            update.changed_fields(&current),
            vec![AssignmentField::Employee, AssignmentField::HoursActual]
        );
    }

    #[test]
    fn test_field_classification() {
        assert!(AssignmentField::Project.requires_reference_check());
        assert!(AssignmentField::Employee.requires_reference_check());
        assert!(AssignmentField::Year.requires_reference_check());
        assert!(!AssignmentField::Month.requires_reference_check());
        assert!(!AssignmentField::HoursActual.requires_reference_check());

        assert!(AssignmentField::Employee.affects_costs());
        assert!(AssignmentField::HoursPlanned.affects_costs());
        assert!(!AssignmentField::Project.affects_costs());
    }

    #[test]
    fn test_apply_to_keeps_identity_and_costs() {
        let current = sample_assignment();
        let new_project = ProjectId::new();
        let update = UpdateAssignmentInput {
            project_id: Some(new_project),
            hours_actual: Some(dec!(3)),
            ..Default::default()
        };

        let updated = update.apply_to(&current);

        assert_eq!(updated.id, current.id);
        assert_eq!(updated.project_id, new_project);
        assert_eq!(updated.employee_id, current.employee_id);
        assert_eq!(updated.hours_actual, dec!(3));
        assert_eq!(updated.costs(), current.costs());
    }
}
