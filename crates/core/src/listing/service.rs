//! List row projection and navigation.

use super::types::{
    MirroredFigures, NavigationAction, NavigationFilter, PER_MONTH_ASSIGNMENT_LIST,
    PerMonthListRow,
};
use crate::assignment::Assignment;

/// Listing service.
pub struct ListingService;

impl ListingService {
    /// Refreshes `row` so its figures mirror `assignment`.
    #[must_use]
    pub fn mirror(mut row: PerMonthListRow, assignment: Option<&Assignment>) -> PerMonthListRow {
        row.figures = MirroredFigures::from_assignment(assignment);
        row
    }

    /// Builds the action that opens the per-month assignment list for the
    /// row's employee.
    #[must_use]
    pub fn open_employee_assignments(row: &PerMonthListRow) -> NavigationAction {
        NavigationAction {
            target: PER_MONTH_ASSIGNMENT_LIST.to_string(),
            filter: NavigationFilter {
                employee: row.employee_id,
            },
            default_employee: row.employee_id,
        }
    }
}
