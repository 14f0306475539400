//! Per-month list rows.
//!
//! Rows store only their links. Hours and costs are resolved through the
//! linked assignment every time a row is read, so they always match it.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::debug;
use uuid::Uuid;

use crate::entities::{
    employee_masters, month_masters, project_employee_assignments, project_masters,
    project_month_employee_rows,
};
use opcost_core::assignment::Assignment;
use opcost_core::listing::{ListingService, MirroredFigures, NavigationAction, PerMonthListRow};
use opcost_shared::AppError;
use opcost_shared::types::{AssignmentId, EmployeeId, ListRowId, MonthId, ProjectId};

/// Error types for list row operations.
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    /// Row not found.
    #[error("List row not found: {0}")]
    NotFound(ListRowId),

    /// Project not found.
    #[error("Project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// Month not found.
    #[error("Month not found: {0}")]
    MonthNotFound(MonthId),

    /// Employee not found.
    #[error("Employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    /// Linked assignment not found.
    #[error("Assignment not found: {0}")]
    AssignmentNotFound(AssignmentId),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ListingError> for AppError {
    fn from(err: ListingError) -> Self {
        let message = err.to_string();
        match err {
            ListingError::Database(_) => Self::Database(message),
            _ => Self::NotFound(message),
        }
    }
}

/// Input for creating a list row.
#[derive(Debug, Clone)]
pub struct CreateListRowInput {
    /// Project.
    pub project_id: ProjectId,
    /// Month master.
    pub month_id: MonthId,
    /// Employee, if any.
    pub employee_id: Option<EmployeeId>,
    /// Assignment whose figures the row mirrors.
    pub assignment_id: Option<AssignmentId>,
}

fn to_row(
    model: project_month_employee_rows::Model,
    assignment: Option<project_employee_assignments::Model>,
) -> PerMonthListRow {
    let assignment = assignment.map(Assignment::from);
    let row = PerMonthListRow {
        id: ListRowId::from_uuid(model.id),
        project_id: ProjectId::from_uuid(model.project_id),
        month_id: MonthId::from_uuid(model.month_id),
        employee_id: model.employee_id.map(EmployeeId::from_uuid),
        assignment_id: model.assignment_id.map(AssignmentId::from_uuid),
        figures: MirroredFigures::default(),
    };
    ListingService::mirror(row, assignment.as_ref())
}

/// List row repository.
#[derive(Debug, Clone)]
pub struct ListingRepository {
    db: DatabaseConnection,
}

impl ListingRepository {
    /// Creates a new listing repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a list row.
    ///
    /// # Errors
    ///
    /// Returns an error if the project, month, employee, or linked assignment
    /// does not exist, or the database operation fails.
    pub async fn create_row(
        &self,
        input: CreateListRowInput,
    ) -> Result<PerMonthListRow, ListingError> {
        project_masters::Entity::find_by_id(input.project_id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(ListingError::ProjectNotFound(input.project_id))?;
        month_masters::Entity::find_by_id(input.month_id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(ListingError::MonthNotFound(input.month_id))?;

        if let Some(employee_id) = input.employee_id {
            employee_masters::Entity::find_by_id(employee_id.into_inner())
                .one(&self.db)
                .await?
                .ok_or(ListingError::EmployeeNotFound(employee_id))?;
        }

        let assignment = match input.assignment_id {
            Some(id) => Some(
                project_employee_assignments::Entity::find_by_id(id.into_inner())
                    .one(&self.db)
                    .await?
                    .ok_or(ListingError::AssignmentNotFound(id))?,
            ),
            None => None,
        };

        let model = project_month_employee_rows::ActiveModel {
            id: Set(Uuid::new_v4()),
            project_id: Set(input.project_id.into_inner()),
            month_id: Set(input.month_id.into_inner()),
            employee_id: Set(input.employee_id.map(EmployeeId::into_inner)),
            assignment_id: Set(input.assignment_id.map(AssignmentId::into_inner)),
            created_at: Set(Utc::now().into()),
        }
        .insert(&self.db)
        .await?;

        debug!(row_id = %model.id, project_id = %input.project_id, "List row created");
        Ok(to_row(model, assignment))
    }

    /// Gets a list row with figures mirrored from its assignment.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the row does not exist.
    pub async fn get_row(&self, id: ListRowId) -> Result<PerMonthListRow, ListingError> {
        let (model, assignment) = project_month_employee_rows::Entity::find_by_id(id.into_inner())
            .find_also_related(project_employee_assignments::Entity)
            .one(&self.db)
            .await?
            .ok_or(ListingError::NotFound(id))?;

        Ok(to_row(model, assignment))
    }

    /// Lists the rows of a project for one month.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_rows(
        &self,
        project_id: ProjectId,
        month_id: MonthId,
    ) -> Result<Vec<PerMonthListRow>, ListingError> {
        let rows = project_month_employee_rows::Entity::find()
            .filter(project_month_employee_rows::Column::ProjectId.eq(project_id.into_inner()))
            .filter(project_month_employee_rows::Column::MonthId.eq(month_id.into_inner()))
            .order_by_asc(project_month_employee_rows::Column::CreatedAt)
            .find_also_related(project_employee_assignments::Entity)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(model, assignment)| to_row(model, assignment))
            .collect())
    }

    /// Loads a row and builds its "open employee assignments" action.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the row does not exist.
    pub async fn open_employee_assignments(
        &self,
        id: ListRowId,
    ) -> Result<NavigationAction, ListingError> {
        let row = self.get_row(id).await?;
        Ok(ListingService::open_employee_assignments(&row))
    }
}
