//! Project list repository and the assignment cascade.
//!
//! Several project list rows may point at the same project. Whenever an
//! assignment of that project is created or updated, every one of them
//! recomputes its hour totals and then its cost totals from the current
//! assignments.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Set,
};
use tracing::debug;
use uuid::Uuid;

use crate::entities::{project_employee_assignments, project_lists, project_masters};
use crate::unit_of_work::UnitOfWork;
use opcost_core::assignment::Assignment;
use opcost_core::project_list::{CostTotals, HourTotals};
use opcost_shared::AppError;
use opcost_shared::types::{ProjectId, ProjectListId};

/// Error types for project list operations.
#[derive(Debug, thiserror::Error)]
pub enum ProjectListError {
    /// Project list not found.
    #[error("Project list not found: {0}")]
    NotFound(ProjectListId),

    /// Project not found.
    #[error("Project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ProjectListError> for AppError {
    fn from(err: ProjectListError) -> Self {
        let message = err.to_string();
        match err {
            ProjectListError::NotFound(_) | ProjectListError::ProjectNotFound(_) => {
                Self::NotFound(message)
            }
            ProjectListError::Database(_) => Self::Database(message),
        }
    }
}

/// Project list repository.
#[derive(Debug, Clone)]
pub struct ProjectListRepository {
    db: DatabaseConnection,
}

impl ProjectListRepository {
    /// Creates a new project list repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a project list row with totals computed from the project's
    /// current assignments.
    ///
    /// # Errors
    ///
    /// Returns `ProjectNotFound` if the project does not exist.
    pub async fn create_project_list(
        &self,
        project_id: ProjectId,
        name: &str,
    ) -> Result<project_lists::Model, ProjectListError> {
        project_masters::Entity::find_by_id(project_id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(ProjectListError::ProjectNotFound(project_id))?;

        let now = Utc::now().into();
        let row = project_lists::ActiveModel {
            id: Set(Uuid::new_v4()),
            project_id: Set(project_id.into_inner()),
            name: Set(name.to_string()),
            total_hours_planned: Set(Decimal::ZERO),
            total_hours_actual: Set(Decimal::ZERO),
            total_planned_cost: Set(Decimal::ZERO),
            total_actual_cost: Set(Decimal::ZERO),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        let row = recompute_hours(&self.db, row).await?;
        Ok(recompute_costs(&self.db, row).await?)
    }

    /// Gets a project list row by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the row does not exist.
    pub async fn get_project_list(
        &self,
        id: ProjectListId,
    ) -> Result<project_lists::Model, ProjectListError> {
        project_lists::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(ProjectListError::NotFound(id))
    }

    /// Lists the project list rows of a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<project_lists::Model>, DbErr> {
        find_for_project(&self.db, project_id).await
    }

    /// Recomputes hour and cost totals of every project list row of
    /// `project_id`. Returns the number of rows refreshed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn cascade_in(uow: &UnitOfWork, project_id: ProjectId) -> Result<usize, DbErr> {
        let txn = uow.transaction();
        let rows = find_for_project(txn, project_id).await?;
        let count = rows.len();

        for row in rows {
            let row = Self::recompute_hours_in(uow, row).await?;
            Self::recompute_costs_in(uow, row).await?;
        }

        debug!(%project_id, rows = count, "Cascaded assignment change to project lists");
        Ok(count)
    }

    /// Recomputes the hour totals of one project list row.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn recompute_hours_in(
        uow: &UnitOfWork,
        row: project_lists::Model,
    ) -> Result<project_lists::Model, DbErr> {
        recompute_hours(uow.transaction(), row).await
    }

    /// Recomputes the cost totals of one project list row.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn recompute_costs_in(
        uow: &UnitOfWork,
        row: project_lists::Model,
    ) -> Result<project_lists::Model, DbErr> {
        recompute_costs(uow.transaction(), row).await
    }
}

async fn find_for_project<C: ConnectionTrait>(
    conn: &C,
    project_id: ProjectId,
) -> Result<Vec<project_lists::Model>, DbErr> {
    project_lists::Entity::find()
        .filter(project_lists::Column::ProjectId.eq(project_id.into_inner()))
        .order_by_asc(project_lists::Column::CreatedAt)
        .all(conn)
        .await
}

async fn project_assignments<C: ConnectionTrait>(
    conn: &C,
    project_id: Uuid,
) -> Result<Vec<Assignment>, DbErr> {
    let models = project_employee_assignments::Entity::find()
        .filter(project_employee_assignments::Column::ProjectId.eq(project_id))
        .all(conn)
        .await?;
    Ok(models.into_iter().map(Assignment::from).collect())
}

async fn recompute_hours<C: ConnectionTrait>(
    conn: &C,
    row: project_lists::Model,
) -> Result<project_lists::Model, DbErr> {
    let assignments = project_assignments(conn, row.project_id).await?;
    let totals = HourTotals::sum(&assignments);

    let mut active = row.into_active_model();
    active.total_hours_planned = Set(totals.planned);
    active.total_hours_actual = Set(totals.actual);
    active.updated_at = Set(Utc::now().into());
    active.update(conn).await
}

async fn recompute_costs<C: ConnectionTrait>(
    conn: &C,
    row: project_lists::Model,
) -> Result<project_lists::Model, DbErr> {
    let assignments = project_assignments(conn, row.project_id).await?;
    let totals = CostTotals::sum(&assignments);

    let mut active = row.into_active_model();
    active.total_planned_cost = Set(totals.planned);
    active.total_actual_cost = Set(totals.actual);
    active.updated_at = Set(Utc::now().into());
    active.update(conn).await
}
