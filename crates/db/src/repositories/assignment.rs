//! Assignment repository: the create/update lifecycle.
//!
//! A create runs these steps inside one unit-of-work:
//! 1. validate that project, employee, and year are not retired
//! 2. insert the assignment (the unique index rejects duplicates)
//! 3. create the monthly rollup if the pair has none
//! 4. recompute planned and actual costs
//! 5. cascade to the project list rows of the project
//!
//! An update re-validates references when project, employee, or year
//! change, writes the changed fields, recomputes costs when a cost input
//! changed, and runs the same cascade.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Set, SqlErr,
};
use tracing::{info, warn};
use uuid::Uuid;

use super::project_list::ProjectListRepository;
use super::reference::{load_month_number, load_reference_checks, unit_price_for_employee};
use super::rollup::RollupRepository;
use crate::entities::project_employee_assignments;
use crate::unit_of_work::UnitOfWork;
use opcost_core::assignment::{
    Assignment, AssignmentError, AssignmentField, AssignmentService, CreateAssignmentInput,
    UpdateAssignmentInput,
};
use opcost_shared::AppError;
use opcost_shared::types::{AssignmentId, EmployeeId, MonthId, ProjectId, YearId};

/// Error types for assignment repository operations.
#[derive(Debug, thiserror::Error)]
pub enum AssignmentRepoError {
    /// Business rule violation.
    #[error(transparent)]
    Assignment(#[from] AssignmentError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<AssignmentRepoError> for AppError {
    fn from(err: AssignmentRepoError) -> Self {
        match err {
            AssignmentRepoError::Assignment(inner) => inner.into(),
            AssignmentRepoError::Database(db) => Self::Database(db.to_string()),
        }
    }
}

/// Maps a write failure, turning a unique index violation into the domain error.
fn map_write_err(err: DbErr) -> AssignmentRepoError {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        AssignmentError::UniqueConstraintViolation.into()
    } else {
        AssignmentRepoError::Database(err)
    }
}

impl From<project_employee_assignments::Model> for Assignment {
    fn from(model: project_employee_assignments::Model) -> Self {
        Self {
            id: AssignmentId::from_uuid(model.id),
            project_id: ProjectId::from_uuid(model.project_id),
            employee_id: EmployeeId::from_uuid(model.employee_id),
            year_id: YearId::from_uuid(model.year_id),
            month_id: MonthId::from_uuid(model.month_id),
            hours_planned: model.hours_planned,
            hours_actual: model.hours_actual,
            planned_cost: model.planned_cost,
            actual_cost: model.actual_cost,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

/// Filter for listing assignments.
#[derive(Debug, Clone, Default)]
pub struct AssignmentFilter {
    /// Filter by project.
    pub project_id: Option<ProjectId>,
    /// Filter by employee.
    pub employee_id: Option<EmployeeId>,
    /// Filter by year.
    pub year_id: Option<YearId>,
    /// Filter by month.
    pub month_id: Option<MonthId>,
}

/// Assignment repository.
#[derive(Debug, Clone)]
pub struct AssignmentRepository {
    db: DatabaseConnection,
}

impl AssignmentRepository {
    /// Creates a new assignment repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an assignment in its own unit-of-work.
    ///
    /// # Errors
    ///
    /// See [`Self::create_in`]. Nothing is persisted on error.
    pub async fn create_assignment(
        &self,
        input: CreateAssignmentInput,
    ) -> Result<Assignment, AssignmentRepoError> {
        let uow = UnitOfWork::begin(&self.db).await?;
        let result = Self::create_in(&uow, input).await;
        uow.finish(result).await
    }

    /// Creates an assignment inside `uow`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A referenced master does not exist
    /// - Project, employee, or year is retired
    /// - An assignment already exists for the same project, employee, year, and month
    /// - Database operation fails
    pub async fn create_in(
        uow: &UnitOfWork,
        input: CreateAssignmentInput,
    ) -> Result<Assignment, AssignmentRepoError> {
        let txn = uow.transaction();

        let checks =
            load_reference_checks(txn, input.project_id, input.employee_id, input.year_id).await?;
        if let Err(err) = AssignmentService::validate_references(&checks) {
            warn!(
                project_id = %input.project_id,
                employee_id = %input.employee_id,
                error = %err,
                "Assignment rejected"
            );
            return Err(err.into());
        }
        let month = load_month_number(txn, input.month_id).await?;

        let now = Utc::now().into();
        let model = project_employee_assignments::ActiveModel {
            id: Set(Uuid::new_v4()),
            project_id: Set(input.project_id.into_inner()),
            employee_id: Set(input.employee_id.into_inner()),
            year_id: Set(input.year_id.into_inner()),
            month_id: Set(input.month_id.into_inner()),
            hours_planned: Set(input.hours_planned),
            hours_actual: Set(input.hours_actual),
            planned_cost: Set(rust_decimal::Decimal::ZERO),
            actual_cost: Set(rust_decimal::Decimal::ZERO),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(txn)
        .await
        .map_err(map_write_err)?;

        RollupRepository::upsert_in(
            uow,
            input.project_id,
            input.employee_id,
            month,
            input.hours_actual,
        )
        .await?;

        let model = recompute_costs(txn, model).await?;
        ProjectListRepository::cascade_in(uow, input.project_id).await?;

        let assignment = Assignment::from(model);
        info!(
            assignment_id = %assignment.id,
            project_id = %assignment.project_id,
            employee_id = %assignment.employee_id,
            month = %month,
            planned_cost = %assignment.planned_cost,
            actual_cost = %assignment.actual_cost,
            "Assignment created"
        );
        Ok(assignment)
    }

    /// Updates an assignment in its own unit-of-work.
    ///
    /// # Errors
    ///
    /// See [`Self::update_in`]. Nothing is persisted on error.
    pub async fn update_assignment(
        &self,
        id: AssignmentId,
        changes: UpdateAssignmentInput,
    ) -> Result<Assignment, AssignmentRepoError> {
        let uow = UnitOfWork::begin(&self.db).await?;
        let result = Self::update_in(&uow, id, changes).await;
        uow.finish(result).await
    }

    /// Updates an assignment inside `uow`.
    ///
    /// Fields equal to their stored value are ignored. If nothing changes,
    /// the stored assignment is returned without a write.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Assignment or a newly referenced master does not exist
    /// - Project, employee, or year changed and one of them is retired
    /// - The new combination collides with another assignment
    /// - Database operation fails
    pub async fn update_in(
        uow: &UnitOfWork,
        id: AssignmentId,
        changes: UpdateAssignmentInput,
    ) -> Result<Assignment, AssignmentRepoError> {
        let txn = uow.transaction();

        let current_model = project_employee_assignments::Entity::find_by_id(id.into_inner())
            .one(txn)
            .await?
            .ok_or(AssignmentError::NotFound(id))?;
        let current = Assignment::from(current_model.clone());

        let changed = changes.changed_fields(&current);
        if changed.is_empty() {
            return Ok(current);
        }

        let target = changes.apply_to(&current);

        if AssignmentService::needs_reference_check(&changed) {
            let checks =
                load_reference_checks(txn, target.project_id, target.employee_id, target.year_id)
                    .await?;
            if let Err(err) = AssignmentService::validate_references(&checks) {
                warn!(assignment_id = %id, error = %err, "Assignment update rejected");
                return Err(err.into());
            }
        }
        if changed.contains(&AssignmentField::Month) {
            load_month_number(txn, target.month_id).await?;
        }

        let mut active = current_model.into_active_model();
        for field in &changed {
            match field {
                AssignmentField::Project => {
                    active.project_id = Set(target.project_id.into_inner());
                }
                AssignmentField::Employee => {
                    active.employee_id = Set(target.employee_id.into_inner());
                }
                AssignmentField::Year => active.year_id = Set(target.year_id.into_inner()),
                AssignmentField::Month => active.month_id = Set(target.month_id.into_inner()),
                AssignmentField::HoursPlanned => active.hours_planned = Set(target.hours_planned),
                AssignmentField::HoursActual => active.hours_actual = Set(target.hours_actual),
            }
        }
        active.updated_at = Set(Utc::now().into());
        let mut model = active.update(txn).await.map_err(map_write_err)?;

        if AssignmentService::needs_cost_recompute(&changed) {
            model = recompute_costs(txn, model).await?;
        }

        ProjectListRepository::cascade_in(uow, target.project_id).await?;
        if changed.contains(&AssignmentField::Project) {
            ProjectListRepository::cascade_in(uow, current.project_id).await?;
        }

        let assignment = Assignment::from(model);
        info!(
            assignment_id = %assignment.id,
            changed = ?changed,
            planned_cost = %assignment.planned_cost,
            actual_cost = %assignment.actual_cost,
            "Assignment updated"
        );
        Ok(assignment)
    }

    /// Gets an assignment by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the assignment does not exist.
    pub async fn get_assignment(&self, id: AssignmentId) -> Result<Assignment, AssignmentRepoError> {
        project_employee_assignments::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .map(Assignment::from)
            .ok_or_else(|| AssignmentError::NotFound(id).into())
    }

    /// Lists assignments matching `filter`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_assignments(
        &self,
        filter: AssignmentFilter,
    ) -> Result<Vec<Assignment>, DbErr> {
        let mut query = project_employee_assignments::Entity::find();

        if let Some(project_id) = filter.project_id {
            query = query
                .filter(project_employee_assignments::Column::ProjectId.eq(project_id.into_inner()));
        }
        if let Some(employee_id) = filter.employee_id {
            query = query.filter(
                project_employee_assignments::Column::EmployeeId.eq(employee_id.into_inner()),
            );
        }
        if let Some(year_id) = filter.year_id {
            query =
                query.filter(project_employee_assignments::Column::YearId.eq(year_id.into_inner()));
        }
        if let Some(month_id) = filter.month_id {
            query = query
                .filter(project_employee_assignments::Column::MonthId.eq(month_id.into_inner()));
        }

        let models = query
            .order_by_asc(project_employee_assignments::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Assignment::from).collect())
    }
}

/// Recomputes planned and actual costs from the employee's current unit
/// price and persists them.
async fn recompute_costs<C: ConnectionTrait>(
    conn: &C,
    model: project_employee_assignments::Model,
) -> Result<project_employee_assignments::Model, DbErr> {
    let unit_price =
        unit_price_for_employee(conn, EmployeeId::from_uuid(model.employee_id)).await?;
    let costs =
        AssignmentService::compute_costs(unit_price, model.hours_planned, model.hours_actual);

    let mut active = model.into_active_model();
    active.planned_cost = Set(costs.planned_cost);
    active.actual_cost = Set(costs.actual_cost);
    active.update(conn).await
}
