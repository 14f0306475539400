//! Monthly rollup repository.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use tracing::debug;
use uuid::Uuid;

use crate::entities::monthly_rollups;
use crate::unit_of_work::UnitOfWork;
use opcost_core::rollup::{MonthNumber, MonthSlots, MonthlyRollup, RollupAction, RollupPlanner};
use opcost_shared::types::{EmployeeId, MonthlyRollupId, ProjectId};

impl From<monthly_rollups::Model> for MonthlyRollup {
    fn from(model: monthly_rollups::Model) -> Self {
        Self {
            id: MonthlyRollupId::from_uuid(model.id),
            project_id: ProjectId::from_uuid(model.project_id),
            employee_id: EmployeeId::from_uuid(model.employee_id),
            slots: [
                model.month_01,
                model.month_02,
                model.month_03,
                model.month_04,
                model.month_05,
                model.month_06,
                model.month_07,
                model.month_08,
                model.month_09,
                model.month_10,
                model.month_11,
                model.month_12,
            ],
        }
    }
}

/// Monthly rollup repository.
#[derive(Debug, Clone)]
pub struct RollupRepository {
    db: DatabaseConnection,
}

impl RollupRepository {
    /// Creates a new rollup repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the rollup for a project and employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_rollup(
        &self,
        project_id: ProjectId,
        employee_id: EmployeeId,
    ) -> Result<Option<MonthlyRollup>, DbErr> {
        Ok(find_rollup(&self.db, project_id, employee_id)
            .await?
            .map(MonthlyRollup::from))
    }

    /// Counts rollup rows for a project and employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count_rollups(
        &self,
        project_id: ProjectId,
        employee_id: EmployeeId,
    ) -> Result<u64, DbErr> {
        monthly_rollups::Entity::find()
            .filter(monthly_rollups::Column::ProjectId.eq(project_id.into_inner()))
            .filter(monthly_rollups::Column::EmployeeId.eq(employee_id.into_inner()))
            .count(&self.db)
            .await
    }

    /// Creates the rollup row for a pair that has none yet.
    ///
    /// An existing row is left as it is, whatever `month` is; only the first
    /// assignment of a pair is reflected in its rollup. A row inserted by a
    /// concurrent writer after the lookup also counts as existing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn upsert_in(
        uow: &UnitOfWork,
        project_id: ProjectId,
        employee_id: EmployeeId,
        month: MonthNumber,
        hours_actual: Decimal,
    ) -> Result<RollupAction, DbErr> {
        let txn = uow.transaction();
        let existing = find_rollup(txn, project_id, employee_id)
            .await?
            .map(MonthlyRollup::from);

        let action = RollupPlanner::plan(existing.as_ref(), month, hours_actual);
        let action = apply_plan(txn, project_id, employee_id, action).await?;

        match &action {
            RollupAction::Create { .. } => {
                debug!(
                    %project_id,
                    %employee_id,
                    slot = %month.slot_name(),
                    %hours_actual,
                    "Created monthly rollup"
                );
            }
            RollupAction::Unchanged { rollup_id } => {
                debug!(
                    %rollup_id,
                    slot = %month.slot_name(),
                    "Monthly rollup already exists, left unchanged"
                );
            }
        }

        Ok(action)
    }
}

/// Persists a planned action. A `Create` that loses to a row inserted in the
/// meantime turns into `Unchanged` for that row.
async fn apply_plan<C: ConnectionTrait>(
    conn: &C,
    project_id: ProjectId,
    employee_id: EmployeeId,
    action: RollupAction,
) -> Result<RollupAction, DbErr> {
    let slots = match action {
        RollupAction::Create { slots } => slots,
        unchanged @ RollupAction::Unchanged { .. } => return Ok(unchanged),
    };

    if insert_rollup(conn, project_id, employee_id, &slots).await? {
        return Ok(RollupAction::Create { slots });
    }

    let existing = find_rollup(conn, project_id, employee_id)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("monthly rollup".to_string()))?;
    Ok(RollupAction::Unchanged {
        rollup_id: MonthlyRollupId::from_uuid(existing.id),
    })
}

async fn find_rollup<C: ConnectionTrait>(
    conn: &C,
    project_id: ProjectId,
    employee_id: EmployeeId,
) -> Result<Option<monthly_rollups::Model>, DbErr> {
    monthly_rollups::Entity::find()
        .filter(monthly_rollups::Column::ProjectId.eq(project_id.into_inner()))
        .filter(monthly_rollups::Column::EmployeeId.eq(employee_id.into_inner()))
        .one(conn)
        .await
}

/// Inserts a rollup row unless the pair already has one. Returns whether a
/// row was written.
async fn insert_rollup<C: ConnectionTrait>(
    conn: &C,
    project_id: ProjectId,
    employee_id: EmployeeId,
    slots: &MonthSlots,
) -> Result<bool, DbErr> {
    let model = monthly_rollups::ActiveModel {
        id: Set(Uuid::new_v4()),
        project_id: Set(project_id.into_inner()),
        employee_id: Set(employee_id.into_inner()),
        month_01: Set(slots[0]),
        month_02: Set(slots[1]),
        month_03: Set(slots[2]),
        month_04: Set(slots[3]),
        month_05: Set(slots[4]),
        month_06: Set(slots[5]),
        month_07: Set(slots[6]),
        month_08: Set(slots[7]),
        month_09: Set(slots[8]),
        month_10: Set(slots[9]),
        month_11: Set(slots[10]),
        month_12: Set(slots[11]),
        created_at: Set(Utc::now().into()),
    };

    let inserted = monthly_rollups::Entity::insert(model)
        .on_conflict(
            OnConflict::columns([
                monthly_rollups::Column::ProjectId,
                monthly_rollups::Column::EmployeeId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    Ok(inserted > 0)
}
