//! Reference master repository.
//!
//! Projects, employees, and years are retired rather than deleted. The
//! assignment lifecycle reads their status through the helpers at the
//! bottom of this module.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    Set, SqlErr,
};
use uuid::Uuid;

use super::assignment::AssignmentRepoError;
use crate::entities::{
    billing_classes, employee_masters, month_masters, project_masters,
    sea_orm_active_enums::ReferenceStatus, year_masters,
};
use opcost_core::assignment::AssignmentError;
use opcost_core::reference::{ReferenceCheck, ReferenceKind};
use opcost_core::rollup::{MonthNumber, MonthOutOfRange};
use opcost_shared::AppError;
use opcost_shared::types::{BillingClassId, EmployeeId, MonthId, ProjectId, YearId};

/// Error types for reference master operations.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    /// Master not found.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of master.
        kind: ReferenceKind,
        /// ID that was looked up.
        id: Uuid,
    },

    /// Billing class not found.
    #[error("Billing class not found: {0}")]
    BillingClassNotFound(BillingClassId),

    /// Code, year, or month number already used by another master.
    #[error("Duplicate master key: {0}")]
    Duplicate(String),

    /// Month number outside 1..=12.
    #[error(transparent)]
    InvalidMonth(#[from] MonthOutOfRange),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ReferenceError> for AppError {
    fn from(err: ReferenceError) -> Self {
        let message = err.to_string();
        match err {
            ReferenceError::NotFound { .. } | ReferenceError::BillingClassNotFound(_) => {
                Self::NotFound(message)
            }
            ReferenceError::Duplicate(_) => Self::Conflict(message),
            ReferenceError::InvalidMonth(_) => Self::Validation(message),
            ReferenceError::Database(_) => Self::Database(message),
        }
    }
}

fn map_insert_err(err: DbErr, key: impl Into<String>) -> ReferenceError {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        ReferenceError::Duplicate(key.into())
    } else {
        ReferenceError::Database(err)
    }
}

/// Reference master repository.
#[derive(Debug, Clone)]
pub struct ReferenceRepository {
    db: DatabaseConnection,
}

impl ReferenceRepository {
    /// Creates a new reference repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active project master.
    ///
    /// # Errors
    ///
    /// Returns `Duplicate` if the code is taken.
    pub async fn create_project(
        &self,
        code: &str,
        name: &str,
    ) -> Result<project_masters::Model, ReferenceError> {
        let now = Utc::now().into();
        project_masters::ActiveModel {
            id: Set(Uuid::new_v4()),
            code: Set(code.to_string()),
            name: Set(name.to_string()),
            status: Set(ReferenceStatus::Active),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_insert_err(e, format!("project {code}")))
    }

    /// Creates a billing class. `unit_price` may be left unset.
    ///
    /// # Errors
    ///
    /// Returns `Duplicate` if the code is taken.
    pub async fn create_billing_class(
        &self,
        code: &str,
        name: &str,
        unit_price: Option<Decimal>,
    ) -> Result<billing_classes::Model, ReferenceError> {
        let now = Utc::now().into();
        billing_classes::ActiveModel {
            id: Set(Uuid::new_v4()),
            code: Set(code.to_string()),
            name: Set(name.to_string()),
            unit_price: Set(unit_price),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_insert_err(e, format!("billing class {code}")))
    }

    /// Creates an active employee master, optionally in a billing class.
    ///
    /// # Errors
    ///
    /// Returns `BillingClassNotFound` if the class does not exist, or
    /// `Duplicate` if the code is taken.
    pub async fn create_employee(
        &self,
        code: &str,
        name: &str,
        billing_class_id: Option<BillingClassId>,
    ) -> Result<employee_masters::Model, ReferenceError> {
        if let Some(class_id) = billing_class_id {
            self.ensure_billing_class(class_id).await?;
        }

        let now = Utc::now().into();
        employee_masters::ActiveModel {
            id: Set(Uuid::new_v4()),
            code: Set(code.to_string()),
            name: Set(name.to_string()),
            billing_class_id: Set(billing_class_id.map(BillingClassId::into_inner)),
            status: Set(ReferenceStatus::Active),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_insert_err(e, format!("employee {code}")))
    }

    /// Creates an active year master.
    ///
    /// # Errors
    ///
    /// Returns `Duplicate` if the year already exists.
    pub async fn create_year(&self, year: i32) -> Result<year_masters::Model, ReferenceError> {
        let now = Utc::now().into();
        year_masters::ActiveModel {
            id: Set(Uuid::new_v4()),
            year: Set(year),
            status: Set(ReferenceStatus::Active),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_insert_err(e, format!("year {year}")))
    }

    /// Creates a month master.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` outside 1..=12, or `Duplicate` if the month
    /// already exists.
    pub async fn create_month(
        &self,
        month: i16,
        name: &str,
    ) -> Result<month_masters::Model, ReferenceError> {
        MonthNumber::try_from(month)?;

        let now = Utc::now().into();
        month_masters::ActiveModel {
            id: Set(Uuid::new_v4()),
            month: Set(month),
            name: Set(name.to_string()),
            status: Set(ReferenceStatus::Active),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(|e| map_insert_err(e, format!("month {month}")))
    }

    /// Retires a project. Existing assignments keep referencing it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the project does not exist.
    pub async fn retire_project(
        &self,
        id: ProjectId,
    ) -> Result<project_masters::Model, ReferenceError> {
        let project = project_masters::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(ReferenceError::NotFound {
                kind: ReferenceKind::Project,
                id: id.into_inner(),
            })?;

        let mut active = project.into_active_model();
        active.status = Set(ReferenceStatus::Retired);
        active.updated_at = Set(Utc::now().into());
        Ok(active.update(&self.db).await?)
    }

    /// Retires an employee.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the employee does not exist.
    pub async fn retire_employee(
        &self,
        id: EmployeeId,
    ) -> Result<employee_masters::Model, ReferenceError> {
        let employee = self.get_employee(id).await?;

        let mut active = employee.into_active_model();
        active.status = Set(ReferenceStatus::Retired);
        active.updated_at = Set(Utc::now().into());
        Ok(active.update(&self.db).await?)
    }

    /// Retires a year.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the year does not exist.
    pub async fn retire_year(&self, id: YearId) -> Result<year_masters::Model, ReferenceError> {
        let year = year_masters::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(ReferenceError::NotFound {
                kind: ReferenceKind::Year,
                id: id.into_inner(),
            })?;

        let mut active = year.into_active_model();
        active.status = Set(ReferenceStatus::Retired);
        active.updated_at = Set(Utc::now().into());
        Ok(active.update(&self.db).await?)
    }

    /// Retires a month. Assignments may still reference it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the month does not exist.
    pub async fn retire_month(&self, id: MonthId) -> Result<month_masters::Model, ReferenceError> {
        let month = month_masters::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(ReferenceError::NotFound {
                kind: ReferenceKind::Month,
                id: id.into_inner(),
            })?;

        let mut active = month.into_active_model();
        active.status = Set(ReferenceStatus::Retired);
        active.updated_at = Set(Utc::now().into());
        Ok(active.update(&self.db).await?)
    }

    /// Changes (or clears) the unit price of a billing class.
    ///
    /// Stored assignment costs are not touched; they pick up the new price
    /// the next time the assignment is written.
    ///
    /// # Errors
    ///
    /// Returns `BillingClassNotFound` if the class does not exist.
    pub async fn set_unit_price(
        &self,
        id: BillingClassId,
        unit_price: Option<Decimal>,
    ) -> Result<billing_classes::Model, ReferenceError> {
        let class = self.ensure_billing_class(id).await?;

        let mut active = class.into_active_model();
        active.unit_price = Set(unit_price);
        active.updated_at = Set(Utc::now().into());
        Ok(active.update(&self.db).await?)
    }

    /// Moves an employee into a billing class, or out of any class.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `BillingClassNotFound`.
    pub async fn set_employee_class(
        &self,
        id: EmployeeId,
        billing_class_id: Option<BillingClassId>,
    ) -> Result<employee_masters::Model, ReferenceError> {
        let employee = self.get_employee(id).await?;
        if let Some(class_id) = billing_class_id {
            self.ensure_billing_class(class_id).await?;
        }

        let mut active = employee.into_active_model();
        active.billing_class_id = Set(billing_class_id.map(BillingClassId::into_inner));
        active.updated_at = Set(Utc::now().into());
        Ok(active.update(&self.db).await?)
    }

    /// Gets an employee master by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the employee does not exist.
    pub async fn get_employee(
        &self,
        id: EmployeeId,
    ) -> Result<employee_masters::Model, ReferenceError> {
        employee_masters::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(ReferenceError::NotFound {
                kind: ReferenceKind::Employee,
                id: id.into_inner(),
            })
    }

    async fn ensure_billing_class(
        &self,
        id: BillingClassId,
    ) -> Result<billing_classes::Model, ReferenceError> {
        billing_classes::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(ReferenceError::BillingClassNotFound(id))
    }
}

// ============================================================================
// Lookups used inside a unit-of-work
// ============================================================================

/// Loads the project, employee, and year masters and returns their status.
///
/// # Errors
///
/// Returns `AssignmentError::ReferenceNotFound` for a missing master.
pub(crate) async fn load_reference_checks<C: ConnectionTrait>(
    conn: &C,
    project_id: ProjectId,
    employee_id: EmployeeId,
    year_id: YearId,
) -> Result<[ReferenceCheck; 3], AssignmentRepoError> {
    let project = project_masters::Entity::find_by_id(project_id.into_inner())
        .one(conn)
        .await?
        .ok_or(AssignmentError::ReferenceNotFound {
            kind: ReferenceKind::Project,
            id: project_id.into_inner(),
        })?;

    let employee = employee_masters::Entity::find_by_id(employee_id.into_inner())
        .one(conn)
        .await?
        .ok_or(AssignmentError::ReferenceNotFound {
            kind: ReferenceKind::Employee,
            id: employee_id.into_inner(),
        })?;

    let year = year_masters::Entity::find_by_id(year_id.into_inner())
        .one(conn)
        .await?
        .ok_or(AssignmentError::ReferenceNotFound {
            kind: ReferenceKind::Year,
            id: year_id.into_inner(),
        })?;

    Ok([
        ReferenceCheck::new(ReferenceKind::Project, project.id, project.status.into()),
        ReferenceCheck::new(ReferenceKind::Employee, employee.id, employee.status.into()),
        ReferenceCheck::new(ReferenceKind::Year, year.id, year.status.into()),
    ])
}

/// Resolves a month master to its calendar month number.
///
/// # Errors
///
/// Returns `ReferenceNotFound` for a missing master, or `InvalidMonth` if the
/// stored number is out of range.
pub(crate) async fn load_month_number<C: ConnectionTrait>(
    conn: &C,
    month_id: MonthId,
) -> Result<MonthNumber, AssignmentRepoError> {
    let month = month_masters::Entity::find_by_id(month_id.into_inner())
        .one(conn)
        .await?
        .ok_or(AssignmentError::ReferenceNotFound {
            kind: ReferenceKind::Month,
            id: month_id.into_inner(),
        })?;

    Ok(MonthNumber::try_from(month.month).map_err(AssignmentError::from)?)
}

/// Looks up the unit price of the employee's billing class.
///
/// Returns `None` when the employee has no class or the class has no price.
pub(crate) async fn unit_price_for_employee<C: ConnectionTrait>(
    conn: &C,
    employee_id: EmployeeId,
) -> Result<Option<Decimal>, DbErr> {
    let found = employee_masters::Entity::find_by_id(employee_id.into_inner())
        .find_also_related(billing_classes::Entity)
        .one(conn)
        .await?;

    Ok(found
        .and_then(|(_, class)| class)
        .and_then(|class| class.unit_price))
}
