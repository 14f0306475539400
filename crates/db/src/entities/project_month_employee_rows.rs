//! `SeaORM` Entity for project_month_employee_rows table.
//!
//! Hours and costs are not columns here; they are read through
//! `assignment_id` when a row is loaded.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "project_month_employee_rows")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub project_id: Uuid,
    pub month_id: Uuid,
    pub employee_id: Option<Uuid>,
    pub assignment_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project_masters::Entity",
        from = "Column::ProjectId",
        to = "super::project_masters::Column::Id"
    )]
    ProjectMasters,
    #[sea_orm(
        belongs_to = "super::month_masters::Entity",
        from = "Column::MonthId",
        to = "super::month_masters::Column::Id"
    )]
    MonthMasters,
    #[sea_orm(
        belongs_to = "super::employee_masters::Entity",
        from = "Column::EmployeeId",
        to = "super::employee_masters::Column::Id"
    )]
    EmployeeMasters,
    #[sea_orm(
        belongs_to = "super::project_employee_assignments::Entity",
        from = "Column::AssignmentId",
        to = "super::project_employee_assignments::Column::Id"
    )]
    ProjectEmployeeAssignments,
}

impl Related<super::project_employee_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectEmployeeAssignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
