//! `SeaORM` Entity for project_employee_assignments table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "project_employee_assignments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub project_id: Uuid,
    pub employee_id: Uuid,
    pub year_id: Uuid,
    pub month_id: Uuid,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub hours_planned: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub hours_actual: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub planned_cost: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub actual_cost: Decimal,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
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
        belongs_to = "super::employee_masters::Entity",
        from = "Column::EmployeeId",
        to = "super::employee_masters::Column::Id"
    )]
    EmployeeMasters,
    #[sea_orm(
        belongs_to = "super::year_masters::Entity",
        from = "Column::YearId",
        to = "super::year_masters::Column::Id"
    )]
    YearMasters,
    #[sea_orm(
        belongs_to = "super::month_masters::Entity",
        from = "Column::MonthId",
        to = "super::month_masters::Column::Id"
    )]
    MonthMasters,
}

impl Related<super::project_masters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectMasters.def()
    }
}

impl Related<super::employee_masters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmployeeMasters.def()
    }
}

impl Related<super::year_masters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::YearMasters.def()
    }
}

impl Related<super::month_masters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MonthMasters.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
