//! `SeaORM` Entity for project_lists table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "project_lists")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub total_hours_planned: Decimal,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub total_hours_actual: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub total_planned_cost: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub total_actual_cost: Decimal,
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
}

impl Related<super::project_masters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectMasters.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
