//! `SeaORM` Entity for employee_masters table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ReferenceStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "employee_masters")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub billing_class_id: Option<Uuid>,
    pub status: ReferenceStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::billing_classes::Entity",
        from = "Column::BillingClassId",
        to = "super::billing_classes::Column::Id"
    )]
    BillingClasses,
}

impl Related<super::billing_classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BillingClasses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
