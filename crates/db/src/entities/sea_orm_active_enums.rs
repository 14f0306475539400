//! `SeaORM` active enums.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Status column shared by the reference masters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum ReferenceStatus {
    /// Usable by new assignments.
    #[sea_orm(string_value = "active")]
    Active,
    /// Soft-deleted.
    #[sea_orm(string_value = "retired")]
    Retired,
}

impl From<ReferenceStatus> for opcost_core::reference::ReferenceStatus {
    fn from(status: ReferenceStatus) -> Self {
        match status {
            ReferenceStatus::Active => Self::Active,
            ReferenceStatus::Retired => Self::Retired,
        }
    }
}
