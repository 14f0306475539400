//! `SeaORM` entity definitions.

pub mod billing_classes;
pub mod employee_masters;
pub mod month_masters;
pub mod monthly_rollups;
pub mod project_employee_assignments;
pub mod project_lists;
pub mod project_masters;
pub mod project_month_employee_rows;
pub mod sea_orm_active_enums;
pub mod year_masters;
