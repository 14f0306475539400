//! Migration to create the reference master tables.
//!
//! Masters carry a `status` column (`active` / `retired`) instead of being
//! deleted, so historical assignments keep resolving.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectMasters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectMasters::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProjectMasters::Code)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(ProjectMasters::Name).string().not_null())
                    .col(status_column(ProjectMasters::Status))
                    .col(timestamp_column(ProjectMasters::CreatedAt))
                    .col(timestamp_column(ProjectMasters::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BillingClasses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BillingClasses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BillingClasses::Code)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(BillingClasses::Name).string().not_null())
                    .col(
                        ColumnDef::new(BillingClasses::UnitPrice)
                            .decimal_len(12, 2)
                            .null(),
                    )
                    .col(timestamp_column(BillingClasses::CreatedAt))
                    .col(timestamp_column(BillingClasses::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmployeeMasters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmployeeMasters::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EmployeeMasters::Code)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(EmployeeMasters::Name).string().not_null())
                    .col(
                        ColumnDef::new(EmployeeMasters::BillingClassId)
                            .uuid()
                            .null(),
                    )
                    .col(status_column(EmployeeMasters::Status))
                    .col(timestamp_column(EmployeeMasters::CreatedAt))
                    .col(timestamp_column(EmployeeMasters::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_masters_billing_class")
                            .from(EmployeeMasters::Table, EmployeeMasters::BillingClassId)
                            .to(BillingClasses::Table, BillingClasses::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(YearMasters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(YearMasters::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(YearMasters::Year)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(status_column(YearMasters::Status))
                    .col(timestamp_column(YearMasters::CreatedAt))
                    .col(timestamp_column(YearMasters::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MonthMasters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MonthMasters::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MonthMasters::Month)
                            .small_integer()
                            .not_null()
                            .unique_key()
                            .check(Expr::col(MonthMasters::Month).between(1, 12)),
                    )
                    .col(ColumnDef::new(MonthMasters::Name).string_len(32).not_null())
                    .col(status_column(MonthMasters::Status))
                    .col(timestamp_column(MonthMasters::CreatedAt))
                    .col(timestamp_column(MonthMasters::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MonthMasters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(YearMasters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EmployeeMasters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BillingClasses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectMasters::Table).to_owned())
            .await
    }
}

fn status_column<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .string_len(16)
        .not_null()
        .default("active")
        .to_owned()
}

fn timestamp_column<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

#[derive(DeriveIden)]
enum ProjectMasters {
    Table,
    Id,
    Code,
    Name,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum BillingClasses {
    Table,
    Id,
    Code,
    Name,
    UnitPrice,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum EmployeeMasters {
    Table,
    Id,
    Code,
    Name,
    BillingClassId,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum YearMasters {
    Table,
    Id,
    Year,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum MonthMasters {
    Table,
    Id,
    Month,
    Name,
    Status,
    CreatedAt,
    UpdatedAt,
}
