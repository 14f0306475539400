//! Migration to create the reporting tables: per-month list rows and
//! project list aggregates.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectMonthEmployeeRows::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectMonthEmployeeRows::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProjectMonthEmployeeRows::ProjectId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectMonthEmployeeRows::MonthId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectMonthEmployeeRows::EmployeeId)
                            .uuid()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProjectMonthEmployeeRows::AssignmentId)
                            .uuid()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProjectMonthEmployeeRows::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_month_rows_project")
                            .from(
                                ProjectMonthEmployeeRows::Table,
                                ProjectMonthEmployeeRows::ProjectId,
                            )
                            .to(ProjectMasters::Table, ProjectMasters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_month_rows_month")
                            .from(
                                ProjectMonthEmployeeRows::Table,
                                ProjectMonthEmployeeRows::MonthId,
                            )
                            .to(MonthMasters::Table, MonthMasters::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_month_rows_employee")
                            .from(
                                ProjectMonthEmployeeRows::Table,
                                ProjectMonthEmployeeRows::EmployeeId,
                            )
                            .to(EmployeeMasters::Table, EmployeeMasters::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_month_rows_assignment")
                            .from(
                                ProjectMonthEmployeeRows::Table,
                                ProjectMonthEmployeeRows::AssignmentId,
                            )
                            .to(
                                ProjectEmployeeAssignments::Table,
                                ProjectEmployeeAssignments::Id,
                            )
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_month_rows_project_month")
                    .table(ProjectMonthEmployeeRows::Table)
                    .col(ProjectMonthEmployeeRows::ProjectId)
                    .col(ProjectMonthEmployeeRows::MonthId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProjectLists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectLists::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProjectLists::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(ProjectLists::Name).string().not_null())
                    .col(
                        ColumnDef::new(ProjectLists::TotalHoursPlanned)
                            .decimal_len(14, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProjectLists::TotalHoursActual)
                            .decimal_len(14, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProjectLists::TotalPlannedCost)
                            .decimal_len(16, 4)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProjectLists::TotalActualCost)
                            .decimal_len(16, 4)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProjectLists::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ProjectLists::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_lists_project")
                            .from(ProjectLists::Table, ProjectLists::ProjectId)
                            .to(ProjectMasters::Table, ProjectMasters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_project_lists_project")
                    .table(ProjectLists::Table)
                    .col(ProjectLists::ProjectId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectLists::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ProjectMonthEmployeeRows::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectMonthEmployeeRows {
    Table,
    Id,
    ProjectId,
    MonthId,
    EmployeeId,
    AssignmentId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ProjectLists {
    Table,
    Id,
    ProjectId,
    Name,
    TotalHoursPlanned,
    TotalHoursActual,
    TotalPlannedCost,
    TotalActualCost,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProjectMasters {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum EmployeeMasters {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum MonthMasters {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum ProjectEmployeeAssignments {
    Table,
    Id,
}
