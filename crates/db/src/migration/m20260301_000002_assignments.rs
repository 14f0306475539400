//! Migration to create `project_employee_assignments` and `monthly_rollups`.

use sea_orm_migration::prelude::*;

/// Unique index backing the one-assignment-per-month rule.
pub const ASSIGNMENT_UNIQUE_INDEX: &str = "uq_assignment_project_employee_year_month";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectEmployeeAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectEmployeeAssignments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProjectEmployeeAssignments::ProjectId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectEmployeeAssignments::EmployeeId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectEmployeeAssignments::YearId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectEmployeeAssignments::MonthId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectEmployeeAssignments::HoursPlanned)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectEmployeeAssignments::HoursActual)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectEmployeeAssignments::PlannedCost)
                            .decimal_len(16, 4)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProjectEmployeeAssignments::ActualCost)
                            .decimal_len(16, 4)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProjectEmployeeAssignments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ProjectEmployeeAssignments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignments_project")
                            .from(
                                ProjectEmployeeAssignments::Table,
                                ProjectEmployeeAssignments::ProjectId,
                            )
                            .to(ProjectMasters::Table, ProjectMasters::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignments_employee")
                            .from(
                                ProjectEmployeeAssignments::Table,
                                ProjectEmployeeAssignments::EmployeeId,
                            )
                            .to(EmployeeMasters::Table, EmployeeMasters::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignments_year")
                            .from(
                                ProjectEmployeeAssignments::Table,
                                ProjectEmployeeAssignments::YearId,
                            )
                            .to(YearMasters::Table, YearMasters::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignments_month")
                            .from(
                                ProjectEmployeeAssignments::Table,
                                ProjectEmployeeAssignments::MonthId,
                            )
                            .to(MonthMasters::Table, MonthMasters::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(ASSIGNMENT_UNIQUE_INDEX)
                    .table(ProjectEmployeeAssignments::Table)
                    .col(ProjectEmployeeAssignments::ProjectId)
                    .col(ProjectEmployeeAssignments::EmployeeId)
                    .col(ProjectEmployeeAssignments::YearId)
                    .col(ProjectEmployeeAssignments::MonthId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Lookups by project drive the project list cascade
        manager
            .create_index(
                Index::create()
                    .name("idx_assignments_project")
                    .table(ProjectEmployeeAssignments::Table)
                    .col(ProjectEmployeeAssignments::ProjectId)
                    .to_owned(),
            )
            .await?;

        let mut rollups = Table::create();
        rollups
            .table(MonthlyRollups::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(MonthlyRollups::Id)
                    .uuid()
                    .not_null()
                    .primary_key(),
            )
            .col(ColumnDef::new(MonthlyRollups::ProjectId).uuid().not_null())
            .col(ColumnDef::new(MonthlyRollups::EmployeeId).uuid().not_null());
        for slot in MonthlyRollups::SLOTS {
            rollups.col(ColumnDef::new(slot).decimal_len(10, 2).null());
        }
        rollups
            .col(
                ColumnDef::new(MonthlyRollups::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_monthly_rollups_project")
                    .from(MonthlyRollups::Table, MonthlyRollups::ProjectId)
                    .to(ProjectMasters::Table, ProjectMasters::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_monthly_rollups_employee")
                    .from(MonthlyRollups::Table, MonthlyRollups::EmployeeId)
                    .to(EmployeeMasters::Table, EmployeeMasters::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            );
        manager.create_table(rollups).await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_monthly_rollups_project_employee")
                    .table(MonthlyRollups::Table)
                    .col(MonthlyRollups::ProjectId)
                    .col(MonthlyRollups::EmployeeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MonthlyRollups::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ProjectEmployeeAssignments::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectEmployeeAssignments {
    Table,
    Id,
    ProjectId,
    EmployeeId,
    YearId,
    MonthId,
    HoursPlanned,
    HoursActual,
    PlannedCost,
    ActualCost,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum MonthlyRollups {
    Table,
    Id,
    ProjectId,
    EmployeeId,
    #[sea_orm(iden = "month_01")]
    Month01,
    #[sea_orm(iden = "month_02")]
    Month02,
    #[sea_orm(iden = "month_03")]
    Month03,
    #[sea_orm(iden = "month_04")]
    Month04,
    #[sea_orm(iden = "month_05")]
    Month05,
    #[sea_orm(iden = "month_06")]
    Month06,
    #[sea_orm(iden = "month_07")]
    Month07,
    #[sea_orm(iden = "month_08")]
    Month08,
    #[sea_orm(iden = "month_09")]
    Month09,
    #[sea_orm(iden = "month_10")]
    Month10,
    #[sea_orm(iden = "month_11")]
    Month11,
    #[sea_orm(iden = "month_12")]
    Month12,
    CreatedAt,
}

impl MonthlyRollups {
    const SLOTS: [Self; 12] = [
        Self::Month01,
        Self::Month02,
        Self::Month03,
        Self::Month04,
        Self::Month05,
        Self::Month06,
        Self::Month07,
        Self::Month08,
        Self::Month09,
        Self::Month10,
        Self::Month11,
        Self::Month12,
    ];
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
enum YearMasters {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum MonthMasters {
    Table,
    Id,
}
