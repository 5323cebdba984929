// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 教师名录表迁移
///
/// 两个院系共用一张表，以 (department, sequence_number) 作为主键，
/// `position` 记录装载顺序。
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FacultyMembers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(FacultyMembers::Department).string().not_null())
                    .col(
                        ColumnDef::new(FacultyMembers::SequenceNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FacultyMembers::Position).integer().not_null())
                    .col(ColumnDef::new(FacultyMembers::Name).string().not_null())
                    .col(ColumnDef::new(FacultyMembers::Degree).string().not_null())
                    .col(ColumnDef::new(FacultyMembers::University).string().not_null())
                    .col(
                        ColumnDef::new(FacultyMembers::YearOfQualification)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FacultyMembers::Designation).string().not_null())
                    .col(ColumnDef::new(FacultyMembers::DesignatedOn).string())
                    .col(ColumnDef::new(FacultyMembers::DateOfJoining).string().not_null())
                    .col(ColumnDef::new(FacultyMembers::Specialization).string().not_null())
                    .col(
                        ColumnDef::new(FacultyMembers::PublicationCount)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FacultyMembers::PhdGuidance).string().not_null())
                    .col(ColumnDef::new(FacultyMembers::PhdGraduates).string().not_null())
                    .col(
                        ColumnDef::new(FacultyMembers::CurrentlyAssociated)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FacultyMembers::DateOfLeaving).string().not_null())
                    .col(
                        ColumnDef::new(FacultyMembers::AssociationNature)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FacultyMembers::CurrentlyTeachingSameSpecialization)
                            .string()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(FacultyMembers::Department)
                            .col(FacultyMembers::SequenceNumber),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_faculty_members_department_position")
                    .table(FacultyMembers::Table)
                    .col(FacultyMembers::Department)
                    .col(FacultyMembers::Position)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FacultyMembers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FacultyMembers {
    Table,
    Department,
    SequenceNumber,
    Position,
    Name,
    Degree,
    University,
    YearOfQualification,
    Designation,
    DesignatedOn,
    DateOfJoining,
    Specialization,
    PublicationCount,
    PhdGuidance,
    PhdGraduates,
    CurrentlyAssociated,
    DateOfLeaving,
    AssociationNature,
    CurrentlyTeachingSameSpecialization,
}
