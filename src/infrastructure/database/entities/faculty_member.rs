// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::domain::models::faculty::{parse_yes_no, yes_no, Department, FacultyRecord};
use crate::domain::repositories::faculty_repository::RepositoryError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "faculty_members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub department: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub sequence_number: i32,
    pub position: i32,
    pub name: String,
    pub degree: String,
    pub university: String,
    pub year_of_qualification: i32,
    pub designation: String,
    pub designated_on: Option<String>,
    pub date_of_joining: String,
    pub specialization: String,
    pub publication_count: String,
    pub phd_guidance: String,
    pub phd_graduates: String,
    pub currently_associated: String,
    pub date_of_leaving: String,
    pub association_nature: String,
    pub currently_teaching_same_specialization: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// 由领域记录构造待插入的行，`position` 为装载顺序
    pub fn from_record(record: &FacultyRecord, position: i32) -> Self {
        Self {
            department: Set(record.department.code().to_string()),
            sequence_number: Set(record.sequence_number),
            position: Set(position),
            name: Set(record.name.clone()),
            degree: Set(record.degree.clone()),
            university: Set(record.university.clone()),
            year_of_qualification: Set(record.year_of_qualification),
            designation: Set(record.designation.clone()),
            designated_on: Set(record.designated_on.clone()),
            date_of_joining: Set(record.date_of_joining.clone()),
            specialization: Set(record.specialization.clone()),
            publication_count: Set(record.publication_count.clone()),
            phd_guidance: Set(record.phd_guidance.clone()),
            phd_graduates: Set(record.phd_graduates.clone()),
            currently_associated: Set(yes_no(record.currently_associated).to_string()),
            date_of_leaving: Set(record.date_of_leaving.clone()),
            association_nature: Set(record.association_nature.clone()),
            currently_teaching_same_specialization: Set(
                yes_no(record.currently_teaching_same_specialization()).to_string(),
            ),
        }
    }
}

impl TryFrom<Model> for FacultyRecord {
    type Error = RepositoryError;

    // The stored teaching column is ignored; it is always derived again.
    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let department: Department = model
            .department
            .parse()
            .map_err(|e| RepositoryError::CorruptRecord(format!("{}", e)))?;

        Ok(FacultyRecord {
            sequence_number: model.sequence_number,
            name: model.name,
            degree: model.degree,
            university: model.university,
            year_of_qualification: model.year_of_qualification,
            designation: model.designation,
            designated_on: model.designated_on,
            date_of_joining: model.date_of_joining,
            department,
            specialization: model.specialization,
            publication_count: model.publication_count,
            phd_guidance: model.phd_guidance,
            phd_graduates: model.phd_graduates,
            currently_associated: parse_yes_no(&model.currently_associated),
            date_of_leaving: model.date_of_leaving,
            association_nature: model.association_nature,
        })
    }
}
