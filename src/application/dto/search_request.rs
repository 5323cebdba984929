// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::faculty::{yes_no, Department, DepartmentMatches, FacultyRecord};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// JSON 检索接口的查询参数
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct SearchRequestDto {
    // Empty is allowed: it matches every record.
    #[serde(default)]
    #[validate(length(max = 200, message = "Query is too long"))]
    pub q: String,
    #[serde(default)]
    pub teaching: bool,
    /// 院系代码，缺省时检索全部院系
    pub department: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponseDto {
    pub query: String,
    pub currently_teaching_only: bool,
    pub departments: Vec<DepartmentResultsDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DepartmentResultsDto {
    pub department: Department,
    pub label: String,
    pub total: usize,
    pub faculty: Vec<FacultyView>,
}

impl From<DepartmentMatches> for DepartmentResultsDto {
    fn from(matches: DepartmentMatches) -> Self {
        Self {
            department: matches.department,
            label: matches.department.label().to_string(),
            total: matches.faculty.len(),
            faculty: matches.faculty.iter().map(FacultyView::from).collect(),
        }
    }
}

/// 结果表格中展示的列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyView {
    pub sequence_number: i32,
    pub department: Department,
    pub name: String,
    pub designation: String,
    pub specialization: String,
    pub publication_count: String,
    pub phd_guidance: String,
    pub currently_teaching_same_specialization: String,
}

impl From<&FacultyRecord> for FacultyView {
    fn from(record: &FacultyRecord) -> Self {
        Self {
            sequence_number: record.sequence_number,
            department: record.department,
            name: record.name.clone(),
            designation: record.designation.clone(),
            specialization: record.specialization.clone(),
            publication_count: record.publication_count.clone(),
            phd_guidance: record.phd_guidance.clone(),
            currently_teaching_same_specialization: yes_no(
                record.currently_teaching_same_specialization(),
            )
            .to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DepartmentSummaryDto {
    pub department: Department,
    pub label: String,
    pub records: u64,
}
