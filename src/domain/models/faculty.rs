// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 院系代码
///
/// 每条教师记录都唯一归属于其中一个院系，院系之间的数据互相独立。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "CSE")]
    Cse,
    #[serde(rename = "IT")]
    It,
}

impl Department {
    /// 所有院系，按结果展示顺序排列
    pub const ALL: [Department; 2] = [Department::Cse, Department::It];

    pub fn code(&self) -> &'static str {
        match self {
            Department::Cse => "CSE",
            Department::It => "IT",
        }
    }

    /// 结果表格的标题
    pub fn label(&self) -> &'static str {
        match self {
            Department::Cse => "CSE Department Faculty",
            Department::It => "IT Department Faculty",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid department code: {0}")]
pub struct DepartmentParseError(pub String);

impl FromStr for Department {
    type Err = DepartmentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CSE" => Ok(Department::Cse),
            "IT" => Ok(Department::It),
            _ => Err(DepartmentParseError(s.to_string())),
        }
    }
}

/// 教师记录
///
/// 除 `currently_associated` 外，字段均按录入时的原文保存，
/// 例如 `publication_count` 为 `"-"` 表示未知，与 `"0"` 含义不同。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyRecord {
    pub sequence_number: i32,
    pub name: String,
    pub degree: String,
    pub university: String,
    pub year_of_qualification: i32,
    pub designation: String,
    /// 晋升为教授/副教授的日期，仅 CSE 数据包含此列
    pub designated_on: Option<String>,
    pub date_of_joining: String,
    pub department: Department,
    pub specialization: String,
    pub publication_count: String,
    pub phd_guidance: String,
    pub phd_graduates: String,
    pub currently_associated: bool,
    pub date_of_leaving: String,
    pub association_nature: String,
}

impl FacultyRecord {
    /// 是否仍在讲授其专业方向
    ///
    /// 数据中没有独立的来源，因此始终等同于 `currently_associated`。
    pub fn currently_teaching_same_specialization(&self) -> bool {
        self.currently_associated
    }
}

/// 将布尔标志渲染为数据表中使用的 "Yes"/"No"
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// 解析 "Yes"/"No" 标志，其他取值一律视为否
pub fn parse_yes_no(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("yes")
}

/// 教师查询条件
///
/// 专业方向按小写做连续子串匹配；空查询匹配全部记录。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FacultyFilter {
    specialization_contains: String,
    currently_teaching_only: bool,
}

impl FacultyFilter {
    pub fn new(query: &str, currently_teaching_only: bool) -> Self {
        Self {
            specialization_contains: query.to_lowercase(),
            currently_teaching_only,
        }
    }

    /// 不做任何限制的条件
    pub fn all() -> Self {
        Self::default()
    }

    /// 已转为小写的匹配子串
    pub fn needle(&self) -> &str {
        &self.specialization_contains
    }

    pub fn currently_teaching_only(&self) -> bool {
        self.currently_teaching_only
    }

    pub fn matches(&self, record: &FacultyRecord) -> bool {
        if self.currently_teaching_only && !record.currently_teaching_same_specialization() {
            return false;
        }
        record
            .specialization
            .to_lowercase()
            .contains(&self.specialization_contains)
    }
}

/// 单个院系的检索结果，保持装载顺序
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentMatches {
    pub department: Department,
    pub faculty: Vec<FacultyRecord>,
}

impl DepartmentMatches {
    pub fn is_empty(&self) -> bool {
        self.faculty.is_empty()
    }
}
