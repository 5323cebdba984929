// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::faculty::{Department, FacultyFilter, FacultyRecord};
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录所属院系与目标集合不一致
    #[error("Record {sequence_number} belongs to {actual}, cannot load into {expected}")]
    DepartmentMismatch {
        expected: Department,
        actual: Department,
        sequence_number: i32,
    },
    /// 同一院系内序号重复
    #[error("Duplicate sequence number {sequence_number} in {department}")]
    DuplicateSequenceNumber {
        department: Department,
        sequence_number: i32,
    },
    /// 持久化数据无法还原为领域模型
    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
}

/// 教师名录仓库特质
///
/// 每个院系对应一个独立集合，集合内的记录保持装载顺序。
#[async_trait]
pub trait FacultyRepository: Send + Sync {
    /// 清空并重建所有院系集合
    async fn initialize(&self) -> Result<(), RepositoryError>;

    /// 用给定记录整体替换某院系的内容，返回写入条数
    async fn load(
        &self,
        department: Department,
        records: &[FacultyRecord],
    ) -> Result<usize, RepositoryError>;

    /// 按装载顺序返回满足条件的记录
    async fn query(
        &self,
        department: Department,
        filter: &FacultyFilter,
    ) -> Result<Vec<FacultyRecord>, RepositoryError>;

    /// 某院系的记录数
    async fn count(&self, department: Department) -> Result<u64, RepositoryError>;
}

/// 装载前校验：记录必须属于目标院系，且序号不重复
pub fn validate_load(
    department: Department,
    records: &[FacultyRecord],
) -> Result<(), RepositoryError> {
    let mut seen = std::collections::HashSet::with_capacity(records.len());
    for record in records {
        if record.department != department {
            return Err(RepositoryError::DepartmentMismatch {
                expected: department,
                actual: record.department,
                sequence_number: record.sequence_number,
            });
        }
        if !seen.insert(record.sequence_number) {
            return Err(RepositoryError::DuplicateSequenceNumber {
                department,
                sequence_number: record.sequence_number,
            });
        }
    }
    Ok(())
}
