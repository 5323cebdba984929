// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::faculty::{Department, FacultyFilter, FacultyRecord};
use crate::domain::models::seed_stamp::SeedStamp;
use crate::domain::repositories::faculty_repository::{
    validate_load, FacultyRepository, RepositoryError,
};
use crate::domain::repositories::seed_stamp_repository::SeedStampRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// 内存中的教师名录仓库实现
///
/// 与 SQLite 实现遵循相同的契约，用于测试以及无需数据库文件的运行方式。
/// 同时保存装载标记。
pub struct InMemoryFacultyRepository {
    /// 各院系的记录，保持装载顺序
    collections: Arc<RwLock<HashMap<Department, Vec<FacultyRecord>>>>,
    /// 最近一次装载的标记
    stamp: Arc<RwLock<Option<SeedStamp>>>,
}

impl InMemoryFacultyRepository {
    /// 创建新的空仓库
    pub fn new() -> Self {
        Self {
            collections: Arc::new(RwLock::new(HashMap::new())),
            stamp: Arc::new(RwLock::new(None)),
        }
    }
}

impl Default for InMemoryFacultyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FacultyRepository for InMemoryFacultyRepository {
    async fn initialize(&self) -> Result<(), RepositoryError> {
        let mut collections = self.collections.write().await;
        collections.clear();
        for department in Department::ALL {
            collections.insert(department, Vec::new());
        }
        Ok(())
    }

    async fn load(
        &self,
        department: Department,
        records: &[FacultyRecord],
    ) -> Result<usize, RepositoryError> {
        validate_load(department, records)?;
        let mut collections = self.collections.write().await;
        collections.insert(department, records.to_vec());
        Ok(records.len())
    }

    async fn query(
        &self,
        department: Department,
        filter: &FacultyFilter,
    ) -> Result<Vec<FacultyRecord>, RepositoryError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&department)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| filter.matches(record))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn count(&self, department: Department) -> Result<u64, RepositoryError> {
        let collections = self.collections.read().await;
        Ok(collections.get(&department).map_or(0, |r| r.len() as u64))
    }
}

#[async_trait]
impl SeedStampRepository for InMemoryFacultyRepository {
    async fn get_stamp(&self) -> Result<Option<SeedStamp>, RepositoryError> {
        Ok(self.stamp.read().await.clone())
    }

    async fn set_stamp(&self, stamp: &SeedStamp) -> Result<(), RepositoryError> {
        *self.stamp.write().await = Some(stamp.clone());
        Ok(())
    }
}
