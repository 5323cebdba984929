// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::faculty::{
    Department, DepartmentMatches, FacultyFilter, FacultyRecord,
};
use crate::domain::repositories::faculty_repository::{FacultyRepository, RepositoryError};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SearchServiceError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 教师检索服务
///
/// 按专业方向做不区分大小写的子串匹配，可选只保留仍在讲授该方向的教师。
/// 结果不排序、不分页，保持装载顺序。
pub struct SearchService<R> {
    faculty_repo: Arc<R>,
}

impl<R> SearchService<R>
where
    R: FacultyRepository + 'static,
{
    pub fn new(faculty_repo: Arc<R>) -> Self {
        Self { faculty_repo }
    }

    /// 检索单个院系
    ///
    /// # 参数
    ///
    /// * `query` - 任意文本，空串匹配全部记录
    /// * `department` - 目标院系
    /// * `require_currently_teaching` - 是否只保留仍在讲授的教师
    pub async fn search(
        &self,
        query: &str,
        department: Department,
        require_currently_teaching: bool,
    ) -> Result<Vec<FacultyRecord>, SearchServiceError> {
        let filter = FacultyFilter::new(query, require_currently_teaching);
        let faculty = self.faculty_repo.query(department, &filter).await?;

        metrics::counter!("faculty_searches_total", "department" => department.code())
            .increment(1);
        metrics::counter!("faculty_search_matches_total", "department" => department.code())
            .increment(faculty.len() as u64);

        debug!(
            department = department.code(),
            query,
            require_currently_teaching,
            matches = faculty.len(),
            "Faculty search completed"
        );

        Ok(faculty)
    }

    /// 对每个院系各检索一次，结果按 `Department::ALL` 顺序分别返回
    pub async fn search_directory(
        &self,
        query: &str,
        require_currently_teaching: bool,
    ) -> Result<Vec<DepartmentMatches>, SearchServiceError> {
        let mut results = Vec::with_capacity(Department::ALL.len());
        for department in Department::ALL {
            let faculty = self
                .search(query, department, require_currently_teaching)
                .await?;
            results.push(DepartmentMatches {
                department,
                faculty,
            });
        }
        Ok(results)
    }

    /// 指定院系顺序下的全部专业方向，用作页面上的关键词提示
    pub async fn specializations(
        &self,
        departments: &[Department],
    ) -> Result<Vec<String>, SearchServiceError> {
        let mut keywords = Vec::new();
        for &department in departments {
            let faculty = self
                .faculty_repo
                .query(department, &FacultyFilter::all())
                .await?;
            keywords.extend(faculty.into_iter().map(|r| r.specialization));
        }
        Ok(keywords)
    }
}
