// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::faculty::{yes_no, Department, FacultyFilter, FacultyRecord};
use crate::domain::repositories::faculty_repository::{
    validate_load, FacultyRepository, RepositoryError,
};
use crate::infrastructure::database::entities::faculty_member;
use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use std::sync::Arc;
use tracing::{debug, info};

/// LIKE 模式中的转义字符
const LIKE_ESCAPE: char = '\\';

/// 基于 SQLite 的教师名录仓库实现
pub struct FacultyRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl FacultyRepositoryImpl {
    /// 创建新的教师名录仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// 把查询文本转换为包含匹配的 LIKE 模式，`%`、`_` 与转义符本身按字面匹配
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if ch == '%' || ch == '_' || ch == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl FacultyRepository for FacultyRepositoryImpl {
    async fn initialize(&self) -> Result<(), RepositoryError> {
        let result = faculty_member::Entity::delete_many()
            .exec(self.db.as_ref())
            .await?;
        info!(
            removed = result.rows_affected,
            "Faculty collections reinitialized"
        );
        Ok(())
    }

    async fn load(
        &self,
        department: Department,
        records: &[FacultyRecord],
    ) -> Result<usize, RepositoryError> {
        validate_load(department, records)?;

        let txn = self.db.begin().await?;

        faculty_member::Entity::delete_many()
            .filter(faculty_member::Column::Department.eq(department.code()))
            .exec(&txn)
            .await?;

        if !records.is_empty() {
            let rows = records
                .iter()
                .enumerate()
                .map(|(position, record)| {
                    faculty_member::ActiveModel::from_record(record, position as i32)
                });
            faculty_member::Entity::insert_many(rows)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;

        info!(
            department = department.code(),
            records = records.len(),
            "Faculty collection loaded"
        );
        Ok(records.len())
    }

    async fn query(
        &self,
        department: Department,
        filter: &FacultyFilter,
    ) -> Result<Vec<FacultyRecord>, RepositoryError> {
        let mut select = faculty_member::Entity::find()
            .filter(faculty_member::Column::Department.eq(department.code()))
            .filter(
                Expr::expr(Func::lower(Expr::col(
                    faculty_member::Column::Specialization,
                )))
                .like(LikeExpr::new(contains_pattern(filter.needle())).escape(LIKE_ESCAPE)),
            );

        if filter.currently_teaching_only() {
            select = select.filter(
                faculty_member::Column::CurrentlyTeachingSameSpecialization.eq(yes_no(true)),
            );
        }

        let models = select
            .order_by_asc(faculty_member::Column::Position)
            .all(self.db.as_ref())
            .await?;

        debug!(
            department = department.code(),
            rows = models.len(),
            "Faculty query executed"
        );

        models.into_iter().map(FacultyRecord::try_from).collect()
    }

    async fn count(&self, department: Department) -> Result<u64, RepositoryError> {
        let count = faculty_member::Entity::find()
            .filter(faculty_member::Column::Department.eq(department.code()))
            .count(self.db.as_ref())
            .await?;
        Ok(count)
    }
}
