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

use crate::domain::{
    dataset::FacultyDataset,
    models::{faculty::Department, seed_stamp::SeedStamp},
    repositories::{
        faculty_repository::{FacultyRepository, RepositoryError},
        seed_stamp_repository::SeedStampRepository,
    },
};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum SeedDirectoryError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Dataset serialization error: {0}")]
    Dataset(#[from] serde_json::Error),
}

/// 名录装载策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
    /// 持久化标记缺失或与当前数据集版本不同时重新装载
    #[default]
    Versioned,
    /// 只在从未装载过时装载；之后修改内置数据不会生效
    IfMissing,
    /// 每次启动都重新装载
    Always,
}

/// 装载结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// 已重新装载
    Seeded { version: String, records: usize },
    /// 持久化数据可直接使用
    UpToDate { version: String },
}

impl SeedOutcome {
    pub fn was_seeded(&self) -> bool {
        matches!(self, SeedOutcome::Seeded { .. })
    }
}

/// 启动时把内置名录装载进存储
pub struct SeedDirectoryUseCase<FR, SR> {
    faculty_repo: Arc<FR>,
    stamp_repo: Arc<SR>,
    policy: SeedPolicy,
}

impl<FR, SR> SeedDirectoryUseCase<FR, SR>
where
    FR: FacultyRepository + 'static,
    SR: SeedStampRepository + 'static,
{
    pub fn new(faculty_repo: Arc<FR>, stamp_repo: Arc<SR>, policy: SeedPolicy) -> Self {
        Self {
            faculty_repo,
            stamp_repo,
            policy,
        }
    }

    /// 按策略决定是否重新装载
    ///
    /// 重新装载时依次执行 `initialize`、逐个院系 `load`，最后写入标记；
    /// 中途失败不会留下新标记，下次启动会再次装载。
    pub async fn execute(
        &self,
        dataset: &FacultyDataset,
    ) -> Result<SeedOutcome, SeedDirectoryError> {
        let version = dataset.version()?;
        let stamp = self.stamp_repo.get_stamp().await?;

        let needs_seed = match (&self.policy, &stamp) {
            (SeedPolicy::Always, _) => true,
            (_, None) => true,
            (SeedPolicy::IfMissing, Some(existing)) => {
                if existing.dataset_version != version {
                    warn!(
                        persisted = %existing.dataset_version,
                        current = %version,
                        "Persisted faculty directory differs from built-in dataset; keeping persisted copy"
                    );
                }
                false
            }
            (SeedPolicy::Versioned, Some(existing)) => existing.dataset_version != version,
        };

        if !needs_seed {
            info!(version = %version, "Faculty directory is up to date");
            return Ok(SeedOutcome::UpToDate { version });
        }

        self.faculty_repo.initialize().await?;

        let mut records = 0;
        for department in Department::ALL {
            records += self
                .faculty_repo
                .load(department, dataset.records(department))
                .await?;
        }

        self.stamp_repo
            .set_stamp(&SeedStamp::new(version.clone(), records as i32))
            .await?;

        metrics::counter!("faculty_seed_runs_total").increment(1);
        info!(
            version = %version,
            records,
            policy = ?self.policy,
            "Faculty directory seeded"
        );

        Ok(SeedOutcome::Seeded { version, records })
    }
}
