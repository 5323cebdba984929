// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::seed_stamp::SeedStamp;
use crate::domain::repositories::faculty_repository::RepositoryError;
use async_trait::async_trait;

/// 名录装载标记仓库
///
/// 记录最近一次装载所用的数据集版本。
#[async_trait]
pub trait SeedStampRepository: Send + Sync {
    /// 读取当前标记，从未装载过时返回 `None`
    async fn get_stamp(&self) -> Result<Option<SeedStamp>, RepositoryError>;

    /// 写入（或覆盖）标记
    async fn set_stamp(&self, stamp: &SeedStamp) -> Result<(), RepositoryError>;
}
