// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::seed_stamp::SeedStamp;
use crate::domain::repositories::faculty_repository::RepositoryError;
use crate::domain::repositories::seed_stamp_repository::SeedStampRepository;
use crate::infrastructure::database::entities::seed_metadata::{self, DATASET_STAMP_KEY};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;

pub struct SeedStampRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl SeedStampRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SeedStampRepository for SeedStampRepositoryImpl {
    async fn get_stamp(&self) -> Result<Option<SeedStamp>, RepositoryError> {
        let model = seed_metadata::Entity::find_by_id(DATASET_STAMP_KEY.to_string())
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(|m| SeedStamp {
            dataset_version: m.dataset_version,
            record_count: m.record_count,
            seeded_at: m.seeded_at.with_timezone(&Utc),
        }))
    }

    async fn set_stamp(&self, stamp: &SeedStamp) -> Result<(), RepositoryError> {
        let existing = seed_metadata::Entity::find_by_id(DATASET_STAMP_KEY.to_string())
            .one(self.db.as_ref())
            .await?;

        match existing {
            Some(model) => {
                let mut active: seed_metadata::ActiveModel = model.into();
                active.dataset_version = Set(stamp.dataset_version.clone());
                active.record_count = Set(stamp.record_count);
                active.seeded_at = Set(stamp.seeded_at.fixed_offset());
                active.update(self.db.as_ref()).await?;
            }
            None => {
                let active = seed_metadata::ActiveModel {
                    key: Set(DATASET_STAMP_KEY.to_string()),
                    dataset_version: Set(stamp.dataset_version.clone()),
                    record_count: Set(stamp.record_count),
                    seeded_at: Set(stamp.seeded_at.fixed_offset()),
                };
                active.insert(self.db.as_ref()).await?;
            }
        }

        Ok(())
    }
}
