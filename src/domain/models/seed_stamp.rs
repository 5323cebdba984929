// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedStamp {
    pub dataset_version: String,
    pub record_count: i32,
    pub seeded_at: DateTime<Utc>,
}

impl SeedStamp {
    pub fn new(dataset_version: impl Into<String>, record_count: i32) -> Self {
        Self {
            dataset_version: dataset_version.into(),
            record_count,
            seeded_at: Utc::now(),
        }
    }
}
