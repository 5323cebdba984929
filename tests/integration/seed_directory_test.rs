// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{connect, create_test_db};
use std::sync::Arc;
use techguru::application::use_cases::seed_directory::{
    SeedDirectoryUseCase, SeedOutcome, SeedPolicy,
};
use techguru::domain::dataset::{self, FacultyDataset};
use techguru::domain::models::faculty::{Department, FacultyFilter};
use techguru::domain::repositories::faculty_repository::FacultyRepository;
use techguru::domain::repositories::seed_stamp_repository::SeedStampRepository;
use techguru::infrastructure::repositories::faculty_repo_impl::FacultyRepositoryImpl;
use techguru::infrastructure::repositories::seed_stamp_repo_impl::SeedStampRepositoryImpl;

fn seeder(
    db: &Arc<sea_orm::DatabaseConnection>,
    policy: SeedPolicy,
) -> (
    Arc<FacultyRepositoryImpl>,
    SeedDirectoryUseCase<FacultyRepositoryImpl, SeedStampRepositoryImpl>,
) {
    let faculty_repo = Arc::new(FacultyRepositoryImpl::new(db.clone()));
    let stamp_repo = Arc::new(SeedStampRepositoryImpl::new(db.clone()));
    let use_case = SeedDirectoryUseCase::new(faculty_repo.clone(), stamp_repo, policy);
    (faculty_repo, use_case)
}

/// 修改了一位教师专业方向的数据集
fn edited_dataset() -> FacultyDataset {
    let builtin = dataset::builtin();
    let mut cse = builtin.records(Department::Cse).to_vec();
    cse[0].specialization = "Quantum computing".to_string();
    FacultyDataset::new(cse, builtin.records(Department::It).to_vec())
}

#[tokio::test]
async fn test_first_start_seeds_and_stamps() {
    let test_db = create_test_db().await;
    let (repo, use_case) = seeder(&test_db.db, SeedPolicy::Versioned);

    let outcome = use_case.execute(dataset::builtin()).await.unwrap();
    assert!(outcome.was_seeded());
    assert_eq!(repo.count(Department::Cse).await.unwrap(), 20);
    assert_eq!(repo.count(Department::It).await.unwrap(), 22);

    let stamp = SeedStampRepositoryImpl::new(test_db.db.clone())
        .get_stamp()
        .await
        .unwrap()
        .expect("stamp written");
    assert_eq!(stamp.dataset_version, dataset::builtin().version().unwrap());
    assert_eq!(stamp.record_count, 42);
}

/// 重新打开同一个数据库文件时不会重复装载
#[tokio::test]
async fn test_restart_with_same_dataset_is_up_to_date() {
    let test_db = create_test_db().await;
    let (_, use_case) = seeder(&test_db.db, SeedPolicy::Versioned);
    use_case.execute(dataset::builtin()).await.unwrap();

    let reopened = connect(&test_db.url).await;
    let (repo, use_case) = seeder(&reopened, SeedPolicy::Versioned);
    let outcome = use_case.execute(dataset::builtin()).await.unwrap();

    assert_eq!(
        outcome,
        SeedOutcome::UpToDate {
            version: dataset::builtin().version().unwrap()
        }
    );
    assert_eq!(repo.count(Department::Cse).await.unwrap(), 20);
}

#[tokio::test]
async fn test_changed_dataset_is_reloaded() {
    let test_db = create_test_db().await;
    let (repo, use_case) = seeder(&test_db.db, SeedPolicy::Versioned);
    use_case.execute(dataset::builtin()).await.unwrap();

    let edited = edited_dataset();
    let outcome = use_case.execute(&edited).await.unwrap();
    assert!(outcome.was_seeded());

    let quantum = repo
        .query(Department::Cse, &FacultyFilter::new("quantum", false))
        .await
        .unwrap();
    assert_eq!(quantum.len(), 1);
    assert_eq!(quantum[0].name, "Dr. Preetha M");
}

/// 旧策略：已有数据时即使内置数据变化也不会重新装载
#[tokio::test]
async fn test_if_missing_keeps_persisted_copy() {
    let test_db = create_test_db().await;
    let (repo, use_case) = seeder(&test_db.db, SeedPolicy::IfMissing);
    use_case.execute(dataset::builtin()).await.unwrap();

    let outcome = use_case.execute(&edited_dataset()).await.unwrap();
    assert!(!outcome.was_seeded());

    let quantum = repo
        .query(Department::Cse, &FacultyFilter::new("quantum", false))
        .await
        .unwrap();
    assert!(quantum.is_empty());
}

#[tokio::test]
async fn test_always_reloads_identical_contents() {
    let test_db = create_test_db().await;
    let (repo, use_case) = seeder(&test_db.db, SeedPolicy::Always);

    use_case.execute(dataset::builtin()).await.unwrap();
    let first = repo.query(Department::It, &FacultyFilter::all()).await.unwrap();
    let outcome = use_case.execute(dataset::builtin()).await.unwrap();
    let second = repo.query(Department::It, &FacultyFilter::all()).await.unwrap();

    assert!(outcome.was_seeded());
    assert_eq!(first, second);
}
