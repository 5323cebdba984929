// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_db, seeded_sqlite_repo};
use std::sync::Arc;
use techguru::domain::dataset;
use techguru::domain::models::faculty::{Department, FacultyFilter};
use techguru::domain::repositories::faculty_repository::{FacultyRepository, RepositoryError};
use techguru::infrastructure::repositories::faculty_repo_impl::FacultyRepositoryImpl;

fn names(records: &[techguru::domain::models::faculty::FacultyRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

/// 装载后按原顺序读回全部记录
#[tokio::test]
async fn test_load_preserves_order_and_values() {
    let (_db, repo) = seeded_sqlite_repo().await;

    for department in Department::ALL {
        let stored = repo.query(department, &FacultyFilter::all()).await.unwrap();
        assert_eq!(stored, dataset::builtin().records(department));
    }
}

/// 装载是整体替换而不是追加
#[tokio::test]
async fn test_load_replaces_department_contents() {
    let (_db, repo) = seeded_sqlite_repo().await;
    let subset = &dataset::builtin().records(Department::It)[..3];

    let written = repo.load(Department::It, subset).await.unwrap();

    assert_eq!(written, 3);
    assert_eq!(repo.count(Department::It).await.unwrap(), 3);
    // Other departments are untouched
    assert_eq!(repo.count(Department::Cse).await.unwrap(), 20);
}

#[tokio::test]
async fn test_initialize_empties_all_collections() {
    let (_db, repo) = seeded_sqlite_repo().await;

    repo.initialize().await.unwrap();
    repo.initialize().await.unwrap();

    for department in Department::ALL {
        assert_eq!(repo.count(department).await.unwrap(), 0);
        assert!(repo
            .query(department, &FacultyFilter::all())
            .await
            .unwrap()
            .is_empty());
    }
}

/// 两次初始化加装载与一次的结果完全一致
#[tokio::test]
async fn test_reinitialize_is_idempotent() {
    let (_db, repo) = seeded_sqlite_repo().await;
    let before = repo.query(Department::Cse, &FacultyFilter::all()).await.unwrap();

    for _ in 0..2 {
        repo.initialize().await.unwrap();
        for department in Department::ALL {
            repo.load(department, dataset::builtin().records(department))
                .await
                .unwrap();
        }
    }

    let after = repo.query(Department::Cse, &FacultyFilter::all()).await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_load_rejects_foreign_and_duplicate_records() {
    let test_db = create_test_db().await;
    let repo = Arc::new(FacultyRepositoryImpl::new(test_db.db.clone()));

    let cse = dataset::builtin().records(Department::Cse);
    let err = repo.load(Department::It, cse).await.unwrap_err();
    assert!(matches!(err, RepositoryError::DepartmentMismatch { .. }));

    let duplicated = vec![cse[0].clone(), cse[0].clone()];
    let err = repo.load(Department::Cse, &duplicated).await.unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::DuplicateSequenceNumber {
            sequence_number: 1,
            ..
        }
    ));
    assert_eq!(repo.count(Department::Cse).await.unwrap(), 0);
}

#[tokio::test]
async fn test_query_matches_case_insensitive_substring() {
    let (_db, repo) = seeded_sqlite_repo().await;

    let upper = repo
        .query(Department::Cse, &FacultyFilter::new("AI", false))
        .await
        .unwrap();
    let lower = repo
        .query(Department::Cse, &FacultyFilter::new("ai", false))
        .await
        .unwrap();
    assert_eq!(upper, lower);
    assert!(!upper.is_empty());

    let big_data = repo
        .query(Department::Cse, &FacultyFilter::new("big data", false))
        .await
        .unwrap();
    assert!(big_data
        .iter()
        .any(|r| r.specialization == "Artificial Intelligence and Big Data"));

    let squashed = repo
        .query(Department::Cse, &FacultyFilter::new("bigdata", false))
        .await
        .unwrap();
    assert!(squashed.is_empty());
}

/// LIKE 通配符按字面匹配
#[tokio::test]
async fn test_query_treats_wildcards_literally() {
    let (_db, repo) = seeded_sqlite_repo().await;

    for needle in ["%", "_", "cloud%", "\\"] {
        let found = repo
            .query(Department::It, &FacultyFilter::new(needle, false))
            .await
            .unwrap();
        assert!(found.is_empty(), "{needle} should match nothing");
    }

    let slash = repo
        .query(Department::Cse, &FacultyFilter::new("ar/vr", false))
        .await
        .unwrap();
    assert_eq!(
        names(&slash),
        vec!["Ms. Rajalakshmi G", "Ms. Sowmiya S"]
    );
}

/// 院系间互不影响
#[tokio::test]
async fn test_query_scoped_to_department() {
    let (_db, repo) = seeded_sqlite_repo().await;

    let robotics_it = repo
        .query(Department::It, &FacultyFilter::new("robotics", false))
        .await
        .unwrap();
    let robotics_cse = repo
        .query(Department::Cse, &FacultyFilter::new("robotics", false))
        .await
        .unwrap();

    assert_eq!(names(&robotics_it), vec!["Dr G.Ayyappan"]);
    assert!(robotics_cse.is_empty());
}

/// 持久化的教学标志总是由在职状态推导
#[tokio::test]
async fn test_teaching_flag_matches_association() {
    let (_db, repo) = seeded_sqlite_repo().await;

    for department in Department::ALL {
        let all = repo.query(department, &FacultyFilter::all()).await.unwrap();
        let teaching = repo
            .query(department, &FacultyFilter::new("", true))
            .await
            .unwrap();
        let associated: Vec<_> = all.into_iter().filter(|r| r.currently_associated).collect();
        assert_eq!(teaching, associated);
    }
}
