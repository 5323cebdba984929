// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 检索服务测试
///
/// 基于内存仓库验证检索的匹配与过滤规则

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use techguru::application::use_cases::seed_directory::{SeedDirectoryUseCase, SeedPolicy};
    use techguru::domain::dataset;
    use techguru::domain::models::faculty::{Department, FacultyRecord};
    use techguru::domain::services::search_service::SearchService;
    use techguru::infrastructure::repositories::in_memory_faculty_repo::InMemoryFacultyRepository;

    async fn service() -> SearchService<InMemoryFacultyRepository> {
        let repo = Arc::new(InMemoryFacultyRepository::new());
        SeedDirectoryUseCase::new(repo.clone(), repo.clone(), SeedPolicy::Versioned)
            .execute(dataset::builtin())
            .await
            .unwrap();
        SearchService::new(repo)
    }

    fn names(records: &[FacultyRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_empty_query_returns_department_in_load_order() {
        let service = service().await;

        for department in Department::ALL {
            let found = service.search("", department, false).await.unwrap();
            assert_eq!(&found[..], dataset::builtin().records(department));
        }
    }

    #[tokio::test]
    async fn test_match_is_case_insensitive() {
        let service = service().await;

        let lower = service.search("cloud", Department::It, false).await.unwrap();
        let upper = service.search("CLOUD", Department::It, false).await.unwrap();
        let mixed = service.search("ClOuD", Department::It, false).await.unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
        assert_eq!(lower.len(), 3);
    }

    #[tokio::test]
    async fn test_every_match_contains_query() {
        let service = service().await;

        for query in ["network", "learning", "security", "data"] {
            for department in Department::ALL {
                let found = service.search(query, department, false).await.unwrap();
                assert!(found
                    .iter()
                    .all(|r| r.specialization.to_lowercase().contains(query)));
                assert!(found.iter().all(|r| r.department == department));
            }
        }
    }

    #[tokio::test]
    async fn test_teaching_filter_is_a_subset() {
        let service = service().await;

        for department in Department::ALL {
            let all = service.search("", department, false).await.unwrap();
            let teaching = service.search("", department, true).await.unwrap();

            assert!(teaching.len() < all.len());
            assert!(teaching.iter().all(|r| r.currently_associated));
            assert!(teaching.iter().all(|r| all.contains(r)));
            assert_eq!(
                teaching.len(),
                all.iter().filter(|r| r.currently_associated).count()
            );
        }
    }

    #[tokio::test]
    async fn test_cloud_in_it_excludes_departed_faculty() {
        let service = service().await;

        let found = service.search("cloud", Department::It, true).await.unwrap();

        assert_eq!(names(&found), vec!["MS T. Vanaja", "MS R. Reena"]);
        assert!(found
            .iter()
            .all(|r| r.university != "Sathyabama University"));
    }

    #[tokio::test]
    async fn test_whitespace_is_not_trimmed_by_service() {
        let service = service().await;

        let padded = service.search(" cloud ", Department::It, false).await.unwrap();

        assert!(padded.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_specialization_is_empty() {
        let service = service().await;

        let results = service.search_directory("astrophysics", false).await.unwrap();

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|m| m.is_empty()));
    }

    #[tokio::test]
    async fn test_search_directory_covers_each_department_once() {
        let service = service().await;

        let results = service.search_directory("learning", true).await.unwrap();
        let departments: Vec<Department> = results.iter().map(|m| m.department).collect();

        assert_eq!(departments, Department::ALL.to_vec());
        for matches in &results {
            let direct = service
                .search("learning", matches.department, true)
                .await
                .unwrap();
            assert_eq!(matches.faculty, direct);
        }
    }

    #[tokio::test]
    async fn test_specializations_follow_requested_order() {
        let service = service().await;

        let keywords = service
            .specializations(&[Department::It, Department::Cse])
            .await
            .unwrap();

        assert_eq!(keywords.len(), 42);
        assert_eq!(keywords[0], "Deep Learning");
        assert_eq!(keywords[22], "Wireless sensor networks");
    }

    #[tokio::test]
    async fn test_networks_in_cse_scenario() {
        let service = service().await;

        let all = service.search("networks", Department::Cse, false).await.unwrap();
        let specializations: Vec<&str> = all.iter().map(|r| r.specialization.as_str()).collect();
        for expected in [
            "Wireless sensor networks",
            "Networks, Internet of things",
            "Machine learning, Wireless networks",
            "Wireless networks, AR/VR",
            "Wireless networks, image processing",
        ] {
            assert!(specializations.contains(&expected), "missing {expected}");
        }

        let teaching = service.search("networks", Department::Cse, true).await.unwrap();
        assert!(teaching.iter().all(|r| r.currently_associated));
    }

    #[tokio::test]
    async fn test_ai_matches_regardless_of_case() {
        let service = service().await;

        for department in Department::ALL {
            for teaching in [false, true] {
                assert_eq!(
                    service.search("AI", department, teaching).await.unwrap(),
                    service.search("ai", department, teaching).await.unwrap()
                );
            }
        }
    }
}
