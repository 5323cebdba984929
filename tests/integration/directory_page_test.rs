// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{seeded_memory_repo, seeded_sqlite_repo, test_app};
use axum_test::TestServer;
use techguru::presentation::views::directory_page::{no_match_message, PROMPT_MESSAGE};

#[tokio::test]
async fn test_landing_page_prompts_for_query() {
    let server = TestServer::new(test_app(seeded_memory_repo().await)).unwrap();

    let response = server.get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("SME Tech Guru"));
    assert!(html.contains(PROMPT_MESSAGE));
    assert!(html.contains("name=\"teaching\" value=\"on\" checked"));
    assert!(!html.contains("<table"));
}

#[tokio::test]
async fn test_keywords_list_it_before_cse() {
    let server = TestServer::new(test_app(seeded_memory_repo().await)).unwrap();

    let html = server.get("/").await.text();

    let it_first = html.find("<li>Deep Learning</li>").expect("IT keyword");
    let cse_first = html.find("<li>Wireless sensor networks</li>").expect("CSE keyword");
    assert!(it_first < cse_first);
}

#[tokio::test]
async fn test_whitespace_only_query_is_treated_as_empty() {
    let server = TestServer::new(test_app(seeded_memory_repo().await)).unwrap();

    let html = server.get("/").add_query_param("q", "   ").await.text();

    assert!(html.contains(PROMPT_MESSAGE));
}

#[tokio::test]
async fn test_query_renders_both_department_tables() {
    let (_db, repo) = seeded_sqlite_repo().await;
    let server = TestServer::new(test_app(repo)).unwrap();

    let html = server
        .get("/")
        .add_query_param("q", "  Cloud  ")
        .add_query_param("submitted", "1")
        .await
        .text();

    assert!(html.contains("Faculty specializing in: <strong>Cloud</strong>"));
    assert!(html.contains("<table id=\"cse-results\">"));
    assert!(html.contains("<table id=\"it-results\">"));
    // Unchecked box: records no longer associated are listed too.
    assert!(html.contains("MS R.Kalpana"));
    assert!(html.contains("Dr. Senthil K"));
    assert!(!html.contains(" checked"));
}

#[tokio::test]
async fn test_checked_box_hides_faculty_no_longer_teaching() {
    let (_db, repo) = seeded_sqlite_repo().await;
    let server = TestServer::new(test_app(repo)).unwrap();

    let html = server
        .get("/")
        .add_query_param("q", "cloud")
        .add_query_param("teaching", "on")
        .add_query_param("submitted", "1")
        .await
        .text();

    assert!(html.contains("MS T. Vanaja"));
    assert!(!html.contains("<td>MS R.Kalpana</td>"));
    assert!(!html.contains("<td>Dr. Senthil K</td>"));
}

#[tokio::test]
async fn test_department_without_matches_shows_message() {
    let server = TestServer::new(test_app(seeded_memory_repo().await)).unwrap();

    let html = server
        .get("/")
        .add_query_param("q", "robotics")
        .add_query_param("submitted", "1")
        .await
        .text();

    assert!(html.contains(&no_match_message("CSE")));
    assert!(html.contains("<table id=\"it-results\">"));
    assert!(html.contains("Dr G.Ayyappan"));
}
