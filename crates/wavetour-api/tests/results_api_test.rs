//! Athlete results endpoint tests.

mod support;

use axum::http::StatusCode;

use support::{app, get, sample_result, InMemoryStore};

#[tokio::test]
async fn test_list_results_default_page() {
    let store = InMemoryStore::with_results(vec![
        sample_result(1, 10, "Men", "MW"),
        sample_result(2, 10, "Women", "WW"),
    ]);
    let app = app(store);

    let (status, body) = get(&app, "/api/v1/athletes/results").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"].as_array().unwrap().len(), 2);
    assert_eq!(body["pagination"]["total"], 2);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["page_size"], 50);
}

#[tokio::test]
async fn test_list_results_filter_by_sex() {
    let store = InMemoryStore::with_results(vec![
        sample_result(1, 10, "Men", "MW"),
        sample_result(2, 10, "Women", "WW"),
        sample_result(3, 11, "Men", "MW"),
    ]);
    let app = app(store);

    let (status, body) = get(&app, "/api/v1/athletes/results?sex=Women").await;
    assert_eq!(status, StatusCode::OK);

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["result_id"], 2);
}

#[tokio::test]
async fn test_list_results_filter_by_event_and_division() {
    let store = InMemoryStore::with_results(vec![
        sample_result(1, 10, "Men", "MW"),
        sample_result(2, 10, "Men", "MF"),
        sample_result(3, 11, "Men", "MW"),
    ]);
    let app = app(store);

    let (status, body) =
        get(&app, "/api/v1/athletes/results?event_id=10&division_code=MW").await;
    assert_eq!(status, StatusCode::OK);

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["result_id"], 1);
    assert_eq!(body["pagination"]["total"], 1);
}

#[tokio::test]
async fn test_list_results_pagination_window() {
    let results = (1..=30)
        .map(|id| sample_result(id, 10, "Men", "MW"))
        .collect();
    let app = app(InMemoryStore::with_results(results));

    let (status, body) = get(&app, "/api/v1/athletes/results?page=3&page_size=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"].as_array().unwrap().len(), 10);
    assert_eq!(body["pagination"]["total_pages"], 3);

    // Third page of ten holds result ids 21..=30.
    assert_eq!(body["results"][0]["result_id"], 21);
}

#[tokio::test]
async fn test_list_results_validation_rejections() {
    let app = app(InMemoryStore::default());

    for (uri, field) in [
        ("/api/v1/athletes/results?page=-1", "page"),
        ("/api/v1/athletes/results?page_size=0", "page_size"),
        ("/api/v1/athletes/results?event_id=abc", "event_id"),
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "uri={}", uri);
        assert_eq!(body["field"], field, "uri={}", uri);
    }
}

#[tokio::test]
async fn test_empty_filter_values_are_ignored() {
    let store = InMemoryStore::with_results(vec![sample_result(1, 10, "Men", "MW")]);
    let app = app(store);

    let (status, body) = get(&app, "/api/v1/athletes/results?sex=&division_code=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 1);
}

#[tokio::test]
async fn test_results_payload_carries_denormalized_event_fields() {
    let app = app(InMemoryStore::with_results(vec![sample_result(
        1, 10, "Men", "MW",
    )]));

    let (_, body) = get(&app, "/api/v1/athletes/results").await;
    let result = &body["results"][0];
    assert_eq!(result["athlete_name"], "Athlete 1");
    assert_eq!(result["event_name"], "Event 10");
    assert_eq!(result["event_year"], 2025);
    assert_eq!(result["division_code"], "MW");
    assert_eq!(result["placement"], "1");
}
