mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use serde_json::Value;
use site_backend::routes::analytics_router;
use sqlx::PgPool;

fn server(pool: PgPool) -> TestServer {
    let state = common::create_analytics_state(pool);
    TestServer::new(analytics_router(state, "tests/fixtures/public")).unwrap()
}

fn total(items: &Value) -> i64 {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["count"].as_i64().unwrap())
        .sum()
}

fn pages(json: &Value) -> Vec<(String, i64)> {
    json["mostVisitedPages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| {
            (
                p["page"].as_str().unwrap_or_default().to_string(),
                p["count"].as_i64().unwrap(),
            )
        })
        .collect()
}

#[sqlx::test]
async fn test_stats_last_day(pool: PgPool) {
    let now = Utc::now();
    for _ in 0..3 {
        common::insert_visit_at(&pool, Some("/home"), now - Duration::minutes(5)).await;
    }
    common::insert_visit_at(&pool, Some("/about"), now - Duration::minutes(5)).await;
    common::insert_visit_at(&pool, Some("/home"), now - Duration::days(3)).await;
    let server = server(pool);

    let response = server.get("/api/stats").add_query_param("period", "1d").await;

    response.assert_status_ok();
    let json = response.json::<Value>();

    assert_eq!(
        pages(&json),
        vec![("/home".to_string(), 3), ("/about".to_string(), 1)]
    );
    assert_eq!(total(&json["visitsOverTime"]), 4);
    assert_eq!(total(&json["visitsByHour"]), 4);
}

#[sqlx::test]
async fn test_stats_response_shape(pool: PgPool) {
    common::insert_visit(&pool, "/home").await;
    let server = server(pool);

    let json = server.get("/api/stats").await.json::<Value>();

    let day = &json["visitsOverTime"][0];
    assert!(day["date"].is_string());
    assert!(day["count"].is_i64());

    let hour = &json["visitsByHour"][0];
    let h = hour["hour"].as_i64().unwrap();
    assert!((0..24).contains(&h));
    assert!(hour["count"].is_i64());

    let page = &json["mostVisitedPages"][0];
    assert_eq!(page["page"], "/home");
    assert_eq!(page["count"], 1);
}

#[sqlx::test]
async fn test_stats_week_excludes_older_rows(pool: PgPool) {
    let now = Utc::now();
    common::insert_visit_at(&pool, Some("/recent"), now - Duration::days(2)).await;
    common::insert_visit_at(&pool, Some("/stale"), now - Duration::days(10)).await;
    let server = server(pool);

    let json = server
        .get("/api/stats")
        .add_query_param("period", "7d")
        .await
        .json::<Value>();

    assert_eq!(pages(&json), vec![("/recent".to_string(), 1)]);
    assert_eq!(total(&json["visitsOverTime"]), 1);
}

#[sqlx::test]
async fn test_stats_year_window(pool: PgPool) {
    let now = Utc::now();
    common::insert_visit_at(&pool, Some("/spring"), now - Duration::days(200)).await;
    common::insert_visit_at(&pool, Some("/ancient"), now - Duration::days(400)).await;
    let server = server(pool);

    let json = server
        .get("/api/stats")
        .add_query_param("period", "365d")
        .await
        .json::<Value>();

    assert_eq!(pages(&json), vec![("/spring".to_string(), 1)]);
}

#[sqlx::test]
async fn test_stats_unknown_period_means_all(pool: PgPool) {
    let now = Utc::now();
    common::insert_visit_at(&pool, Some("/home"), now - Duration::days(1000)).await;
    common::insert_visit_at(&pool, Some("/home"), now).await;
    let server = server(pool);

    let all = server
        .get("/api/stats")
        .add_query_param("period", "all")
        .await
        .json::<Value>();
    let bogus = server
        .get("/api/stats")
        .add_query_param("period", "bogus")
        .await
        .json::<Value>();
    let missing = server.get("/api/stats").await.json::<Value>();

    assert_eq!(all, bogus);
    assert_eq!(all, missing);
    assert_eq!(pages(&all), vec![("/home".to_string(), 2)]);
}

#[sqlx::test]
async fn test_stats_repeated_period_means_all(pool: PgPool) {
    let now = Utc::now();
    common::insert_visit_at(&pool, Some("/home"), now).await;
    common::insert_visit_at(&pool, Some("/home"), now - Duration::days(40)).await;
    let server = server(pool);

    let response = server.get("/api/stats?period=7d&period=1d").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(pages(&json), vec![("/home".to_string(), 2)]);
    assert_eq!(total(&json["visitsOverTime"]), 2);
}

#[sqlx::test]
async fn test_stats_top_pages_limited_to_ten(pool: PgPool) {
    for i in 0..15 {
        common::insert_visit(&pool, &format!("/page-{}", i)).await;
    }
    let server = server(pool);

    let json = server.get("/api/stats").await.json::<Value>();

    assert_eq!(json["mostVisitedPages"].as_array().unwrap().len(), 10);
    assert_eq!(total(&json["visitsOverTime"]), 15);
}

#[sqlx::test]
async fn test_stats_empty_table(pool: PgPool) {
    let server = server(pool);

    let response = server.get("/api/stats").await;

    response.assert_status_ok();
    response.assert_json(&serde_json::json!({
        "visitsOverTime": [],
        "visitsByHour": [],
        "mostVisitedPages": []
    }));
}

#[sqlx::test]
async fn test_stats_database_error(pool: PgPool) {
    sqlx::query("DROP TABLE visits").execute(&pool).await.unwrap();
    let server = server(pool);

    let response = server.get("/api/stats").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&serde_json::json!({ "error": "Failed to load statistics." }));
}
