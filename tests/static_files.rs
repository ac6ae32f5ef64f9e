mod common;

use axum_test::TestServer;
use site_backend::routes::analytics_router;
use sqlx::PgPool;

#[sqlx::test]
async fn test_serves_static_index(pool: PgPool) {
    let state = common::create_analytics_state(pool);
    let server = TestServer::new(analytics_router(state, "tests/fixtures/public")).unwrap();

    let response = server.get("/index.html").await;

    response.assert_status_ok();
    assert!(response.text().contains("static fixture"));
}

#[sqlx::test]
async fn test_unknown_path_is_not_found(pool: PgPool) {
    let state = common::create_analytics_state(pool);
    let server = TestServer::new(analytics_router(state, "tests/fixtures/public")).unwrap();

    server.get("/missing.css").await.assert_status_not_found();
}

#[sqlx::test]
async fn test_cors_allows_any_origin(pool: PgPool) {
    let state = common::create_analytics_state(pool);
    let server = TestServer::new(analytics_router(state, "tests/fixtures/public")).unwrap();

    let response = server
        .get("/api/stats")
        .add_header("Origin", "https://blog.example.net")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
}
