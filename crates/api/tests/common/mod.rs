#![allow(dead_code)]

use std::sync::Arc;

use archiveand_api::auth::jwt::{generate_access_token, JwtConfig};
use archiveand_api::config::ServerConfig;
use archiveand_api::router::build_app_router;
use archiveand_api::state::AppState;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            audience: None,
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router, with the production middleware stack,
/// over the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Mint a bearer token for `user_id`, signed with the test secret.
pub fn token_for(user_id: Uuid) -> String {
    generate_access_token(user_id, &test_config().jwt).expect("token generation should succeed")
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a site for a fresh user and return `(user_id, token)`.
pub async fn new_user_with_site(pool: &PgPool, username: &str, theme: &str) -> (Uuid, String) {
    let user_id = Uuid::new_v4();
    let token = token_for(user_id);
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/user/site",
        &token,
        serde_json::json!({ "username": username, "color_theme": theme }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    (user_id, token)
}

/// Create a record as the holder of `token` and return its id.
pub async fn create_media(pool: &PgPool, token: &str, body: serde_json::Value) -> i64 {
    let response =
        post_json_auth(build_test_app(pool.clone()), "/api/v1/media", token, body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
