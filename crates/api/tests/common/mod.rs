#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use talentdesk_api::auth::jwt::{generate_token, JwtConfig};
use talentdesk_api::auth::password::hash_password;
use talentdesk_api::config::ServerConfig;
use talentdesk_api::router::build_app_router;
use talentdesk_api::state::AppState;
use talentdesk_core::types::DbId;
use talentdesk_db::models::employee::CreateEmployee;
use talentdesk_db::repositories::{EmployeeRepo, RoleRepo};

/// Plaintext password given to every seeded employee.
pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: String::new(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            issuer: "talentdesk-test".to_string(),
            expiry_mins: 120,
        },
        bootstrap_admin: None,
    }
}

/// Full application router (same middleware stack as production) over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Mint a bearer token for a caller that need not exist in the database.
///
/// The auth extractor trusts the signed claims, so this is enough for
/// exercising role policies.
pub fn token_for(role: &str, name: &str) -> String {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    generate_token(&email, role, name, &test_config().jwt).expect("token generation")
}

/// Insert an active employee with `role` and [`TEST_PASSWORD`].
pub async fn seed_employee(pool: &PgPool, name: &str, email: &str, role: &str) -> DbId {
    let role_id = RoleRepo::find_by_name(pool, role)
        .await
        .unwrap()
        .expect("role is seeded")
        .id;
    let input = CreateEmployee {
        name: name.to_string(),
        employee_code: format!("EMP-{}", email.split('@').next().unwrap()),
        email: email.to_string(),
        phone_no: None,
        password_hash: hash_password(TEST_PASSWORD).unwrap(),
        role_id,
        designation_id: None,
        department_id: None,
        reporting_to: None,
        joining_date: None,
        relieving_date: None,
        projection: None,
        profile: None,
        technology_ids: vec![],
    };
    EmployeeRepo::create(pool, &input, "seed").await.unwrap().id
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body is JSON")
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn patch_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::PATCH, uri, Some(token), None).await
}
