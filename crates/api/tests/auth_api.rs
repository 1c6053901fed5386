//! HTTP-level tests for login, `/auth/me` and bootstrap provisioning.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, seed_employee, TEST_PASSWORD};
use serde_json::json;
use sqlx::PgPool;
use talentdesk_api::auth::jwt::validate_token;
use talentdesk_api::bootstrap;
use talentdesk_api::config::BootstrapAdmin;
use talentdesk_core::roles::{ROLE_ADMIN, ROLE_DIRECTOR, ROLE_TEAM_MEMBER};
use talentdesk_db::repositories::EmployeeRepo;

async fn login(pool: &PgPool, email: &str, password: &str) -> axum::response::Response {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/auth/login",
        json!({ "email": email, "password": password }),
    )
    .await
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_success_returns_bearer_token_with_role_and_name(pool: PgPool) {
    seed_employee(&pool, "Dana Reyes", "dana@example.com", ROLE_DIRECTOR).await;

    let response = login(&pool, "dana@example.com", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["token_type"], "Bearer");
    assert_eq!(json["expires_in"], 120 * 60);
    assert_eq!(json["role"], ROLE_DIRECTOR);
    assert_eq!(json["name"], "Dana Reyes");

    let token = json["token"].as_str().expect("token is a string");
    let claims = validate_token(token, &common::test_config().jwt).expect("token validates");
    assert_eq!(claims.sub, "dana@example.com");
    assert_eq!(claims.role, ROLE_DIRECTOR);
    assert_eq!(claims.name, "Dana Reyes");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_password_and_unknown_email_look_the_same(pool: PgPool) {
    seed_employee(&pool, "Sam Ortiz", "sam@example.com", ROLE_TEAM_MEMBER).await;

    let wrong = login(&pool, "sam@example.com", "not-the-password").await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    let wrong = body_json(wrong).await;

    let unknown = login(&pool, "nobody@example.com", TEST_PASSWORD).await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    let unknown = body_json(unknown).await;

    assert_eq!(wrong["code"], "UNAUTHORIZED");
    assert_eq!(wrong["error"], unknown["error"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inactive_employee_cannot_log_in(pool: PgPool) {
    let id = seed_employee(&pool, "Lee Park", "lee@example.com", ROLE_TEAM_MEMBER).await;
    assert!(EmployeeRepo::deactivate(&pool, id, "Test Admin").await.unwrap());

    let response = login(&pool, "lee@example.com", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// /auth/me
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_returns_token_identity(pool: PgPool) {
    seed_employee(&pool, "Ava Chen", "ava@example.com", ROLE_ADMIN).await;
    let json = body_json(login(&pool, "ava@example.com", TEST_PASSWORD).await).await;
    let token = json["token"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/auth/me", token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let me = body_json(response).await;
    assert_eq!(me["email"], "ava@example.com");
    assert_eq!(me["role"], ROLE_ADMIN);
    assert_eq!(me["name"], "Ava Chen");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_requires_a_valid_token(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    assert_eq!(get(app, "/api/auth/me").await.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/auth/me", "not.a.jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Bootstrap admin
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn bootstrap_admin_is_created_once_and_can_log_in(pool: PgPool) {
    let admin = BootstrapAdmin {
        email: "root@example.com".to_string(),
        password: "bootstrap-password".to_string(),
        name: "Administrator".to_string(),
    };

    assert!(bootstrap::ensure_admin(&pool, &admin).await.unwrap());
    assert!(!bootstrap::ensure_admin(&pool, &admin).await.unwrap());

    let response = login(&pool, "root@example.com", "bootstrap-password").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["role"], ROLE_ADMIN);
}
