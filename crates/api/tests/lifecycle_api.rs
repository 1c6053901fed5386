//! Soft-delete lifecycle, uniqueness and RBAC over HTTP, using departments
//! as the representative resource.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, get, get_auth, patch_auth, post_json_auth, put_json_auth, token_for,
};
use serde_json::json;
use sqlx::PgPool;
use talentdesk_core::roles::{ROLE_ADMIN, ROLE_DIRECTOR, ROLE_TEAM_MEMBER};

const ADMIN_NAME: &str = "Ava Admin";

fn admin() -> String {
    token_for(ROLE_ADMIN, ADMIN_NAME)
}

fn director() -> String {
    token_for(ROLE_DIRECTOR, "Dan Director")
}

async fn create_department(pool: &PgPool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/departments", json!({ "name": name }), &admin()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn department_count(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM departments WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_stamps_actor_and_starts_active(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/departments",
        json!({ "name": "Engineering" }),
        &admin(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Engineering");
    assert_eq!(json["data"]["is_active"], true);
    assert_eq!(json["data"]["created_by"], ADMIN_NAME);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_name_is_rejected_without_insert(pool: PgPool) {
    create_department(&pool, "Finance").await;

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/departments", json!({ "name": "Finance" }), &admin()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
    assert_eq!(department_count(&pool, "Finance").await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_name_is_a_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/departments", json!({ "name": "R&D 2" }), &admin()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(department_count(&pool, "R&D 2").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_name_is_a_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/departments", json!({ "name": "   " }), &admin()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(department_count(&pool, "").await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn name_length_is_checked_after_trimming(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/designations", json!({ "name": "  HR  " }), &admin()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let id = create_department(&pool, "  Legal  ").await;
    assert_eq!(department_count(&pool, "Legal").await, 1);

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/departments/{id}"),
        json!({ "name": "  IT " }),
        &admin(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(department_count(&pool, "Legal").await, 1);
}

// ---------------------------------------------------------------------------
// Soft delete and visibility
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_keeps_row_and_hides_it_from_non_admins(pool: PgPool) {
    let id = create_department(&pool, "Marketing").await;
    let kept = create_department(&pool, "Operations").await;
    let uri = format!("/api/departments/{id}");

    let app = common::build_test_app(pool.clone());
    assert_eq!(patch_auth(app, &uri, &admin()).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(department_count(&pool, "Marketing").await, 1);

    // Admin still reads it, flagged inactive.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get_auth(app, &uri, &admin()).await).await;
    assert_eq!(json["data"]["is_active"], false);
    assert_eq!(json["data"]["updated_by"], ADMIN_NAME);

    // Others are refused.
    let app = common::build_test_app(pool.clone());
    assert_eq!(get_auth(app, &uri, &director()).await.status(), StatusCode::FORBIDDEN);

    // Lists: admin sees both, director only the active one.
    let app = common::build_test_app(pool.clone());
    let all = body_json(get_auth(app, "/api/departments", &admin()).await).await;
    let app = common::build_test_app(pool);
    let active = body_json(get_auth(app, "/api/departments", &director()).await).await;

    let ids = |json: &serde_json::Value| -> Vec<i64> {
        json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["id"].as_i64().unwrap())
            .collect()
    };
    assert!(ids(&all).contains(&id));
    assert!(ids(&all).contains(&kept));
    assert_eq!(ids(&active), vec![kept]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_is_idempotent_and_404s_on_missing(pool: PgPool) {
    let id = create_department(&pool, "Legal").await;
    let uri = format!("/api/departments/{id}");

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        assert_eq!(patch_auth(app, &uri, &admin()).await.status(), StatusCode::NO_CONTENT);
    }

    let app = common::build_test_app(pool);
    let response = patch_auth(app, "/api/departments/999999", &admin()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn only_admin_can_reactivate(pool: PgPool) {
    let id = create_department(&pool, "Research").await;
    let uri = format!("/api/departments/{id}");
    let app = common::build_test_app(pool.clone());
    patch_auth(app, &uri, &admin()).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(app, &uri, json!({ "is_active": true }), &director()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(app, &uri, json!({ "is_active": true }), &admin()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["is_active"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_admin_may_rename_without_reactivating(pool: PgPool) {
    let id = create_department(&pool, "Support").await;
    let uri = format!("/api/departments/{id}");

    let app = common::build_test_app(pool);
    let response =
        put_json_auth(app, &uri, json!({ "name": "Customer Support" }), &director()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Customer Support");
    assert_eq!(json["data"]["updated_by"], "Dan Director");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn body_id_must_match_path(pool: PgPool) {
    let id = create_department(&pool, "Sales").await;

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/departments/{id}"),
        json!({ "id": id + 1, "name": "Inside Sales" }),
        &admin(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("ID mismatch"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rename_to_taken_name_conflicts(pool: PgPool) {
    create_department(&pool, "Design").await;
    let id = create_department(&pool, "Quality").await;

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/departments/{id}"),
        json!({ "name": "Design" }),
        &admin(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Role policies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_token_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    assert_eq!(get(app, "/api/departments").await.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn role_outside_policy_is_403(pool: PgPool) {
    let member = token_for(ROLE_TEAM_MEMBER, "Tia Member");

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/departments", json!({ "name": "Audit" }), &member).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let id = create_department(&pool, "Payroll").await;
    let app = common::build_test_app(pool.clone());
    let response = patch_auth(app, &format!("/api/departments/{id}"), &director()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Reads are open to every role.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/departments", &member).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_role_claim_is_403(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = token_for("Intern", "Ian Intern");
    let response = get_auth(app, "/api/departments", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
