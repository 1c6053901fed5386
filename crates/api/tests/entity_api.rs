//! HTTP tests for name-based references, joined read views and
//! per-resource validation.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, put_json_auth, token_for};
use serde_json::{json, Value};
use sqlx::PgPool;
use talentdesk_core::roles::{
    ROLE_ADMIN, ROLE_DIRECTOR, ROLE_PROJECT_MANAGER, ROLE_TEAM_LEAD, ROLE_TEAM_MEMBER,
};

fn admin() -> String {
    token_for(ROLE_ADMIN, "Ava Admin")
}

fn manager() -> String {
    token_for(ROLE_PROJECT_MANAGER, "Pat Manager")
}

/// POST as admin and return the `data` object, asserting 201.
async fn create(pool: &PgPool, uri: &str, body: Value) -> Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, uri, body, &admin()).await;
    let status = response.status();
    let json = body_json(response).await;
    assert_eq!(status, StatusCode::CREATED, "POST {uri}: {json}");
    json["data"].clone()
}

fn employee_body(name: &str, code: &str) -> Value {
    json!({
        "name": name,
        "employee_code": code,
        "email": format!("{}@example.com", code.to_lowercase()),
        "password": "long-enough-password",
        "role": ROLE_TEAM_MEMBER,
    })
}

async fn employee_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn employee_view_uses_names_and_hides_password(pool: PgPool) {
    create(&pool, "/api/departments", json!({ "name": "Engineering" })).await;
    create(&pool, "/api/designations", json!({ "name": "Senior Engineer" })).await;
    create(&pool, "/api/technologies", json!({ "name": "Rust" })).await;
    create(&pool, "/api/technologies", json!({ "name": "Go" })).await;
    create(&pool, "/api/employees", employee_body("Mia Manager", "E001")).await;

    let mut body = employee_body("Noah Dev", "E002");
    body["department"] = json!("Engineering");
    body["designation"] = json!("Senior Engineer");
    body["reporting_to"] = json!("Mia Manager");
    body["technologies"] = json!(["Rust", " Go ", "Rust"]);
    let employee = create(&pool, "/api/employees", body).await;

    assert_eq!(employee["role"], ROLE_TEAM_MEMBER);
    assert_eq!(employee["department"], "Engineering");
    assert_eq!(employee["designation"], "Senior Engineer");
    assert_eq!(employee["reporting_to"], "Mia Manager");
    assert_eq!(employee["technologies"], json!(["Go", "Rust"]));
    assert!(employee.get("password_hash").is_none());
    assert!(employee.get("password").is_none());
    assert!(employee.get("department_id").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_designation_writes_nothing(pool: PgPool) {
    let before = employee_count(&pool).await;

    let mut body = employee_body("Zoe Ghost", "E404");
    body["designation"] = json!("Chief Wizard");
    body["technologies"] = json!([]);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/employees", body, &admin()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNKNOWN_REFERENCE");
    assert!(json["error"].as_str().unwrap().contains("Chief Wizard"));

    assert_eq!(employee_count(&pool).await, before);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_technology_writes_nothing(pool: PgPool) {
    create(&pool, "/api/technologies", json!({ "name": "Rust" })).await;
    let before = employee_count(&pool).await;

    let mut body = employee_body("Uma Typo", "E405");
    body["technologies"] = json!(["Rust", "Rusty"]);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/employees", body, &admin()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "UNKNOWN_REFERENCE");
    assert_eq!(employee_count(&pool).await, before);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_with_unknown_reference_changes_nothing(pool: PgPool) {
    let id = create(&pool, "/api/employees", employee_body("Ike Steady", "E406")).await["id"]
        .as_i64()
        .unwrap();
    let uri = format!("/api/employees/{id}");

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &uri,
        json!({ "name": "Ike Renamed", "designation": "Chief Wizard" }),
        &manager(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "UNKNOWN_REFERENCE");

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, &uri, &admin()).await).await;
    assert_eq!(json["data"]["name"], "Ike Steady");
    assert_eq!(json["data"]["updated_by"], Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn employee_duplicate_email_conflicts(pool: PgPool) {
    create(&pool, "/api/employees", employee_body("Ana One", "E010")).await;

    let mut body = employee_body("Ana Two", "E011");
    body["email"] = json!("e010@example.com");

    let app = common::build_test_app(pool);
    let response = post_json_auth(app, "/api/employees", body, &admin()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert!(json["error"].as_str().unwrap().contains("email"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn employee_create_validates_fields(pool: PgPool) {
    let mut body = employee_body("Bo", "E020");
    body["email"] = json!("not-an-email");
    body["password"] = json!("short");

    let app = common::build_test_app(pool);
    let response = post_json_auth(app, "/api/employees", body, &admin()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("email"), "got: {message}");
    assert!(message.contains("name"), "got: {message}");
    assert!(message.contains("password"), "got: {message}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn employee_name_is_trimmed_before_validation(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/employees", employee_body("  Al  ", "E050"), &admin()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(employee_count(&pool).await, 0);

    let mut body = employee_body("  Ada Lovelace ", "E051");
    body["email"] = json!("  ada@example.com ");
    let employee = create(&pool, "/api/employees", body).await;
    assert_eq!(employee["name"], "Ada Lovelace");
    assert_eq!(employee["email"], "ada@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn relieving_before_joining_is_rejected(pool: PgPool) {
    let mut body = employee_body("Cal Dates", "E030");
    body["joining_date"] = json!("2024-06-01");
    body["relieving_date"] = json!("2024-05-01");

    let app = common::build_test_app(pool);
    let response = post_json_auth(app, "/api/employees", body, &admin()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn employee_update_replaces_technologies_only_when_given(pool: PgPool) {
    create(&pool, "/api/technologies", json!({ "name": "Rust" })).await;
    create(&pool, "/api/technologies", json!({ "name": "Kotlin" })).await;
    let mut body = employee_body("Eli Swap", "E040");
    body["technologies"] = json!(["Rust"]);
    let id = create(&pool, "/api/employees", body).await["id"].as_i64().unwrap();
    let uri = format!("/api/employees/{id}");

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(app, &uri, json!({ "projection": "Bench" }), &manager()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["projection"], "Bench");
    assert_eq!(json["data"]["technologies"], json!(["Rust"]));

    let app = common::build_test_app(pool);
    let response =
        put_json_auth(app, &uri, json!({ "technologies": ["Kotlin"] }), &manager()).await;
    assert_eq!(body_json(response).await["data"]["technologies"], json!(["Kotlin"]));
}

// ---------------------------------------------------------------------------
// Clients, projects, SOWs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_resolves_client_people_and_technologies(pool: PgPool) {
    create(&pool, "/api/employees", employee_body("Tom Lead", "E100")).await;
    create(&pool, "/api/technologies", json!({ "name": "React" })).await;
    create(
        &pool,
        "/api/clients",
        json!({ "name": "Acme Corp", "country": "NL", "sales_employee": "Tom Lead" }),
    )
    .await;

    let project = create(
        &pool,
        "/api/projects",
        json!({
            "name": "Portal",
            "client": "Acme Corp",
            "technical_project_manager": "Tom Lead",
            "sow_submitted_date": "2024-01-10",
            "sow_signed_date": "2024-02-01",
            "technologies": ["React"],
        }),
    )
    .await;

    assert_eq!(project["client"], "Acme Corp");
    assert_eq!(project["technical_project_manager"], "Tom Lead");
    assert_eq!(project["pmo"], Value::Null);
    assert_eq!(project["technologies"], json!(["React"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_requires_known_client(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/projects",
        json!({ "name": "Orphan", "client": "Nobody Inc" }),
        &manager(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "UNKNOWN_REFERENCE");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn sow_requirement_references_sow_by_title(pool: PgPool) {
    create(&pool, "/api/designations", json!({ "name": "Developer" })).await;
    create(&pool, "/api/sows", json!({ "title": "SOW Alpha", "status": "Draft" })).await;

    let requirement = create(
        &pool,
        "/api/sow-requirements",
        json!({ "sow": "SOW Alpha", "designation": "Developer", "team_size": 3 }),
    )
    .await;
    assert_eq!(requirement["sow"], "SOW Alpha");
    assert_eq!(requirement["designation"], "Developer");
    assert_eq!(requirement["team_size"], 3);

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/sow-requirements",
        json!({ "sow": "SOW Alpha", "team_size": 0 }),
        &manager(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn manager_may_soft_delete_sows_but_not_clients(pool: PgPool) {
    let sow = create(&pool, "/api/sows", json!({ "title": "SOW Beta" })).await;
    let client = create(&pool, "/api/clients", json!({ "name": "Globex" })).await;

    let app = common::build_test_app(pool.clone());
    let response = common::patch_auth(
        app,
        &format!("/api/sows/{}", sow["id"]),
        &manager(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = common::patch_auth(
        app,
        &format!("/api/clients/{}", client["id"]),
        &manager(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Trainings and people development
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn training_dates_are_checked_on_create_and_merged_update(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/trainings",
        json!({ "topic": "Async Rust", "start_date": "2024-03-10", "end_date": "2024-03-01" }),
        &manager(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let training = create(
        &pool,
        "/api/trainings",
        json!({ "topic": "Async Rust", "start_date": "2024-03-10", "end_date": "2024-03-12" }),
    )
    .await;

    let lead = token_for(ROLE_TEAM_LEAD, "Lina Lead");
    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/trainings/{}", training["id"]),
        json!({ "end_date": "2024-03-05" }),
        &lead,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn training_team_links_training_and_employee(pool: PgPool) {
    create(&pool, "/api/employees", employee_body("Rae Trainee", "E200")).await;
    let training = create(&pool, "/api/trainings", json!({ "topic": "SQL Basics" })).await;

    let member = create(
        &pool,
        "/api/training-teams",
        json!({ "training_id": training["id"], "employee": "Rae Trainee" }),
    )
    .await;
    assert_eq!(member["training"], "SQL Basics");
    assert_eq!(member["employee"], "Rae Trainee");

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/training-teams",
        json!({ "training_id": 987654, "employee": "Rae Trainee" }),
        &manager(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "UNKNOWN_REFERENCE");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn team_lead_can_write_blogs_but_not_best_performers(pool: PgPool) {
    create(&pool, "/api/employees", employee_body("Wen Writer", "E300")).await;
    let lead = token_for(ROLE_TEAM_LEAD, "Lina Lead");

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/blogs",
        json!({ "title": "Ownership in practice", "author": "Wen Writer" }),
        &lead,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let blog = body_json(response).await;
    assert_eq!(blog["data"]["author"], "Wen Writer");
    assert_eq!(blog["data"]["created_by"], "Lina Lead");

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/best-performers",
        json!({ "employee": "Wen Writer", "award": "Spot" }),
        &lead,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn lead_enquiry_and_success_story_round_trip_names(pool: PgPool) {
    create(&pool, "/api/employees", employee_body("Sia Sales", "E400")).await;
    create(&pool, "/api/technologies", json!({ "name": "Java" })).await;
    create(&pool, "/api/clients", json!({ "name": "Initech" })).await;

    let enquiry = create(
        &pool,
        "/api/lead-enquiries",
        json!({
            "company_name": "Initech",
            "raised_by": "Sia Sales",
            "assigned_to": "Sia Sales",
            "enquiry_date": "2024-04-02",
            "technologies": ["Java"],
        }),
    )
    .await;
    assert_eq!(enquiry["raised_by"], "Sia Sales");
    assert_eq!(enquiry["technologies"], json!(["Java"]));

    let story = create(
        &pool,
        "/api/success-stories",
        json!({ "client": "Initech", "assigned_to": "Sia Sales", "status": "Drafting" }),
    )
    .await;
    assert_eq!(story["client"], "Initech");
    assert_eq!(story["project"], Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn roles_are_listed_for_any_caller(pool: PgPool) {
    let app = common::build_test_app(pool);
    let member = token_for(ROLE_TEAM_MEMBER, "Tia Member");
    let response = get_auth(app, "/api/roles", &member).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Admin", "Director", "Project Manager", "Team Lead", "Team Member"]
    );
}

// ---------------------------------------------------------------------------
// Reactivation across every resource
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn only_admin_reactivates_any_resource(pool: PgPool) {
    let employee = create(&pool, "/api/employees", employee_body("Ray Active", "E500")).await;
    let client = create(&pool, "/api/clients", json!({ "name": "Umbrella" })).await;
    let sow = create(&pool, "/api/sows", json!({ "title": "SOW Gamma" })).await;
    let training = create(&pool, "/api/trainings", json!({ "topic": "Tokio" })).await;

    let mut resources = vec![
        ("/api/employees", employee),
        ("/api/clients", client),
        ("/api/sows", sow),
        ("/api/trainings", training.clone()),
    ];
    let others = [
        ("/api/departments", json!({ "name": "Quality" })),
        ("/api/designations", json!({ "name": "Architect" })),
        ("/api/technologies", json!({ "name": "Kotlin" })),
        ("/api/projects", json!({ "name": "Harbor", "client": "Umbrella" })),
        ("/api/sow-requirements", json!({ "sow": "SOW Gamma", "team_size": 2 })),
        ("/api/lead-enquiries", json!({ "company_name": "Hooli" })),
        ("/api/success-stories", json!({ "client": "Umbrella" })),
        ("/api/blogs", json!({ "title": "Lifetimes", "author": "Ray Active" })),
        ("/api/best-performers", json!({ "employee": "Ray Active" })),
        (
            "/api/training-teams",
            json!({ "training_id": training["id"], "employee": "Ray Active" }),
        ),
    ];
    for (uri, body) in others {
        resources.push((uri, create(&pool, uri, body).await));
    }
    assert_eq!(resources.len(), 14);

    // Director passes every update policy, so a 403 here comes from the
    // reactivation rule rather than RBAC.
    let director = token_for(ROLE_DIRECTOR, "Dan Director");
    for (uri, record) in &resources {
        let item_uri = format!("{uri}/{}", record["id"]);

        let app = common::build_test_app(pool.clone());
        let response = common::patch_auth(app, &item_uri, &admin()).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT, "PATCH {item_uri}");

        let app = common::build_test_app(pool.clone());
        let response =
            put_json_auth(app, &item_uri, json!({ "is_active": true }), &director).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "PUT {item_uri}");

        let app = common::build_test_app(pool.clone());
        let response = get_auth(app, &item_uri, &admin()).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {item_uri}");
        assert_eq!(
            body_json(response).await["data"]["is_active"],
            false,
            "{item_uri} stays inactive"
        );
    }
}
