//! Repository CRUD tests: joined read views, technology junctions,
//! partial updates and constraint violations.

use sqlx::PgPool;
use talentdesk_core::roles::{ROLE_ADMIN, ROLE_TEAM_MEMBER};
use talentdesk_core::types::DbId;
use talentdesk_db::models::client::CreateClient;
use talentdesk_db::models::department::CreateDepartment;
use talentdesk_db::models::employee::{CreateEmployee, UpdateEmployee};
use talentdesk_db::models::project::{CreateProject, UpdateProject};
use talentdesk_db::models::technology::CreateTechnology;
use talentdesk_db::repositories::{
    ClientRepo, DepartmentRepo, EmployeeRepo, ProjectRepo, RoleRepo, TechnologyRepo,
};

const ACTOR: &str = "Test Admin";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn role_id(pool: &PgPool, name: &str) -> DbId {
    RoleRepo::find_by_name(pool, name).await.unwrap().unwrap().id
}

async fn technology(pool: &PgPool, name: &str) -> DbId {
    TechnologyRepo::create(
        pool,
        &CreateTechnology {
            name: name.to_string(),
            department_id: None,
        },
        ACTOR,
    )
    .await
    .unwrap()
    .id
}

fn new_employee(name: &str, code: &str, role_id: DbId) -> CreateEmployee {
    CreateEmployee {
        name: name.to_string(),
        employee_code: code.to_string(),
        email: format!("{code}@example.com"),
        phone_no: None,
        password_hash: "not-a-real-hash".to_string(),
        role_id,
        designation_id: None,
        department_id: None,
        reporting_to: None,
        joining_date: None,
        relieving_date: None,
        projection: None,
        profile: None,
        technology_ids: vec![],
    }
}

fn is_violation(err: &sqlx::Error, code: &str, constraint: Option<&str>) -> bool {
    match err {
        sqlx::Error::Database(db) => {
            db.code().as_deref() == Some(code)
                && (constraint.is_none() || db.constraint() == constraint)
        }
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_employee_view_resolves_names(pool: PgPool) {
    let admin_role = role_id(&pool, ROLE_ADMIN).await;
    let member_role = role_id(&pool, ROLE_TEAM_MEMBER).await;
    let rust = technology(&pool, "Rust").await;
    let go = technology(&pool, "Go").await;
    let dept = DepartmentRepo::create(
        &pool,
        &CreateDepartment {
            name: "Engineering".to_string(),
        },
        ACTOR,
    )
    .await
    .unwrap();

    let manager = EmployeeRepo::create(&pool, &new_employee("Mia Manager", "E001", admin_role), ACTOR)
        .await
        .unwrap();

    let mut input = new_employee("Dev Person", "E002", member_role);
    input.reporting_to = Some(manager.id);
    input.department_id = Some(dept.id);
    input.technology_ids = vec![rust, go];
    let dev = EmployeeRepo::create(&pool, &input, ACTOR).await.unwrap();

    let view = EmployeeRepo::find_response_by_id(&pool, dev.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(view.role, ROLE_TEAM_MEMBER);
    assert_eq!(view.reporting_to.as_deref(), Some("Mia Manager"));
    assert_eq!(view.department.as_deref(), Some("Engineering"));
    assert_eq!(view.technologies, vec!["Go", "Rust"], "sorted by name");
    assert!(view.designation.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_employee_update_replaces_technologies_only_when_present(pool: PgPool) {
    let member_role = role_id(&pool, ROLE_TEAM_MEMBER).await;
    let rust = technology(&pool, "Rust").await;
    let go = technology(&pool, "Go").await;

    let mut input = new_employee("Tech Person", "E010", member_role);
    input.technology_ids = vec![rust];
    let emp = EmployeeRepo::create(&pool, &input, ACTOR).await.unwrap();

    // Untouched when `technology_ids` is None.
    let rename = UpdateEmployee {
        projection: Some("Bench".to_string()),
        ..Default::default()
    };
    EmployeeRepo::update(&pool, emp.id, &rename, "Editor")
        .await
        .unwrap()
        .unwrap();
    let view = EmployeeRepo::find_response_by_id(&pool, emp.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(view.technologies, vec!["Rust"]);
    assert_eq!(view.projection.as_deref(), Some("Bench"));
    assert_eq!(view.updated_by.as_deref(), Some("Editor"));

    // Replaced when present.
    let replace = UpdateEmployee {
        technology_ids: Some(vec![go]),
        ..Default::default()
    };
    EmployeeRepo::update(&pool, emp.id, &replace, "Editor")
        .await
        .unwrap()
        .unwrap();
    let view = EmployeeRepo::find_response_by_id(&pool, emp.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(view.technologies, vec!["Go"]);
    assert_eq!(view.name, "Tech Person");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_lookup_carries_role_name(pool: PgPool) {
    let admin_role = role_id(&pool, ROLE_ADMIN).await;
    EmployeeRepo::create(&pool, &new_employee("Root User", "E100", admin_role), ACTOR)
        .await
        .unwrap();

    let login = EmployeeRepo::find_login_by_email(&pool, "E100@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(login.role, ROLE_ADMIN);
    assert_eq!(login.name, "Root User");
    assert!(login.is_active);

    let none = EmployeeRepo::find_login_by_email(&pool, "nobody@example.com")
        .await
        .unwrap();
    assert!(none.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_employee_email_rejected(pool: PgPool) {
    let role = role_id(&pool, ROLE_TEAM_MEMBER).await;
    EmployeeRepo::create(&pool, &new_employee("First Person", "E200", role), ACTOR)
        .await
        .unwrap();

    let mut dup = new_employee("Second Person", "E201", role);
    dup.email = "E200@example.com".to_string();
    let err = EmployeeRepo::create(&pool, &dup, ACTOR).await.unwrap_err();
    assert!(
        is_violation(&err, "23505", Some("uq_employees_email")),
        "unexpected error: {err:?}"
    );
}

// ---------------------------------------------------------------------------
// Departments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_department_name_rejected(pool: PgPool) {
    let input = CreateDepartment {
        name: "Operations".to_string(),
    };
    DepartmentRepo::create(&pool, &input, ACTOR).await.unwrap();

    let err = DepartmentRepo::create(&pool, &input, ACTOR).await.unwrap_err();
    assert!(is_violation(&err, "23505", Some("uq_departments_name")));

    let all = DepartmentRepo::list(&pool, true).await.unwrap();
    assert_eq!(all.len(), 1, "no second row inserted");
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_view_and_partial_update(pool: PgPool) {
    let client = ClientRepo::create(
        &pool,
        &CreateClient {
            name: "Globex".to_string(),
            line_of_business: Some("Energy".to_string()),
            country: None,
            sales_employee_id: None,
        },
        ACTOR,
    )
    .await
    .unwrap();
    let rust = technology(&pool, "Rust").await;

    let project = ProjectRepo::create(
        &pool,
        &CreateProject {
            name: "Turbine".to_string(),
            client_id: client.id,
            technical_project_manager_id: None,
            sales_contact_id: None,
            pmo_id: None,
            sow_submitted_date: None,
            sow_signed_date: None,
            sow_valid_till: None,
            sow_last_extended_date: None,
            technology_ids: vec![rust],
        },
        ACTOR,
    )
    .await
    .unwrap();

    let update = UpdateProject {
        name: Some("Turbine v2".to_string()),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, project.id, &update, ACTOR)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.client_id, client.id);

    let view = ProjectRepo::find_response_by_id(&pool, project.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(view.name, "Turbine v2");
    assert_eq!(view.client, "Globex");
    assert_eq!(view.technologies, vec!["Rust"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_with_unknown_client_rejected(pool: PgPool) {
    let err = ProjectRepo::create(
        &pool,
        &CreateProject {
            name: "Orphan".to_string(),
            client_id: 424_242,
            technical_project_manager_id: None,
            sales_contact_id: None,
            pmo_id: None,
            sow_submitted_date: None,
            sow_signed_date: None,
            sow_valid_till: None,
            sow_last_extended_date: None,
            technology_ids: vec![],
        },
        ACTOR,
    )
    .await
    .unwrap_err();
    assert!(is_violation(&err, "23503", None), "unexpected error: {err:?}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_row_returns_none(pool: PgPool) {
    let result = ProjectRepo::update(&pool, 77_777, &UpdateProject::default(), ACTOR)
        .await
        .unwrap();
    assert!(result.is_none());
}
