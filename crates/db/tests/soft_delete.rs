//! Integration tests for soft-delete behaviour.
//!
//! Exercises the repository layer against a real database to verify that:
//! - `deactivate` never removes the row, it only flips `is_active`
//! - Inactive rows are listed only when `include_inactive` is set
//! - Deactivation stamps `updated_by` / `updated_at`
//! - Deactivating twice still reports the row as found
//! - The pattern is consistent across entity types

use sqlx::PgPool;
use talentdesk_db::models::client::CreateClient;
use talentdesk_db::models::department::{CreateDepartment, UpdateDepartment};
use talentdesk_db::models::technology::CreateTechnology;
use talentdesk_db::repositories::{ClientRepo, DepartmentRepo, TechnologyRepo};

const ACTOR: &str = "Test Admin";

fn new_department(name: &str) -> CreateDepartment {
    CreateDepartment {
        name: name.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Test: deactivate keeps the row
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deactivate_keeps_row(pool: PgPool) {
    let dept = DepartmentRepo::create(&pool, &new_department("Engineering"), ACTOR)
        .await
        .unwrap();
    assert!(dept.is_active);
    assert_eq!(dept.created_by, ACTOR);
    assert!(dept.updated_by.is_none());

    let found = DepartmentRepo::deactivate(&pool, dept.id, "Other Admin")
        .await
        .unwrap();
    assert!(found, "deactivate should report the row as found");

    let after = DepartmentRepo::find_by_id(&pool, dept.id)
        .await
        .unwrap()
        .expect("row must still exist after soft delete");
    assert!(!after.is_active);
    assert_eq!(after.updated_by.as_deref(), Some("Other Admin"));
    assert!(after.updated_at.is_some());
}

// ---------------------------------------------------------------------------
// Test: list filtering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inactive_rows_listed_only_on_request(pool: PgPool) {
    let kept = DepartmentRepo::create(&pool, &new_department("Finance"), ACTOR)
        .await
        .unwrap();
    let gone = DepartmentRepo::create(&pool, &new_department("Legal"), ACTOR)
        .await
        .unwrap();
    DepartmentRepo::deactivate(&pool, gone.id, ACTOR)
        .await
        .unwrap();

    let active_only = DepartmentRepo::list(&pool, false).await.unwrap();
    assert!(active_only.iter().any(|d| d.id == kept.id));
    assert!(!active_only.iter().any(|d| d.id == gone.id));

    let all = DepartmentRepo::list(&pool, true).await.unwrap();
    assert!(all.iter().any(|d| d.id == kept.id));
    assert!(all.iter().any(|d| d.id == gone.id));

    // Active listing is a strict subset of the full listing.
    assert!(active_only.iter().all(|d| all.iter().any(|a| a.id == d.id)));
    assert!(active_only.len() < all.len());
}

// ---------------------------------------------------------------------------
// Test: idempotency and missing rows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deactivate_is_idempotent(pool: PgPool) {
    let dept = DepartmentRepo::create(&pool, &new_department("Marketing"), ACTOR)
        .await
        .unwrap();

    assert!(DepartmentRepo::deactivate(&pool, dept.id, ACTOR).await.unwrap());
    assert!(DepartmentRepo::deactivate(&pool, dept.id, ACTOR).await.unwrap());

    let after = DepartmentRepo::find_by_id(&pool, dept.id).await.unwrap().unwrap();
    assert!(!after.is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deactivate_missing_row_returns_false(pool: PgPool) {
    let found = DepartmentRepo::deactivate(&pool, 999_999, ACTOR).await.unwrap();
    assert!(!found);
}

// ---------------------------------------------------------------------------
// Test: reactivation through update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_can_reactivate(pool: PgPool) {
    let dept = DepartmentRepo::create(&pool, &new_department("Support"), ACTOR)
        .await
        .unwrap();
    DepartmentRepo::deactivate(&pool, dept.id, ACTOR).await.unwrap();

    let input = UpdateDepartment {
        is_active: Some(true),
        ..Default::default()
    };
    let updated = DepartmentRepo::update(&pool, dept.id, &input, ACTOR)
        .await
        .unwrap()
        .unwrap();
    assert!(updated.is_active);
    assert_eq!(updated.name, "Support", "name untouched by partial update");
}

// ---------------------------------------------------------------------------
// Test: consistent across entity types
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_consistent_across_entities(pool: PgPool) {
    let tech = TechnologyRepo::create(
        &pool,
        &CreateTechnology {
            name: "Rust".to_string(),
            department_id: None,
        },
        ACTOR,
    )
    .await
    .unwrap();
    let client = ClientRepo::create(
        &pool,
        &CreateClient {
            name: "Acme".to_string(),
            line_of_business: None,
            country: Some("NL".to_string()),
            sales_employee_id: None,
        },
        ACTOR,
    )
    .await
    .unwrap();

    assert!(TechnologyRepo::deactivate(&pool, tech.id, ACTOR).await.unwrap());
    assert!(ClientRepo::deactivate(&pool, client.id, ACTOR).await.unwrap());

    let tech_view = TechnologyRepo::find_response_by_id(&pool, tech.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!tech_view.is_active);
    assert!(TechnologyRepo::list(&pool, false).await.unwrap().is_empty());

    let client_view = ClientRepo::find_response_by_id(&pool, client.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!client_view.is_active);
    assert_eq!(ClientRepo::list(&pool, true).await.unwrap().len(), 1);
}
