//! Resolve the names carried by request bodies into foreign key ids.
//!
//! Every lookup that finds nothing fails with
//! [`CoreError::UnknownReference`], so handlers resolve all references
//! before writing anything.

use std::future::Future;

use sqlx::PgPool;
use talentdesk_core::error::CoreError;
use talentdesk_core::types::DbId;
use talentdesk_core::validation::normalize_names;
use talentdesk_db::repositories::{
    ClientRepo, DepartmentRepo, DesignationRepo, EmployeeRepo, ProjectRepo, RoleRepo, SowRepo,
    TechnologyRepo, TrainingRepo,
};

use crate::error::{AppError, AppResult};

fn unknown(entity: &'static str, name: &str) -> AppError {
    AppError::Core(CoreError::UnknownReference {
        entity,
        name: name.to_string(),
    })
}

/// Resolve an optional name with `resolve`, passing `None` through.
pub async fn optional<'a, F, Fut>(name: Option<&'a str>, resolve: F) -> AppResult<Option<DbId>>
where
    F: FnOnce(&'a str) -> Fut,
    Fut: Future<Output = AppResult<DbId>>,
{
    match name {
        Some(name) => resolve(name).await.map(Some),
        None => Ok(None),
    }
}

pub async fn role_id(pool: &PgPool, name: &str) -> AppResult<DbId> {
    let name = name.trim();
    RoleRepo::find_by_name(pool, name)
        .await?
        .map(|r| r.id)
        .ok_or_else(|| unknown("Role", name))
}

pub async fn department_id(pool: &PgPool, name: &str) -> AppResult<DbId> {
    let name = name.trim();
    DepartmentRepo::find_by_name(pool, name)
        .await?
        .map(|d| d.id)
        .ok_or_else(|| unknown("Department", name))
}

pub async fn designation_id(pool: &PgPool, name: &str) -> AppResult<DbId> {
    let name = name.trim();
    DesignationRepo::find_by_name(pool, name)
        .await?
        .map(|d| d.id)
        .ok_or_else(|| unknown("Designation", name))
}

/// Employees are referenced by display name.
pub async fn employee_id(pool: &PgPool, name: &str) -> AppResult<DbId> {
    let name = name.trim();
    EmployeeRepo::find_by_name(pool, name)
        .await?
        .map(|e| e.id)
        .ok_or_else(|| unknown("Employee", name))
}

pub async fn client_id(pool: &PgPool, name: &str) -> AppResult<DbId> {
    let name = name.trim();
    ClientRepo::find_by_name(pool, name)
        .await?
        .map(|c| c.id)
        .ok_or_else(|| unknown("Client", name))
}

pub async fn project_id(pool: &PgPool, name: &str) -> AppResult<DbId> {
    let name = name.trim();
    ProjectRepo::find_by_name(pool, name)
        .await?
        .map(|p| p.id)
        .ok_or_else(|| unknown("Project", name))
}

/// SOWs are referenced by title.
pub async fn sow_id(pool: &PgPool, title: &str) -> AppResult<DbId> {
    let title = title.trim();
    SowRepo::find_by_title(pool, title)
        .await?
        .map(|s| s.id)
        .ok_or_else(|| unknown("SOW", title))
}

/// Trainings have no unique name and are referenced by id.
pub async fn training_id(pool: &PgPool, id: DbId) -> AppResult<DbId> {
    TrainingRepo::find_by_id(pool, id)
        .await?
        .map(|t| t.id)
        .ok_or_else(|| unknown("Training", &id.to_string()))
}

/// Resolve a list of technology names, failing on the first unknown one.
///
/// Names are trimmed and de-duplicated first; the returned ids follow the
/// order of the normalized names.
pub async fn technology_ids(pool: &PgPool, names: &[String]) -> AppResult<Vec<DbId>> {
    let names = normalize_names(names);
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let found = TechnologyRepo::find_by_names(pool, &names).await?;
    names
        .iter()
        .map(|name| {
            found
                .iter()
                .find(|t| &t.name == name)
                .map(|t| t.id)
                .ok_or_else(|| unknown("Technology", name))
        })
        .collect()
}

/// Resolve an optional technology list; `None` means "leave unchanged".
pub async fn optional_technology_ids(
    pool: &PgPool,
    names: Option<&[String]>,
) -> AppResult<Option<Vec<DbId>>> {
    match names {
        Some(names) => technology_ids(pool, names).await.map(Some),
        None => Ok(None),
    }
}
