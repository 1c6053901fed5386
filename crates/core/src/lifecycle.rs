//! Soft-delete lifecycle rules shared by every resource.
//!
//! Records are never physically removed. A "deleted" record has
//! `is_active = false`; it stays readable by admins, is hidden from
//! everybody else, and only an admin may bring it back.

use crate::error::CoreError;
use crate::roles::is_admin;
use crate::types::DbId;

/// Whether list queries issued on behalf of `role` should include
/// inactive (soft-deleted) rows.
pub fn include_inactive(role: &str) -> bool {
    is_admin(role)
}

/// Guard for single-record reads.
///
/// Non-admins asking for an inactive record get `Forbidden` rather than
/// `NotFound`.
pub fn ensure_visible(
    role: &str,
    is_active: bool,
    entity: &'static str,
    id: DbId,
) -> Result<(), CoreError> {
    if is_active || is_admin(role) {
        return Ok(());
    }
    Err(CoreError::Forbidden(format!(
        "{entity} with id {id} is inactive"
    )))
}

/// Guard for updates.
///
/// Rejects an `is_active: false -> true` transition unless the caller is an
/// admin. Any other combination (including deactivation through an update,
/// or editing an inactive record while leaving it inactive) is allowed.
pub fn ensure_reactivation_allowed(
    role: &str,
    current_is_active: bool,
    requested_is_active: Option<bool>,
    entity: &'static str,
    id: DbId,
) -> Result<(), CoreError> {
    if is_reactivation(current_is_active, requested_is_active) && !is_admin(role) {
        return Err(CoreError::Forbidden(format!(
            "Only an Admin can reactivate {entity} with id {id}"
        )));
    }
    Ok(())
}

/// Returns `true` when an update would move a record from inactive to active.
pub fn is_reactivation(current_is_active: bool, requested_is_active: Option<bool>) -> bool {
    !current_is_active && requested_is_active == Some(true)
}

/// Ensure the optional `id` carried in an update body matches the path id.
pub fn ensure_id_matches(path_id: DbId, body_id: Option<DbId>) -> Result<(), CoreError> {
    match body_id {
        Some(body_id) if body_id != path_id => Err(CoreError::Validation(format!(
            "ID mismatch: path id {path_id} does not match body id {body_id}"
        ))),
        _ => Ok(()),
    }
}

/// Reject a value already held by another record.
///
/// `holder` is the id of the record that currently holds the value (if any);
/// `current` is the record being updated, which may keep its own value.
pub fn ensure_unique(
    holder: Option<DbId>,
    current: Option<DbId>,
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), CoreError> {
    match holder {
        Some(id) if Some(id) != current => Err(CoreError::Conflict(format!(
            "{entity} with {field} '{value}' already exists"
        ))),
        _ => Ok(()),
    }
}
