//! Well-known role names and the role sets used by route policies.
//!
//! These must match the seed data in `20250101000001_create_roles.sql`.

pub const ROLE_ADMIN: &str = "Admin";
pub const ROLE_DIRECTOR: &str = "Director";
pub const ROLE_PROJECT_MANAGER: &str = "Project Manager";
pub const ROLE_TEAM_LEAD: &str = "Team Lead";
pub const ROLE_TEAM_MEMBER: &str = "Team Member";

/// Every role known to the system.
pub const ANY_ROLE: &[&str] = &[
    ROLE_ADMIN,
    ROLE_DIRECTOR,
    ROLE_PROJECT_MANAGER,
    ROLE_TEAM_LEAD,
    ROLE_TEAM_MEMBER,
];

/// Roles allowed to edit day-to-day records (blogs, trainings, leads).
pub const LEAD_ROLES: &[&str] = &[
    ROLE_ADMIN,
    ROLE_DIRECTOR,
    ROLE_PROJECT_MANAGER,
    ROLE_TEAM_LEAD,
];

/// Roles allowed to create commercial records (clients, projects, SOWs).
pub const MANAGER_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_DIRECTOR, ROLE_PROJECT_MANAGER];

/// Returns `true` when the role is the administrator role.
pub fn is_admin(role: &str) -> bool {
    role == ROLE_ADMIN
}

/// Returns `true` when `role` is one of `allowed` (exact, case-sensitive match).
pub fn has_any_role(role: &str, allowed: &[&str]) -> bool {
    allowed.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_is_in_every_role_set() {
        for set in [ANY_ROLE, LEAD_ROLES, MANAGER_ROLES] {
            assert!(has_any_role(ROLE_ADMIN, set));
        }
    }

    #[test]
    fn team_member_only_in_any_role() {
        assert!(has_any_role(ROLE_TEAM_MEMBER, ANY_ROLE));
        assert!(!has_any_role(ROLE_TEAM_MEMBER, LEAD_ROLES));
        assert!(!has_any_role(ROLE_TEAM_MEMBER, MANAGER_ROLES));
    }

    #[test]
    fn team_lead_cannot_manage() {
        assert!(has_any_role(ROLE_TEAM_LEAD, LEAD_ROLES));
        assert!(!has_any_role(ROLE_TEAM_LEAD, MANAGER_ROLES));
    }

    #[test]
    fn role_match_is_case_sensitive() {
        assert!(!is_admin("admin"));
        assert!(!has_any_role("director", ANY_ROLE));
        assert!(is_admin("Admin"));
    }

    #[test]
    fn unknown_role_matches_nothing() {
        assert!(!has_any_role("Intern", ANY_ROLE));
    }
}
