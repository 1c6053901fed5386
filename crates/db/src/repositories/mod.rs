//! Repository layer for database access.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&PgPool` as the first argument. Writes take the caller's display
//! name as `actor` and stamp it into the audit columns.

pub mod best_performer_repo;
pub mod blog_repo;
pub mod client_repo;
pub mod department_repo;
pub mod designation_repo;
pub mod employee_repo;
pub mod lead_enquiry_repo;
pub mod project_repo;
pub mod role_repo;
pub mod sow_repo;
pub mod sow_requirement_repo;
pub mod success_story_repo;
pub mod technology_repo;
pub mod training_repo;
pub mod training_team_repo;

mod technology_links;

pub use best_performer_repo::BestPerformerRepo;
pub use blog_repo::BlogRepo;
pub use client_repo::ClientRepo;
pub use department_repo::DepartmentRepo;
pub use designation_repo::DesignationRepo;
pub use employee_repo::EmployeeRepo;
pub use lead_enquiry_repo::LeadEnquiryRepo;
pub use project_repo::ProjectRepo;
pub use role_repo::RoleRepo;
pub use sow_repo::SowRepo;
pub use sow_requirement_repo::SowRequirementRepo;
pub use success_story_repo::SuccessStoryRepo;
pub use technology_repo::TechnologyRepo;
pub use training_repo::TrainingRepo;
pub use training_team_repo::TrainingTeamRepo;
