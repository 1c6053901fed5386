//! Entity models and DTOs.
//!
//! Row structs mirror their table. `*Response` structs are read views that
//! substitute related names for foreign keys; they are what the API returns.
//! `Create*` / `Update*` DTOs carry already-resolved foreign key ids.

pub mod best_performer;
pub mod blog;
pub mod client;
pub mod department;
pub mod designation;
pub mod employee;
pub mod lead_enquiry;
pub mod project;
pub mod role;
pub mod sow;
pub mod sow_requirement;
pub mod success_story;
pub mod technology;
pub mod training;
pub mod training_team;
