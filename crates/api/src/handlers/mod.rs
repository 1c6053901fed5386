pub mod auth;
pub mod best_performer;
pub mod blog;
pub mod client;
pub mod department;
pub mod designation;
pub mod employee;
pub mod lead_enquiry;
pub mod project;
pub mod references;
pub mod role;
pub mod sow;
pub mod sow_requirement;
pub mod success_story;
pub mod technology;
pub mod training;
pub mod training_team;
