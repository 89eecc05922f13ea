pub mod assessments;
pub mod companion;
pub mod counseling;
pub mod forum;
pub mod health;
pub mod instruments;
pub mod resources;
