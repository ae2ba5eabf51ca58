pub mod institution;
pub mod student;
