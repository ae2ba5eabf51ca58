// Registration and list views for institutions and students.

pub mod handlers;
pub mod validation;
