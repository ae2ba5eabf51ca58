use serde::{Deserialize, Serialize};

/// One row of `students.csv`. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    pub department: String,
    pub place: String,
}

impl StudentRecord {
    pub fn same_email(&self, other: &StudentRecord) -> bool {
        emails_match(&self.email, &other.email)
    }
}

/// Emails compare case-insensitively, ignoring surrounding whitespace.
pub fn emails_match(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
