use serde::{Deserialize, Serialize};

use crate::models::student::emails_match;

/// One row of `institutions.csv`. `password` holds the salted digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionRecord {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

impl InstitutionRecord {
    pub fn same_email(&self, other: &InstitutionRecord) -> bool {
        emails_match(&self.email, &other.email)
    }
}

/// Institution as exposed over the API.
#[derive(Debug, Clone, Serialize)]
pub struct InstitutionSummary {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<InstitutionRecord> for InstitutionSummary {
    fn from(record: InstitutionRecord) -> Self {
        Self {
            name: record.name,
            email: record.email,
            phone: record.phone,
        }
    }
}
