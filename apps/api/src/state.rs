use std::sync::Arc;

use crate::auth::SessionStore;
use crate::config::Config;
use crate::models::institution::InstitutionRecord;
use crate::models::student::StudentRecord;
use crate::storage::CsvTable;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub students: Arc<CsvTable<StudentRecord>>,
    pub institutions: Arc<CsvTable<InstitutionRecord>>,
    /// Logged-in institutions, keyed by bearer token.
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            students: Arc::new(CsvTable::new(config.students_path())),
            institutions: Arc::new(CsvTable::new(config.institutions_path())),
            sessions: Arc::new(SessionStore::new(config.session_ttl_minutes)),
            config,
        }
    }
}
