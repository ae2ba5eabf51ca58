use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

/// A logged-in institution.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub institution_email: String,
    pub institution_name: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Token-keyed sessions held in memory. Lost on restart.
pub struct SessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionStore {
    /// TTLs beyond what chrono can represent saturate at `Duration::MAX`.
    pub fn new(ttl_minutes: i64) -> Self {
        Self {
            ttl: Duration::try_minutes(ttl_minutes).unwrap_or(Duration::MAX),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn create(&self, institution_email: &str, institution_name: &str) -> (Uuid, Session) {
        self.create_at(institution_email, institution_name, Utc::now())
    }

    fn create_at(
        &self,
        institution_email: &str,
        institution_name: &str,
        now: DateTime<Utc>,
    ) -> (Uuid, Session) {
        let token = Uuid::new_v4();
        let session = Session {
            institution_email: institution_email.to_string(),
            institution_name: institution_name.to_string(),
            created_at: now,
            expires_at: now
                .checked_add_signed(self.ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        };

        let mut sessions = self.write();
        let before = sessions.len();
        sessions.retain(|_, s| s.expires_at > now);
        if sessions.len() < before {
            debug!("Dropped {} expired sessions", before - sessions.len());
        }
        sessions.insert(token, session.clone());
        (token, session)
    }

    /// Returns the live session for `token`. Expired sessions are dropped.
    pub fn get(&self, token: Uuid) -> Option<Session> {
        self.get_at(token, Utc::now())
    }

    fn get_at(&self, token: Uuid, now: DateTime<Utc>) -> Option<Session> {
        let session = self.read().get(&token).cloned()?;
        if session.expires_at <= now {
            debug!("Session for {} expired", session.institution_email);
            self.write().remove(&token);
            return None;
        }
        Some(session)
    }

    /// Ends a session. Returns whether it existed.
    pub fn revoke(&self, token: Uuid) -> bool {
        self.write().remove(&token).is_some()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<Uuid, Session>> {
        self.sessions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Uuid, Session>> {
        self.sessions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
