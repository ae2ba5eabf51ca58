//! Axum route handlers for institution and student registration.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use anyhow::Context;
use tracing::info;

use crate::auth::password::hash_password;
use crate::auth::AuthenticatedInstitution;
use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::models::institution::{InstitutionRecord, InstitutionSummary};
use crate::models::student::StudentRecord;
use crate::registry::validation::{require_fields, validate_email};
use crate::state::AppState;
use crate::storage::AppendOutcome;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InstitutionRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StudentRegistration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    pub department: String,
    pub place: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct StudentFilter {
    pub department: Option<String>,
    pub place: Option<String>,
}

impl StudentFilter {
    fn matches(&self, student: &StudentRecord) -> bool {
        field_matches(self.department.as_deref(), &student.department)
            && field_matches(self.place.as_deref(), &student.place)
    }
}

fn field_matches(wanted: Option<&str>, actual: &str) -> bool {
    match wanted.map(str::trim) {
        None | Some("") => true,
        Some(w) => w.eq_ignore_ascii_case(actual.trim()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/institutions/register
pub async fn handle_register_institution(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<InstitutionRegistration>,
) -> Result<(StatusCode, Json<InstitutionSummary>), AppError> {
    require_fields(&[
        ("name", req.name.as_str()),
        ("email", req.email.as_str()),
        ("password", req.password.as_str()),
        ("phone", req.phone.as_str()),
    ])?;
    validate_email(&req.email)?;

    let plain = req.password.clone();
    let digest = tokio::task::spawn_blocking(move || hash_password(&plain))
        .await
        .context("Password hashing task failed")??;

    let record = InstitutionRecord {
        name: req.name.trim().to_string(),
        email: req.email.trim().to_string(),
        password: digest,
        phone: req.phone.trim().to_string(),
    };

    let outcome = state
        .institutions
        .append_unique(record.clone(), |a, b| a.same_email(b))
        .await?;
    if outcome == AppendOutcome::Duplicate {
        return Err(AppError::Conflict(format!(
            "An institution with email {} is already registered",
            record.email
        )));
    }

    info!("Registered institution {}", record.email);
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// GET /api/v1/institutions
pub async fn handle_list_institutions(
    State(state): State<AppState>,
    _auth: AuthenticatedInstitution,
) -> Result<Json<Vec<InstitutionSummary>>, AppError> {
    let institutions = state.institutions.load_all().await?;
    Ok(Json(institutions.into_iter().map(Into::into).collect()))
}

/// POST /api/v1/students
pub async fn handle_register_student(
    State(state): State<AppState>,
    auth: AuthenticatedInstitution,
    ApiJson(req): ApiJson<StudentRegistration>,
) -> Result<(StatusCode, Json<StudentRecord>), AppError> {
    require_fields(&[
        ("name", req.name.as_str()),
        ("email", req.email.as_str()),
        ("phone", req.phone.as_str()),
        ("interest", req.interest.as_str()),
        ("department", req.department.as_str()),
        ("place", req.place.as_str()),
    ])?;
    validate_email(&req.email)?;

    let record = StudentRecord {
        name: req.name.trim().to_string(),
        email: req.email.trim().to_string(),
        phone: req.phone.trim().to_string(),
        interest: req.interest.trim().to_string(),
        department: req.department.trim().to_string(),
        place: req.place.trim().to_string(),
    };

    let outcome = state
        .students
        .append_unique(record.clone(), |a, b| a.same_email(b))
        .await?;
    if outcome == AppendOutcome::Duplicate {
        return Err(AppError::Conflict(format!(
            "A student with email {} is already registered",
            record.email
        )));
    }

    info!(
        "Student {} registered by {}",
        record.email, auth.session.institution_email
    );
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/students
pub async fn handle_list_students(
    State(state): State<AppState>,
    _auth: AuthenticatedInstitution,
    Query(filter): Query<StudentFilter>,
) -> Result<Json<Vec<StudentRecord>>, AppError> {
    let students = state.students.load_all().await?;
    Ok(Json(
        students.into_iter().filter(|s| filter.matches(s)).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(department: &str, place: &str) -> StudentRecord {
        StudentRecord {
            name: "Asha".to_string(),
            email: "asha@x.io".to_string(),
            phone: "99".to_string(),
            interest: "Science".to_string(),
            department: department.to_string(),
            place: place.to_string(),
        }
    }

    #[test]
    fn test_empty_filter_matches_all() {
        assert!(StudentFilter::default().matches(&student("Engineering", "Pune")));
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let filter = StudentFilter {
            department: Some("engineering".to_string()),
            place: None,
        };
        assert!(filter.matches(&student("Engineering", "Pune")));
        assert!(!filter.matches(&student("Medical", "Pune")));
    }

    #[test]
    fn test_filter_on_both_fields() {
        let filter = StudentFilter {
            department: Some("Medical".to_string()),
            place: Some(" chennai ".to_string()),
        };
        assert!(filter.matches(&student("Medical", "Chennai")));
        assert!(!filter.matches(&student("Medical", "Pune")));
    }
}
