//! Axum route handlers for the Guidance API.

use axum::Json;
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::guidance::eligibility::{eligible_departments, Department, TwelfthScores};
use crate::guidance::input::{TenthForm, TwelfthForm};
use crate::guidance::recommender::{recommend_stream, RulePath, TenthScores};
use crate::guidance::streams::{catalog, StreamInfo};

#[derive(Debug, Serialize)]
pub struct TenthResponse {
    /// Stream key, or the need-improvement message.
    pub recommended: &'static str,
    pub path: RulePath,
    pub stream_info: Option<StreamInfo>,
    pub scores: TenthScores,
}

#[derive(Debug, Serialize)]
pub struct TwelfthResponse {
    pub departments: Vec<Department>,
    pub pcm_total: i128,
    pub pcb_total: i128,
    pub total: i128,
    pub scores: TwelfthScores,
}

/// GET /api/v1/streams
pub async fn handle_list_streams() -> Json<Vec<StreamInfo>> {
    Json(catalog())
}

/// POST /api/v1/guidance/tenth
pub async fn handle_tenth(
    ApiJson(form): ApiJson<TenthForm>,
) -> Result<Json<TenthResponse>, AppError> {
    let scores = TenthScores::try_from(form)?;
    let recommendation = recommend_stream(&scores);
    debug!(
        "Stream recommendation {} via {:?}",
        recommendation.label(),
        recommendation.path
    );

    Ok(Json(TenthResponse {
        recommended: recommendation.label(),
        path: recommendation.path,
        stream_info: recommendation.stream.map(|kind| kind.info()),
        scores,
    }))
}

/// POST /api/v1/guidance/twelfth
pub async fn handle_twelfth(
    ApiJson(form): ApiJson<TwelfthForm>,
) -> Result<Json<TwelfthResponse>, AppError> {
    let scores = TwelfthScores::try_from(form)?;
    let departments = eligible_departments(&scores);
    debug!(
        "Eligible departments: [{}]",
        departments
            .iter()
            .map(|d| d.title())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(Json(TwelfthResponse {
        departments,
        pcm_total: scores.pcm(),
        pcb_total: scores.pcb(),
        total: scores.total(),
        scores,
    }))
}
