use std::collections::BTreeMap;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use mindwell_screening::severity::Interpretation;
use mindwell_screening::{AssessmentReport, InstrumentKind, ResponseSet, assess, classify_severity};

use crate::error::ApiError;

/// Answers keyed by 0-based item index. Values are taken as any integer so
/// that range errors come from the scorer, not the JSON decoder.
#[derive(Deserialize)]
pub struct ScoreRequest {
    pub depression: BTreeMap<usize, i64>,
    pub anxiety: BTreeMap<usize, i64>,
}

#[derive(Deserialize)]
pub struct SeverityRequest {
    pub instrument_id: String,
    pub total: u32,
}

/// Score a completed PHQ-9 / GAD-7 pair and return the full report.
pub async fn score_assessment(
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<AssessmentReport>, ApiError> {
    let Json(req) = payload?;
    let depression = ResponseSet::from_scores(InstrumentKind::Phq9, req.depression)?;
    let anxiety = ResponseSet::from_scores(InstrumentKind::Gad7, req.anxiety)?;

    let report = assess(&depression, &anxiety)?;
    Ok(Json(report))
}

pub async fn classify(
    payload: Result<Json<SeverityRequest>, JsonRejection>,
) -> Result<Json<Interpretation>, ApiError> {
    let Json(req) = payload?;
    let interpretation = classify_severity(req.total, &req.instrument_id)?;
    Ok(Json(interpretation))
}
