use crate::infra::AppState;
use altscore::applications::{application_router, ApplicationRepository, ApplicationService};
use altscore::error::AppError;
use altscore::scoring::{ApplicantData, ComponentScores, RiskScoringEngine};
use axum::extract::rejection::JsonRejection;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Serialize;
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Stateless preview of what a submission would be scored at.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssessmentResponse {
    pub(crate) risk_score: f64,
    pub(crate) risk_factors: Vec<String>,
    pub(crate) components: ComponentScores,
}

pub(crate) fn with_application_routes<R>(service: Arc<ApplicationService<R>>) -> axum::Router
where
    R: ApplicationRepository + 'static,
{
    application_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/assessments", axum::routing::post(assessment_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn assessment_endpoint(
    Extension(engine): Extension<Arc<RiskScoringEngine>>,
    payload: Result<Json<ApplicantData>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(applicant) = payload?;
    let components =
        engine.components(&applicant.traditional_data, &applicant.alternative_data)?;

    let response = AssessmentResponse {
        risk_score: engine.weights().aggregate(&components),
        risk_factors: engine.derive_factors(&applicant),
        components,
    };
    Ok(Json(json!({ "success": true, "data": response })))
}
