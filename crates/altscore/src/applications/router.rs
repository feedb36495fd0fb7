use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use super::domain::{ApplicationData, ApplicationId};
use super::repository::{ApplicationRepository, RepositoryError};
use super::service::{ApplicationService, ApplicationServiceError};

/// Router exposing intake, lookup, update and explanation endpoints.
pub fn application_router<R>(service: Arc<ApplicationService<R>>) -> Router
where
    R: ApplicationRepository + 'static,
{
    Router::new()
        .route("/api/applications", post(create_handler::<R>))
        .route(
            "/api/applications/:application_id",
            get(fetch_handler::<R>).put(update_handler::<R>),
        )
        .route(
            "/api/applications/:application_id/explanation",
            get(explanation_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<ApplicationService<R>>>,
    payload: Result<Json<ApplicationData>, JsonRejection>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    let Json(application) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejected(rejection),
    };

    match service.submit(application) {
        Ok(record) => success(StatusCode::CREATED, record.receipt()),
        Err(error) => failure(error),
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<ApplicationService<R>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.get(&ApplicationId(application_id)) {
        Ok(record) => success(StatusCode::OK, record),
        Err(error) => failure(error),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<ApplicationService<R>>>,
    Path(application_id): Path<String>,
    payload: Result<Json<ApplicationData>, JsonRejection>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    let Json(application) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejected(rejection),
    };

    match service.update(&ApplicationId(application_id), application) {
        Ok(record) => success(StatusCode::OK, record),
        Err(error) => failure(error),
    }
}

pub(crate) async fn explanation_handler<R>(
    State(service): State<Arc<ApplicationService<R>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.explain(&ApplicationId(application_id)) {
        Ok(report) => success(StatusCode::OK, report),
        Err(error) => failure(error),
    }
}

fn success<T: Serialize>(status: StatusCode, data: T) -> Response {
    let payload = json!({
        "success": true,
        "data": data,
    });
    (status, Json(payload)).into_response()
}

/// Body extraction failures keep axum's status (400 syntax, 422 shape, 415 content type)
/// but answer with the same envelope as every other failure.
fn rejected(rejection: JsonRejection) -> Response {
    warn!(status = %rejection.status(), error = %rejection.body_text(), "rejected request body");
    envelope(rejection.status(), rejection.body_text())
}

fn failure(error: ApplicationServiceError) -> Response {
    let (status, message) = match &error {
        ApplicationServiceError::InvalidInput(invalid) => {
            (StatusCode::UNPROCESSABLE_ENTITY, invalid.to_string())
        }
        ApplicationServiceError::Repository(RepositoryError::NotFound) => {
            (StatusCode::NOT_FOUND, "Application not found".to_string())
        }
        ApplicationServiceError::Repository(RepositoryError::Conflict) => {
            (StatusCode::CONFLICT, "application already exists".to_string())
        }
        ApplicationServiceError::Repository(other) => {
            (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    };

    envelope(status, message)
}

fn envelope(status: StatusCode, message: String) -> Response {
    let payload = json!({
        "success": false,
        "error": message,
    });
    (status, Json(payload)).into_response()
}
