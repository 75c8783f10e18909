//! HTTP request handlers for the attendance hours engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_hours_full, recompute_batch, DayContext};
use crate::models::{AttendanceRecord, EmployeeContext};

use super::request::{CalculationRequest, RecomputeRequest};
use super::response::{ApiError, ApiErrorResponse, ComputationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/recompute", post(recompute_handler))
        .with_state(state)
}

/// Handler for the POST /calculate endpoint.
///
/// Accepts a self-contained record-plus-context payload and returns the
/// computed hour buckets without touching the store.
async fn calculate_handler(
    State(_state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let record: AttendanceRecord = request.record.into();
    let entry_day: DayContext = request.entry_day.into();
    let exit_day: Option<DayContext> = request.exit_day.map(Into::into);
    let employee: EmployeeContext = request.employee.into();

    match compute_hours_full(
        &record,
        &entry_day,
        exit_day.as_ref(),
        &employee,
        &request.options,
    ) {
        Ok(buckets) => {
            info!(
                correlation_id = %correlation_id,
                record_id = %record.id,
                employee_id = %record.employee_id,
                total_hours = %buckets.total(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ComputationResponse::new(record.id, buckets)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                record_id = %record.id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for the POST /recompute endpoint.
///
/// Runs the batch recompute against the application store. The batch
/// itself never fails; per-record problems come back in the summary's
/// omitted list.
async fn recompute_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecomputeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing recompute request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let summary = recompute_batch(
        state.store(),
        state.config().roster(),
        &request.record_ids,
        &request.options,
    );

    info!(
        correlation_id = %correlation_id,
        batch_id = %summary.batch_id,
        processed = summary.processed_count(),
        omitted = summary.omitted_count(),
        "Recompute completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(summary),
    )
        .into_response()
}

/// Maps axum JSON rejections to the API error shape.
fn json_rejection_response(
    correlation_id: Uuid,
    rejection: JsonRejection,
) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigLoader, EngineConfig};
    use crate::store::MemoryStore;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let config: EngineConfig = serde_yaml::from_str(
            r#"
metadata:
  name: "Planta de prueba"
  jurisdiction: "EC"
  version: "2025-01-01"
"#,
        )
        .unwrap();
        AppState::new(MemoryStore::new(), ConfigLoader::from_config(config))
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let router = create_router(test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn test_calculate_standard_day() {
        let body = json!({
            "record": {
                "id": "rec_001",
                "employee_id": "emp_001",
                "entry_date": "2025-03-10",
                "entry_time": "08:00",
                "exit_time": "17:00",
                "lunch_start": "12:00",
                "lunch_end": "13:00"
            },
            "entry_day": {
                "shift": {
                    "id": "shift_mat",
                    "start_time": "08:00",
                    "end_time": "17:00",
                    "shift_type": "Matutino"
                }
            }
        });

        let (status, response) = post_json("/calculate", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["buckets"]["horas_normales"], "8.00");
        assert_eq!(response["total_hours"], "8.00");
        assert_eq!(response["record_id"], "rec_001");
    }

    #[tokio::test]
    async fn test_calculate_rejects_malformed_time() {
        let body = json!({
            "record": {
                "id": "rec_001",
                "employee_id": "emp_001",
                "entry_date": "2025-03-10",
                "entry_time": "8am",
                "exit_time": "17:00"
            },
            "entry_day": {
                "shift": {
                    "id": "shift_mat",
                    "start_time": "08:00",
                    "end_time": "17:00",
                    "shift_type": "Matutino"
                }
            }
        });

        let (status, response) = post_json("/calculate", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["code"], "INVALID_TIME_FORMAT");
    }

    #[tokio::test]
    async fn test_calculate_rejects_missing_fields() {
        let body = json!({ "entry_day": {} });
        let (status, response) = post_json("/calculate", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_recompute_on_empty_store() {
        let body = json!({ "record_ids": ["rec_ghost"] });
        let (status, response) = post_json("/recompute", body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["total"], 1);
        assert_eq!(response["omitted"].as_array().unwrap().len(), 1);
    }
}
