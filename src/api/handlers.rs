//! HTTP request handlers for the Deduction Estimator API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::RegionRate;
use crate::models::EstimateInput;
use crate::report::ResultSummary;

use super::request::EstimateRequest;
use super::response::{ApiError, ApiErrorResponse, EstimateResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/estimate", post(estimate_handler))
        .route("/regions", get(regions_handler))
        .with_state(state)
}

/// Handler for GET /regions endpoint.
///
/// Lists every region in schedule order.
async fn regions_handler(State(state): State<AppState>) -> Json<Vec<RegionRate>> {
    Json(state.estimator().schedule().regions().entries().to_vec())
}

/// Handler for POST /estimate endpoint.
///
/// Accepts the three form inputs and returns the deduction breakdown.
async fn estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing estimate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let input: EstimateInput = request.into();

    match state.estimator().estimate_traced(&input) {
        Ok(traced) => {
            info!(
                correlation_id = %correlation_id,
                region = %traced.result.region_label,
                age = traced.result.age,
                gross_salary = %traced.result.gross_salary,
                duration_us = traced.audit_trace.duration_us,
                "Estimate completed successfully"
            );
            let response = EstimateResponse {
                calculation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                summary: ResultSummary::from_result(&traced.result),
                result: traced.result,
                audit_trace: traced.audit_trace,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Estimate rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/jp2024").expect("Failed to load config");
        AppState::new(config)
    }

    fn post_json(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/estimate")
            .header("Content-Type", "application/json")
            .body(body.into())
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let request = EstimateRequest {
            net_salary: Some(Decimal::from(300_000)),
            age: Some(30),
            region_code: Some("tokyo".to_string()),
        };
        let body = serde_json::to_string(&request).unwrap();

        let response = router.oneshot(post_json(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let estimate: EstimateResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(estimate.result.gross_salary, Decimal::from(458_996));
        assert_eq!(estimate.result.region_label, "東京都");
        assert_eq!(estimate.engine_version, env!("CARGO_PKG_VERSION"));
        assert!(!estimate.audit_trace.steps.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router.oneshot(post_json("{invalid json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_fields_return_incomplete_input() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json(r#"{"net_salary": "300000"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INCOMPLETE_INPUT");
        assert_eq!(error.details.as_deref(), Some("Missing or zero: age, region_code"));
    }

    #[tokio::test]
    async fn test_regions_lists_schedule() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/regions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let regions: Vec<RegionRate> = serde_json::from_slice(&body).unwrap();
        assert_eq!(regions.len(), 47);
        assert_eq!(regions[12].code, "tokyo");
    }
}
