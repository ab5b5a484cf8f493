use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{EstimatorInput, InsuranceCategory};
use super::request::EstimateRequest;
use super::PremiumEstimator;
use crate::error::AppError;

/// Router builder exposing the calculators over HTTP.
pub fn estimator_router(estimator: Arc<PremiumEstimator>) -> Router {
    Router::new()
        .route("/api/v1/estimates", post(estimate_handler))
        .route("/api/v1/categories", get(categories_handler))
        .route(
            "/api/v1/categories/:category/defaults",
            get(defaults_handler),
        )
        .with_state(estimator)
}

pub(crate) async fn estimate_handler(
    State(estimator): State<Arc<PremiumEstimator>>,
    axum::Json(request): axum::Json<EstimateRequest>,
) -> Result<Response, AppError> {
    let result = estimator.estimate_request(request)?;
    Ok((StatusCode::OK, axum::Json(result)).into_response())
}

pub(crate) async fn categories_handler() -> Response {
    let categories: Vec<_> = InsuranceCategory::ALL
        .iter()
        .map(|category| {
            json!({
                "category": category.as_str(),
                "label": category.label(),
            })
        })
        .collect();

    (StatusCode::OK, axum::Json(json!({ "categories": categories }))).into_response()
}

pub(crate) async fn defaults_handler(
    Path(category): Path<String>,
) -> Result<Response, AppError> {
    let category: InsuranceCategory = category.parse()?;
    let defaults = EstimatorInput::defaults(category);
    Ok((StatusCode::OK, axum::Json(defaults)).into_response())
}
