use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::answers::{Answer, AnswerSet};
use super::domain::{InventoryVariant, ItemId, LikertValue};
use super::scoring::ScoringError;
use super::service::QuizService;

/// Router builder exposing inventory listing and report endpoints.
pub fn quiz_router(service: Arc<QuizService>) -> Router {
    Router::new()
        .route("/api/v1/quiz/:variant/items", get(items_handler))
        .route("/api/v1/quiz/:variant/report", post(report_handler))
        .with_state(service)
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizItemView {
    pub id: ItemId,
    pub number: usize,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub answers: BTreeMap<String, LikertValue>,
}

pub(crate) async fn items_handler(
    State(service): State<Arc<QuizService>>,
    Path(slug): Path<String>,
) -> Response {
    let Some(variant) = InventoryVariant::from_slug(&slug) else {
        return unknown_variant(&slug);
    };

    let items: Vec<QuizItemView> = service
        .items(variant)
        .iter()
        .enumerate()
        .map(|(index, item)| QuizItemView {
            id: item.id.clone(),
            number: index + 1,
            text: item.text.clone(),
        })
        .collect();

    let payload = json!({
        "variant": variant,
        "variant_label": variant.label(),
        "items": items,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn report_handler(
    State(service): State<Arc<QuizService>>,
    Path(slug): Path<String>,
    axum::Json(request): axum::Json<ReportRequest>,
) -> Response {
    let Some(variant) = InventoryVariant::from_slug(&slug) else {
        return unknown_variant(&slug);
    };

    let answers: AnswerSet = request
        .answers
        .into_iter()
        .map(|(id, value)| Answer {
            item_id: ItemId(id),
            value,
        })
        .collect();

    match service.report(variant, &answers, Utc::now()) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(ScoringError::Incomplete(error)) => {
            let payload = json!({
                "error": error.to_string(),
                "missing": error.missing,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn unknown_variant(raw: &str) -> Response {
    let payload = json!({
        "error": format!("unknown inventory variant '{raw}'"),
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}
