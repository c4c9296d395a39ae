use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{EntryId, Tone};
use super::repository::{HistoryError, HistoryRepository};
use super::service::{HumanizeRequest, HumanizeService, HumanizeServiceError};

/// Router builder exposing the humanize, originality, and history endpoints.
pub fn humanize_router<R>(service: Arc<HumanizeService<R>>) -> Router
where
    R: HistoryRepository + 'static,
{
    Router::new()
        .route("/api/v1/humanize", post(humanize_handler::<R>))
        .route("/api/v1/originality", post(originality_handler::<R>))
        .route("/api/v1/tones", get(tones_handler))
        .route("/api/v1/history", get(history_handler::<R>))
        .route(
            "/api/v1/history/:entry_id/favorite",
            post(favorite_handler::<R>),
        )
        .route("/api/v1/history/:entry_id", delete(delete_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct HumanizeRequestBody {
    text: String,
    #[serde(default)]
    tone: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HumanizeResponseBody {
    id: String,
    humanized_text: String,
    plagiarism_level: u8,
    tone: String,
    source: &'static str,
    stats: StatsView,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatsView {
    original_words: usize,
    humanized_words: usize,
    similarity: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OriginalityRequestBody {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OriginalityResponseBody {
    plagiarism_level: u8,
    plagiarized_sections: Vec<SectionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    original_score: Option<f64>,
    source: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SectionView {
    text: String,
    score: f64,
    start_index: usize,
    end_index: usize,
}

pub(crate) async fn humanize_handler<R>(
    State(service): State<Arc<HumanizeService<R>>>,
    axum::Json(body): axum::Json<HumanizeRequestBody>,
) -> Response
where
    R: HistoryRepository + 'static,
{
    let request = HumanizeRequest {
        text: body.text,
        tone: body.tone,
    };

    match service.humanize(request) {
        Ok(outcome) => {
            let payload = HumanizeResponseBody {
                id: outcome.entry.id.0.clone(),
                humanized_text: outcome.result.humanized_text,
                plagiarism_level: outcome.result.originality_level.unwrap_or(1),
                tone: outcome.result.tone,
                source: outcome.result.source.label(),
                stats: StatsView {
                    original_words: outcome.stats.original_words,
                    humanized_words: outcome.stats.humanized_words,
                    similarity: outcome.stats.similarity,
                },
            };
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(HumanizeServiceError::EmptyText) => {
            let payload = json!({ "error": "text is required" });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn originality_handler<R>(
    State(service): State<Arc<HumanizeService<R>>>,
    axum::Json(body): axum::Json<OriginalityRequestBody>,
) -> Response
where
    R: HistoryRepository + 'static,
{
    let check = service.check_originality(&body.text);
    let payload = OriginalityResponseBody {
        plagiarism_level: check.assessment.level,
        plagiarized_sections: check
            .assessment
            .spans
            .into_iter()
            .map(|span| SectionView {
                text: span.text,
                score: span.confidence,
                start_index: span.start,
                end_index: span.end,
            })
            .collect(),
        original_score: check.assessment.raw_score,
        source: check.source.label(),
    };
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn tones_handler() -> Response {
    let catalog: Vec<_> = Tone::ALL
        .iter()
        .map(|tone| {
            json!({
                "value": tone.label(),
                "description": tone.blurb(),
            })
        })
        .collect();
    (StatusCode::OK, axum::Json(json!({ "tones": catalog }))).into_response()
}

pub(crate) async fn history_handler<R>(
    State(service): State<Arc<HumanizeService<R>>>,
) -> Response
where
    R: HistoryRepository + 'static,
{
    match service.history() {
        Ok(entries) => {
            let views: Vec<_> = entries.iter().map(|entry| entry.view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn favorite_handler<R>(
    State(service): State<Arc<HumanizeService<R>>>,
    Path(entry_id): Path<String>,
) -> Response
where
    R: HistoryRepository + 'static,
{
    let id = EntryId(entry_id);
    match service.toggle_favorite(&id) {
        Ok(entry) => (StatusCode::OK, axum::Json(entry.view())).into_response(),
        Err(HumanizeServiceError::History(HistoryError::NotFound)) => {
            let payload = json!({ "error": "entry not found", "id": id.0 });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<HumanizeService<R>>>,
    Path(entry_id): Path<String>,
) -> Response
where
    R: HistoryRepository + 'static,
{
    let id = EntryId(entry_id);
    match service.delete_entry(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(HumanizeServiceError::History(HistoryError::NotFound)) => {
            let payload = json!({ "error": "entry not found", "id": id.0 });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
