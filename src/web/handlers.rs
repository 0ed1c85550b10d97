// file: src/web/handlers.rs
// description: JSON endpoints for model listing and classification

use crate::error::ClassifierError;
use crate::inference::ClassificationRequest;
use crate::web::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde_json::{Value, json};
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

type JsonResponse = (StatusCode, Json<Value>);

fn error_response(state: &AppState, err: &ClassifierError) -> JsonResponse {
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
    let mut body = json!({ "error": err.to_string() });
    if status == StatusCode::BAD_REQUEST && state.config.server.expose_traceback {
        body["traceback"] = Value::String(err.chain());
    }
    (status, Json(body))
}

pub async fn list_models(State(state): State<AppState>) -> JsonResponse {
    let dispatcher = state.dispatcher.clone();
    let listed = tokio::task::spawn_blocking(move || dispatcher.catalog().list()).await;

    match listed {
        Ok(Ok(models)) => {
            info!(
                "Listing {} traditional and {} ensemble models",
                models.traditional.len(),
                models.ensemble.len()
            );
            (
                StatusCode::OK,
                Json(json!({
                    "available_models": {
                        "traditional": models.traditional,
                        "ensemble": models.ensemble,
                    }
                })),
            )
        }
        Ok(Err(e)) => {
            error!("Failed to list models: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        }
        Err(e) => {
            error!("Model listing task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        }
    }
}

pub async fn classify(State(state): State<AppState>, body: Bytes) -> JsonResponse {
    let request_id = Uuid::new_v4();
    let span = info_span!("classify", %request_id);

    async move {
        let request: ClassificationRequest = match serde_json::from_slice(&body) {
            Ok(request) => request,
            Err(e) => {
                warn!("Rejected request body: {}", e);
                return error_response(
                    &state,
                    &ClassifierError::InvalidRequest(e.to_string()),
                );
            }
        };

        info!(
            "Classifying with model {:?} ({} title chars, {} abstract chars)",
            request.model,
            request.title.len(),
            request.abstract_text.len()
        );

        let dispatcher = state.dispatcher.clone();
        let outcome =
            tokio::task::spawn_blocking(move || dispatcher.classify(&request)).await;

        match outcome {
            Ok(Ok(result)) => (StatusCode::OK, Json(json!(result))),
            Ok(Err(e)) => {
                warn!("Classification failed: {}", e);
                error_response(&state, &e)
            }
            Err(e) => {
                error!("Classification task failed: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": e.to_string() })),
                )
            }
        }
    }
    .instrument(span)
    .await
}

pub async fn method_not_allowed() -> JsonResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Invalid request method" })),
    )
}
