//! HTTP surface: the two caller-facing operations plus a health probe.
//!
//! Upstream callers (UI, messaging webhooks, collaboration editors)
//! only ever see `translate` and `translate_batch`; everything else is
//! internal to the engine.

use crate::engine::TranslationEngine;
use crate::error::TranslationError;
use crate::types::{TranslationRequest, TranslationResult};
use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Debug, Deserialize)]
struct BatchRequest {
    texts: Vec<String>,
    source_lang: String,
    target_lang: String,
    #[serde(default)]
    context: HashMap<String, String>,
}

struct ApiError(TranslationError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TranslationError::EmptyText | TranslationError::TextTooLong { .. } => {
                StatusCode::BAD_REQUEST
            }
            TranslationError::AllProvidersFailed { .. } => StatusCode::BAD_GATEWAY,
        };
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

async fn translate_handler(
    State(engine): State<Arc<TranslationEngine>>,
    Json(request): Json<TranslationRequest>,
) -> Result<Json<TranslationResult>, ApiError> {
    engine.translate(&request).await.map(Json).map_err(ApiError)
}

async fn translate_batch_handler(
    State(engine): State<Arc<TranslationEngine>>,
    Json(batch): Json<BatchRequest>,
) -> Result<Json<Vec<TranslationResult>>, ApiError> {
    engine
        .translate_batch(&batch.texts, &batch.source_lang, &batch.target_lang, &batch.context)
        .await
        .map(Json)
        .map_err(ApiError)
}

async fn health_handler() -> &'static str {
    "ok"
}

pub fn router(engine: Arc<TranslationEngine>) -> Router {
    Router::new()
        .route("/api/translate", post(translate_handler))
        .route("/api/translate/batch", post(translate_batch_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(engine)
}

pub async fn serve(engine: Arc<TranslationEngine>, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("listening on port {}", port);
    axum::serve(listener, router(engine)).await?;
    Ok(())
}
