use axum::{
    extract::{Json, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use bol_draft::{BillOfLadingRenderer, RenderError, ShipmentRecord};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::config::ServiceConfig;

/// Message returned by the liveness endpoint
pub const LIVENESS_MESSAGE: &str = "Bill of Lading Draft Generator is live";

/// Body returned to clients when rendering fails
pub const GENERATION_FAILED: &str = "PDF generation failed";

/// Filename suggested through `Content-Disposition`
pub const DRAFT_FILENAME: &str = "bill_of_lading_draft.pdf";

/// Response of the liveness endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Standard error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Generic, client-safe description of the failure
    pub error: String,
}

/// Shared, read-only handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub renderer: Arc<BillOfLadingRenderer>,
}

impl AppState {
    pub fn new(renderer: BillOfLadingRenderer) -> Self {
        Self {
            renderer: Arc::new(renderer),
        }
    }
}

/// Application-specific error types for the API
#[derive(Debug)]
pub enum AppError {
    /// Rendering or encoding failed
    Render(RenderError),
    /// The blocking render task panicked or was cancelled
    Task(tokio::task::JoinError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Details stay in the server log; clients only see a generic message
        match &self {
            AppError::Render(e) => error!("PDF generation failed: {e}"),
            AppError::Task(e) => error!("PDF generation task failed: {e}"),
        }

        let error_response = ErrorResponse {
            error: GENERATION_FAILED.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(error_response)).into_response()
    }
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        AppError::Render(err)
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Task(err)
    }
}

/// Build the application router from the default configuration
pub fn app() -> Router {
    app_with_config(&ServiceConfig::default())
}

/// Build the application router for `config`
pub fn app_with_config(config: &ServiceConfig) -> Router {
    router(AppState::new(BillOfLadingRenderer::new(
        config.background_path.clone(),
    )))
}

/// Build the application router around an existing state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/health", get(health_check))
        .route("/generate-bill-of-lading/", post(generate_bill_of_lading))
        .route("/generate-bill-of-lading", post(generate_bill_of_lading))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Liveness message
pub async fn read_root() -> Json<RootResponse> {
    Json(RootResponse {
        message: LIVENESS_MESSAGE.to_string(),
    })
}

/// Health check endpoint for monitoring and load balancing
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Render the posted shipment record as a bill-of-lading draft PDF
pub async fn generate_bill_of_lading(
    State(state): State<AppState>,
    Json(record): Json<ShipmentRecord>,
) -> Result<Response, AppError> {
    let renderer = Arc::clone(&state.renderer);
    let pdf_bytes = tokio::task::spawn_blocking(move || renderer.render(&record)).await??;

    info!("Rendered bill of lading draft ({} bytes)", pdf_bytes.len());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DRAFT_FILENAME}\""),
            ),
        ],
        pdf_bytes,
    )
        .into_response())
}
