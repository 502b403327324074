//! HTTP API server implementation

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::client::AddressTranslator;
use crate::core::errors::TranslationError;
use crate::core::models::TranslationRequest;

/// Application state
#[derive(Clone)]
pub struct AppState {
    translator: Arc<AddressTranslator>,
}

/// Health check response
#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Address translation response
#[derive(Serialize, Deserialize)]
pub struct TranslateResponse {
    pub address: String,
}

/// Error response
#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

impl From<&TranslationError> for ErrorResponse {
    fn from(err: &TranslationError) -> Self {
        ErrorResponse {
            error: ErrorDetail {
                message: err.to_string(),
                code: err.status().map(|s| s.to_string()),
                r#type: Some(err.kind().to_string()),
            },
        }
    }
}

/// Health check handler
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Address translation handler
async fn translate_address(
    State(state): State<AppState>,
    Json(payload): Json<TranslationRequest>,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.translator.translate(&payload).await {
        Ok(address) => Ok(Json(TranslateResponse { address })),
        Err(e) => {
            warn!("Translation failed for '{}': {}", payload.address, e);
            let status = if e.is_remote_call_failure() {
                StatusCode::BAD_GATEWAY
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            Err((status, Json(ErrorResponse::from(&e))))
        }
    }
}

/// Build the API router
pub fn router(translator: Arc<AddressTranslator>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/v1/address/translate", post(translate_address))
        .with_state(AppState { translator })
}

/// Run the HTTP server
pub async fn run_server(translator: AddressTranslator, host: String, port: u16) -> anyhow::Result<()> {
    let app = router(Arc::new(translator));

    // Bind address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
