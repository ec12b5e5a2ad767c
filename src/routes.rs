use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::{CardsResponse, DebugEnvResponse, ErrorResponse, HealthResponse};
use crate::normalize::normalize_rows;
use crate::services::sheets::ValuesReader;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub reader: Arc<dyn ValuesReader>,
}

impl AppState {
    pub fn new(config: AppConfig, reader: impl ValuesReader + 'static) -> Self {
        AppState {
            config: Arc::new(config),
            reader: Arc::new(reader),
        }
    }
}

/// Builds the application router. `/debug/env` is only mounted in debug mode.
pub fn router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/health", get(health_handler))
        .route("/api/cards", get(cards_handler));

    if state.config.debug {
        app = app.route("/debug/env", get(debug_env_handler));
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    app.layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn cards_handler(State(state): State<AppState>) -> Response {
    match load_cards(&state).await {
        Ok(body) => {
            info!(count = body.count, "served cards");
            Json(body).into_response()
        }
        Err(e) => {
            error!(error = %e, "failed to load cards");
            let body = ErrorResponse::new(&e, state.config.debug);
            (e.status(), Json(body)).into_response()
        }
    }
}

async fn load_cards(state: &AppState) -> Result<CardsResponse, AppError> {
    let values = state.reader.read_values(&state.config).await?;
    let cards = normalize_rows(&values)?;
    Ok(CardsResponse::from(cards))
}

async fn debug_env_handler(State(state): State<AppState>) -> (StatusCode, Json<DebugEnvResponse>) {
    (StatusCode::OK, Json(DebugEnvResponse::from(state.config.as_ref())))
}
