//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{Path, Query, State},
    http::{header::CACHE_CONTROL, HeaderValue},
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api::{self, LocateQuery, RowsQuery};
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{InMemorySessions, RenderService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sessions: Arc<InMemorySessions>,
    pub renderer: Arc<RenderService>,
}

/// Create application state from a loaded configuration.
///
/// Fails if the grid or any named palette is malformed, so a bad
/// configuration is reported at startup rather than on the first request.
pub fn create_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    let renderer = Arc::new(RenderService::new(config.picker.clone()));
    let sessions = Arc::new(InMemorySessions::with_capacity(config.picker.max_sessions));

    Ok(AppState {
        config: Arc::new(config),
        sessions,
        renderer,
    })
}

/// Build the API router with all endpoints and middleware.
///
/// Picker state changes with every call, so every response is marked
/// `Cache-Control: no-store`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Picker sessions
        .route("/api/pick", post(handle_open))
        .route("/api/pick/:id/rows", get(handle_rows))
        .route("/api/pick/:id/tap", post(handle_tap))
        .route("/api/pick/:id/cancel", post(handle_cancel))
        .route("/api/pick/:id/result", get(handle_result))
        .route("/api/pick/:id/screen.png", get(handle_screen))
        // Grid lookups
        .route("/api/locate", get(handle_locate))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_open(
    State(state): State<AppState>,
    body: Json<api::OpenPickRequest>,
) -> Result<Json<api::OpenPickResponse>, ApiError> {
    api::handle_open(State(state.config), State(state.sessions), body).await
}

async fn handle_rows(
    State(state): State<AppState>,
    path: Path<String>,
    query: Query<RowsQuery>,
) -> Result<Json<api::RowsResponse>, ApiError> {
    api::handle_rows(State(state.sessions), path, query).await
}

async fn handle_tap(
    State(state): State<AppState>,
    path: Path<String>,
    body: Json<api::TapRequest>,
) -> Result<Json<api::PickResultResponse>, ApiError> {
    api::handle_tap(State(state.sessions), path, body).await
}

async fn handle_cancel(
    State(state): State<AppState>,
    path: Path<String>,
) -> Result<Json<api::PickResultResponse>, ApiError> {
    api::handle_cancel(State(state.sessions), path).await
}

async fn handle_result(
    State(state): State<AppState>,
    path: Path<String>,
) -> Result<Json<api::PickResultResponse>, ApiError> {
    api::handle_result(State(state.sessions), path).await
}

async fn handle_screen(
    State(state): State<AppState>,
    path: Path<String>,
) -> Result<Response, ApiError> {
    api::handle_screen(State(state.sessions), State(state.renderer), path).await
}

async fn handle_locate(
    State(state): State<AppState>,
    query: Query<LocateQuery>,
) -> Result<Json<api::LocateResponse>, ApiError> {
    api::handle_locate(State(state.config), query).await
}
