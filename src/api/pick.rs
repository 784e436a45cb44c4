use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use swatch_grid::{Cell, Rgb, SwatchSource};
use utoipa::ToSchema;

use super::parse_color;
use crate::error::ApiError;
use crate::models::{AppConfig, ConfigError, PickOutcome, PickRequest, PickResult, ScreenSpec};
use crate::services::{PickerSession, SessionId, SessionRegistry, VisibleRow};

// Upper bound on rows per window request
const MAX_ROWS_PER_REQUEST: usize = 64;

/// Request body for opening a picker
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct OpenPickRequest {
    /// Echoed back in the result
    #[serde(default)]
    pub request_code: i32,
    /// Previously picked color to scroll to (e.g. "#FF0000")
    #[serde(default)]
    pub old_color: Option<String>,
    /// Fixed palette as hex colors, row by row; takes precedence over `palette`
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    /// Name of a palette from the server configuration
    #[serde(default)]
    pub palette: Option<String>,
    /// Screen width in pixels (default from configuration)
    #[serde(default)]
    pub width: Option<u32>,
    /// Screen height in pixels (default from configuration)
    #[serde(default)]
    pub height: Option<u32>,
    /// Round screen (default from configuration)
    #[serde(default)]
    pub round: Option<bool>,
}

/// A grid cell
#[derive(Debug, Serialize, ToSchema)]
pub struct CellResponse {
    pub row: usize,
    pub column: usize,
}

impl From<Cell> for CellResponse {
    fn from(cell: Cell) -> Self {
        Self {
            row: cell.row,
            column: cell.column,
        }
    }
}

/// Response from opening a picker
#[derive(Debug, Serialize, ToSchema)]
pub struct OpenPickResponse {
    pub session_id: String,
    pub request_code: i32,
    /// False when showing a fixed palette
    pub rainbow: bool,
    pub row_count: usize,
    pub value_count: usize,
    /// List index of the row holding the previous color
    pub initial_index: usize,
    /// List index to show at the top of the screen first
    pub first_visible_index: usize,
    /// Cell of the previous color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<CellResponse>,
    pub opened_at: DateTime<Utc>,
}

/// Query parameters for the rows window
#[derive(Debug, Deserialize)]
pub struct RowsQuery {
    #[serde(default)]
    pub start: Option<usize>,
    #[serde(default)]
    pub count: Option<usize>,
}

/// One row of swatches
#[derive(Debug, Serialize, ToSchema)]
pub struct RowResponse {
    pub list_index: usize,
    pub row: usize,
    /// Darkest first
    pub colors: Vec<String>,
}

impl From<VisibleRow> for RowResponse {
    fn from(row: VisibleRow) -> Self {
        Self {
            list_index: row.list_index,
            row: row.row,
            colors: row.colors.iter().map(Rgb::to_string).collect(),
        }
    }
}

/// A window of the virtual list
#[derive(Debug, Serialize, ToSchema)]
pub struct RowsResponse {
    pub start: usize,
    pub row_count: usize,
    pub rows: Vec<RowResponse>,
}

/// Request body for picking a swatch
#[derive(Debug, Deserialize, ToSchema)]
pub struct TapRequest {
    pub list_index: usize,
    pub column: usize,
}

/// Result handed back to the caller that opened the picker
#[derive(Debug, Serialize, ToSchema)]
pub struct PickResultResponse {
    pub request_code: i32,
    /// "ok" or "canceled"
    pub result: String,
    /// Picked color, absent when canceled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl From<PickResult> for PickResultResponse {
    fn from(result: PickResult) -> Self {
        let (outcome, color) = match result.outcome {
            PickOutcome::Picked(color) => ("ok", Some(color.to_string())),
            PickOutcome::Canceled => ("canceled", None),
        };
        Self {
            request_code: result.request_code,
            result: outcome.to_string(),
            color,
        }
    }
}

impl OpenPickRequest {
    fn to_pick_request(&self) -> Result<PickRequest, ApiError> {
        let mut request = PickRequest::new(self.request_code);
        if let Some(old_color) = &self.old_color {
            request = request.old_color(parse_color(old_color)?);
        }
        if let Some(colors) = &self.colors {
            let colors = colors
                .iter()
                .map(|c| parse_color(c))
                .collect::<Result<Vec<_>, _>>()?;
            request = request.colors(colors);
        }
        Ok(request)
    }

    fn screen(&self, config: &AppConfig) -> Result<ScreenSpec, ApiError> {
        if self.width.is_none() && self.height.is_none() && self.round.is_none() {
            return Ok(config.screen.spec());
        }
        Ok(ScreenSpec::from_dimensions(
            self.width.unwrap_or(config.screen.width),
            self.height.unwrap_or(config.screen.height),
            self.round.unwrap_or(config.screen.round),
        )?)
    }
}

/// Swatches for a request: its own colors, a named palette, or the rainbow.
fn swatch_source(
    config: &AppConfig,
    request: &PickRequest,
    palette: Option<&str>,
) -> Result<SwatchSource, ApiError> {
    match &request.colors {
        Some(colors) => {
            let dims = config.grid.dimensions().map_err(ConfigError::from)?;
            Ok(SwatchSource::from_colors(Some(colors.as_slice()), dims)?)
        }
        None => Ok(config.swatch_source(palette)?),
    }
}

/// Open a color picker
///
/// Computes where the list starts (on the previous color, if any) and
/// returns a session ID for the following calls. A malformed fixed palette
/// is rejected here rather than when rows are drawn.
#[utoipa::path(
    post,
    path = "/api/pick",
    request_body = OpenPickRequest,
    responses(
        (status = 200, description = "Picker opened", body = OpenPickResponse),
        (status = 400, description = "Invalid color, palette or screen"),
        (status = 404, description = "Unknown palette name"),
    ),
    tag = "Picker"
)]
pub async fn handle_open<R: SessionRegistry>(
    State(config): State<Arc<AppConfig>>,
    State(sessions): State<Arc<R>>,
    Json(body): Json<OpenPickRequest>,
) -> Result<Json<OpenPickResponse>, ApiError> {
    let request = body.to_pick_request()?;
    let source = swatch_source(&config, &request, body.palette.as_deref())?;
    let screen = body.screen(&config)?;

    let session = PickerSession::new(&request, source, screen, config.picker.list_item_height);
    let rainbow = session.source().is_rainbow();
    let row_count = session.source().row_count();
    let value_count = session.source().value_count();
    let initial_index = session.initial_index();
    let first_visible_index = session.first_visible_index();
    let highlighted = session.highlighted();
    let opened_at = session.opened_at();

    let session_id = sessions.insert(session).await?;

    tracing::info!(
        session_id = %session_id,
        request_code = request.request_code,
        rainbow = rainbow,
        row_count = row_count,
        old_color = ?request.old_color.map(|c| c.to_string()),
        "Picker session opened"
    );

    Ok(Json(OpenPickResponse {
        session_id: session_id.to_string(),
        request_code: request.request_code,
        rainbow,
        row_count,
        value_count,
        initial_index,
        first_visible_index,
        highlighted: highlighted.map(CellResponse::from),
        opened_at,
    }))
}

/// Get a window of rows
///
/// Without `start`, the first call returns the initial window and later
/// calls return the last scrolled-to window. `count` defaults to one
/// screen and is capped at 64.
#[utoipa::path(
    get,
    path = "/api/pick/{id}/rows",
    responses(
        (status = 200, description = "Rows of swatches", body = RowsResponse),
        (status = 404, description = "Session not found"),
    ),
    params(
        ("id" = String, Path, description = "Session ID"),
        ("start" = Option<usize>, Query, description = "List index of the first row"),
        ("count" = Option<usize>, Query, description = "Number of rows (max 64)"),
    ),
    tag = "Picker"
)]
pub async fn handle_rows<R: SessionRegistry>(
    State(sessions): State<Arc<R>>,
    Path(id): Path<String>,
    Query(query): Query<RowsQuery>,
) -> Result<Json<RowsResponse>, ApiError> {
    let id = SessionId::new(id);

    let (start, row_count, rows) = sessions
        .update(&id, move |session| {
            let start = match query.start {
                Some(start) => start,
                None => session
                    .take_initial_scroll()
                    .unwrap_or_else(|| session.position()),
            };
            let start = session.source().wrapping().offset(start, 0);
            session.scroll_to(start);

            let count = query
                .count
                .unwrap_or_else(|| session.lines_per_screen())
                .min(MAX_ROWS_PER_REQUEST);
            (start, session.source().row_count(), session.rows(start, count))
        })
        .await?;

    tracing::debug!(session_id = %id, start = start, count = rows.len(), "Rows requested");

    Ok(Json(RowsResponse {
        start,
        row_count,
        rows: rows.into_iter().map(RowResponse::from).collect(),
    }))
}

/// Pick a swatch
///
/// Finishes the session with the color at `column` of the row shown at
/// `list_index`.
#[utoipa::path(
    post,
    path = "/api/pick/{id}/tap",
    request_body = TapRequest,
    responses(
        (status = 200, description = "Color picked", body = PickResultResponse),
        (status = 400, description = "Column out of range"),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session already finished"),
    ),
    params(
        ("id" = String, Path, description = "Session ID"),
    ),
    tag = "Picker"
)]
pub async fn handle_tap<R: SessionRegistry>(
    State(sessions): State<Arc<R>>,
    Path(id): Path<String>,
    Json(tap): Json<TapRequest>,
) -> Result<Json<PickResultResponse>, ApiError> {
    let id = SessionId::new(id);
    let result = sessions
        .update(&id, |session| session.tap(tap.list_index, tap.column))
        .await??;

    tracing::info!(
        session_id = %id,
        request_code = result.request_code,
        color = ?result.picked_color().map(|c| c.to_string()),
        "Color picked"
    );

    Ok(Json(result.into()))
}

/// Close the picker without a selection
#[utoipa::path(
    post,
    path = "/api/pick/{id}/cancel",
    responses(
        (status = 200, description = "Picker canceled", body = PickResultResponse),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session already finished"),
    ),
    params(
        ("id" = String, Path, description = "Session ID"),
    ),
    tag = "Picker"
)]
pub async fn handle_cancel<R: SessionRegistry>(
    State(sessions): State<Arc<R>>,
    Path(id): Path<String>,
) -> Result<Json<PickResultResponse>, ApiError> {
    let id = SessionId::new(id);
    let result = sessions.update(&id, PickerSession::cancel).await??;

    tracing::info!(session_id = %id, request_code = result.request_code, "Picker canceled");

    Ok(Json(result.into()))
}

/// Get the result of a finished picker
#[utoipa::path(
    get,
    path = "/api/pick/{id}/result",
    responses(
        (status = 200, description = "Picker result", body = PickResultResponse),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session still open"),
    ),
    params(
        ("id" = String, Path, description = "Session ID"),
    ),
    tag = "Picker"
)]
pub async fn handle_result<R: SessionRegistry>(
    State(sessions): State<Arc<R>>,
    Path(id): Path<String>,
) -> Result<Json<PickResultResponse>, ApiError> {
    let session = sessions
        .find(&SessionId::new(id))
        .await?
        .ok_or(ApiError::SessionNotFound)?;
    let result = session.result().ok_or(ApiError::SessionOpen)?;

    Ok(Json(result.into()))
}
