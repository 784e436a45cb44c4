use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::parse_color;
use crate::error::ApiError;
use crate::models::AppConfig;

#[derive(Debug, Deserialize)]
pub struct LocateQuery {
    pub color: String,
    #[serde(default)]
    pub palette: Option<String>,
}

/// Where a color lands in the picker
#[derive(Debug, Serialize, ToSchema)]
pub struct LocateResponse {
    /// The color as given, normalized to `#RRGGBB`
    pub color: String,
    pub row: usize,
    pub column: usize,
    /// List index the picker opens on for this color
    pub list_index: usize,
    /// Swatch shown at that cell
    pub swatch: String,
    /// True when the swatch is the color itself
    pub exact: bool,
}

/// Locate a color in the swatch grid
///
/// Uses the rainbow grid unless `palette` names a configured fixed palette.
#[utoipa::path(
    get,
    path = "/api/locate",
    responses(
        (status = 200, description = "Cell of the color", body = LocateResponse),
        (status = 400, description = "Invalid color"),
        (status = 404, description = "Unknown palette name"),
    ),
    params(
        ("color" = String, Query, description = "Hex color, e.g. #FF0000"),
        ("palette" = Option<String>, Query, description = "Configured palette name"),
    ),
    tag = "Grid"
)]
pub async fn handle_locate(
    State(config): State<Arc<AppConfig>>,
    Query(query): Query<LocateQuery>,
) -> Result<Json<LocateResponse>, ApiError> {
    let color = parse_color(&query.color)?;
    let source = config.swatch_source(query.palette.as_deref())?;

    let cell = source.locate(color);
    let swatch = source.color_at(cell.row, cell.column);

    Ok(Json(LocateResponse {
        color: color.to_string(),
        row: cell.row,
        column: cell.column,
        list_index: source.initial_list_index(Some(color)),
        swatch: swatch.to_string(),
        exact: swatch == color,
    }))
}
