use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use swatch_grid::SwatchError;
use thiserror::Error;

use crate::models::ConfigError;
use crate::services::SessionError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Picker session not found")]
    SessionNotFound,

    #[error("Unknown palette: {0}")]
    PaletteNotFound(String),

    #[error("Invalid color {value:?}: {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("Invalid swatches: {0}")]
    Swatch(#[from] SwatchError),

    #[error("Picker session is still open")]
    SessionOpen,

    #[error("{0}")]
    Session(#[from] SessionError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(ConfigError),
}

impl From<ConfigError> for ApiError {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::UnknownPalette(name) => ApiError::PaletteNotFound(name),
            other => ApiError::Config(other),
        }
    }
}

impl ApiError {
    /// Wrap a hex parse failure together with the offending input.
    pub fn invalid_color(value: &str, reason: impl ToString) -> Self {
        ApiError::InvalidColor {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::SessionNotFound | ApiError::PaletteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidColor { .. } | ApiError::Swatch(_) => StatusCode::BAD_REQUEST,
            ApiError::SessionOpen => StatusCode::CONFLICT,
            ApiError::Session(SessionError::AlreadyFinished) => StatusCode::CONFLICT,
            ApiError::Session(SessionError::ColumnOutOfRange { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Render(RenderError::UnsupportedDimensions { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Render(_) | ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
