use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::services::{RenderService, SessionId, SessionRegistry};

/// Render the picker screen as PNG
///
/// Draws the rows at the session's current scroll position, the ring
/// around the previous color and, once a color is picked, the reveal disc.
#[utoipa::path(
    get,
    path = "/api/pick/{id}/screen.png",
    responses(
        (status = 200, description = "PNG image", content_type = "image/png"),
        (status = 404, description = "Session not found"),
        (status = 500, description = "Rendering failed"),
    ),
    params(
        ("id" = String, Path, description = "Session ID"),
    ),
    tag = "Picker"
)]
pub async fn handle_screen<R: SessionRegistry>(
    State(sessions): State<Arc<R>>,
    State(renderer): State<Arc<RenderService>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = SessionId::new(id);
    let session = sessions
        .find(&id)
        .await?
        .ok_or(ApiError::SessionNotFound)?;

    let png_bytes = renderer.render(&session).await?;

    tracing::debug!(
        session_id = %id,
        position = session.position(),
        size = png_bytes.len(),
        "Rendered picker screen"
    );

    Ok(([(header::CONTENT_TYPE, "image/png")], png_bytes).into_response())
}
