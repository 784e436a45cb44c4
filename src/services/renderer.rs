use crate::error::RenderError;
use crate::models::PickerConfig;
use crate::rendering::{PickerScene, SvgRenderer};
use crate::services::PickerSession;

/// Renders picker sessions to PNG snapshots
pub struct RenderService {
    picker: PickerConfig,
    svg_renderer: SvgRenderer,
}

impl RenderService {
    pub fn new(picker: PickerConfig) -> Self {
        Self {
            picker,
            svg_renderer: SvgRenderer::new(),
        }
    }

    /// SVG of the session's current screen
    pub fn render_svg(&self, session: &PickerSession) -> String {
        PickerScene::from_session(session, &self.picker).to_svg()
    }

    /// Render on the calling thread (CLI use)
    pub fn render_blocking(&self, session: &PickerSession) -> Result<Vec<u8>, RenderError> {
        let svg = self.render_svg(session);
        self.svg_renderer.render_to_png(svg.as_bytes(), session.screen())
    }

    /// Render a session's screen to PNG
    ///
    /// Uses spawn_blocking to avoid blocking the async runtime during
    /// rasterization.
    pub async fn render(&self, session: &PickerSession) -> Result<Vec<u8>, RenderError> {
        let svg = self.render_svg(session);
        let screen = session.screen();
        let renderer = self.svg_renderer;

        tokio::task::spawn_blocking(move || renderer.render_to_png(svg.as_bytes(), screen))
            .await
            .map_err(|e| RenderError::SvgParse(format!("Render task failed: {e}")))?
    }
}
