use crate::error::RenderError;
use crate::models::ScreenSpec;
use resvg::usvg::{self, Transform};
use std::io::Cursor;
use tiny_skia::Pixmap;

/// Rasterizes picker SVGs into RGBA PNGs.
///
/// The SVG is scaled to fit the screen and centered; uncovered pixels stay
/// black, like an unlit watch display. Picker scenes carry no text, so no
/// font database is loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_to_png(
        &self,
        svg_data: &[u8],
        screen: ScreenSpec,
    ) -> Result<Vec<u8>, RenderError> {
        let pixmap = self.rasterize_svg(svg_data, screen)?;
        encode_png(&pixmap)
    }

    fn rasterize_svg(&self, svg_data: &[u8], screen: ScreenSpec) -> Result<Pixmap, RenderError> {
        let options = usvg::Options::default();
        let tree = usvg::Tree::from_data(svg_data, &options)
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;

        let svg_size = tree.size();
        let scale_x = screen.width as f32 / svg_size.width();
        let scale_y = screen.height as f32 / svg_size.height();
        let scale = scale_x.min(scale_y);

        let offset_x = (screen.width as f32 - svg_size.width() * scale) / 2.0;
        let offset_y = (screen.height as f32 - svg_size.height() * scale) / 2.0;

        let mut pixmap =
            Pixmap::new(screen.width, screen.height).ok_or(RenderError::PixmapAllocation)?;
        pixmap.fill(tiny_skia::Color::BLACK);

        let transform = Transform::from_scale(scale, scale).post_translate(offset_x, offset_y);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

/// Encode an opaque pixmap as 8-bit RGBA.
fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        // The black fill keeps every pixel opaque, so premultiplied data is
        // already straight alpha
        writer
            .write_image_data(pixmap.data())
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    fn decode(png_bytes: &[u8]) -> (png::OutputInfo, Vec<u8>) {
        let decoder = png::Decoder::new(Cursor::new(png_bytes));
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info, buf)
    }

    #[test]
    fn test_render_simple_svg() {
        let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10"><rect width="20" height="10" fill="#FF0000"/></svg>"##;
        let screen = ScreenSpec::from_dimensions(20, 10, false).unwrap();

        let png_bytes = SvgRenderer::new().render_to_png(svg, screen).unwrap();
        assert_eq!(&png_bytes[..8], PNG_MAGIC);

        let (info, pixels) = decode(&png_bytes);
        assert_eq!((info.width, info.height), (20, 10));
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert_eq!(&pixels[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_letterbox_stays_black() {
        // Square SVG on a wide screen: the sides are not covered
        let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="#FFFFFF"/></svg>"##;
        let screen = ScreenSpec::from_dimensions(30, 10, false).unwrap();

        let png_bytes = SvgRenderer::new().render_to_png(svg, screen).unwrap();
        let (_, pixels) = decode(&png_bytes);

        assert_eq!(&pixels[..4], &[0, 0, 0, 255]);
        let center = (5 * 30 + 15) * 4;
        assert_eq!(&pixels[center..center + 4], &[255, 255, 255, 255]);
    }

    #[test]
    fn test_invalid_svg() {
        let result = SvgRenderer::new().render_to_png(b"not an svg", ScreenSpec::SQUARE_320);
        assert!(matches!(result, Err(RenderError::SvgParse(_))));
    }
}
