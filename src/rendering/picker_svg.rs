//! SVG snapshot of a picker screen.
//!
//! Rows are stacked from the session's scroll position. Each swatch is a
//! circle; the swatch of the previous color carries a ring; a finished
//! session can have the reveal disc of the picked color drawn on top.

use swatch_grid::{Cell, Rgb};

use super::effects::{item_offset, reveal_radius, swatch_center_x, wheel_transform};
use crate::models::{PickerConfig, ScreenSpec};
use crate::services::{PickerSession, VisibleRow};

/// Disc of a picked color growing from its swatch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealDisc {
    pub cx: f32,
    pub cy: f32,
    pub color: Rgb,
    /// 0 = invisible, 1 = covers the screen
    pub radius_factor: f32,
}

/// Everything needed to draw one picker screen
#[derive(Debug, Clone)]
pub struct PickerScene {
    pub screen: ScreenSpec,
    pub item_height: u32,
    pub rotation_factor: f32,
    pub value_count: usize,
    pub rows: Vec<VisibleRow>,
    /// Cell to ring, in every cycle of the list
    pub highlighted: Option<Cell>,
    pub reveal: Option<RevealDisc>,
}

impl PickerScene {
    /// Scene for the session's current scroll position.
    pub fn from_session(session: &PickerSession, picker: &PickerConfig) -> Self {
        let screen = session.screen();
        let item_height = picker.list_item_height.max(1);
        let visible = screen.height.div_ceil(item_height) as usize;
        let rows = session.rows(session.position(), visible);
        let value_count = session.source().value_count();

        let highlighted = session.highlighted();

        let reveal = session.tapped().filter(|_| picker.reveal).map(|tapped| {
            let cy = rows
                .iter()
                .position(|row| row.list_index == tapped.list_index)
                .map(|i| (i as u32 * item_height + item_height / 2) as f32)
                .unwrap_or(screen.height as f32 / 2.0);
            RevealDisc {
                cx: swatch_center_x(tapped.column, value_count, screen.width as f32),
                cy,
                color: tapped.color,
                radius_factor: 1.0,
            }
        });

        Self {
            screen,
            item_height,
            rotation_factor: picker.rotation_factor,
            value_count,
            rows,
            highlighted,
            reveal,
        }
    }

    pub fn to_svg(&self) -> String {
        let width = self.screen.width as f32;
        let height = self.screen.height as f32;
        let item_height = self.item_height as f32;
        let cell = width / self.value_count.max(1) as f32;
        let radius = (cell.min(item_height) / 2.0 - 1.0).max(1.0);

        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.screen.width,
            h = self.screen.height,
        );
        svg.push_str(&format!(
            r##"<rect width="{width}" height="{height}" fill="#000000"/>"##
        ));
        if self.screen.round {
            svg.push_str(&format!(
                r#"<clipPath id="screen"><circle cx="{cx}" cy="{cy}" r="{r}"/></clipPath><g clip-path="url(#screen)">"#,
                cx = width / 2.0,
                cy = height / 2.0,
                r = width.min(height) / 2.0,
            ));
        } else {
            svg.push_str("<g>");
        }

        for (i, row) in self.rows.iter().enumerate() {
            let top = i as f32 * item_height;
            let cy = top + item_height / 2.0;
            if self.screen.round {
                let offset = item_offset(top, item_height, height);
                let t = wheel_transform(offset, height, self.rotation_factor);
                svg.push_str(&format!(
                    r#"<g transform="translate({tx:.3} 0) rotate({rot:.3} {width} {cy})">"#,
                    tx = t.translation_x,
                    rot = t.rotation,
                ));
            } else {
                svg.push_str("<g>");
            }

            for (column, color) in row.colors.iter().enumerate() {
                let cx = swatch_center_x(column, self.value_count, width);
                svg.push_str(&format!(
                    r#"<circle cx="{cx}" cy="{cy}" r="{radius}" fill="{color}"/>"#
                ));
                if self.highlighted == Some(Cell::new(row.row, column)) {
                    svg.push_str(&format!(
                        r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="none" stroke="{stroke}" stroke-width="3"/>"#,
                        r = (radius - 2.0).max(1.0),
                        stroke = ring_color(*color),
                    ));
                }
            }
            svg.push_str("</g>");
        }

        if let Some(reveal) = &self.reveal {
            let r = reveal_radius(reveal.cx, reveal.cy, width, height) * reveal.radius_factor;
            svg.push_str(&format!(
                r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{color}"/>"#,
                cx = reveal.cx,
                cy = reveal.cy,
                color = reveal.color,
            ));
        }

        svg.push_str("</g></svg>");
        svg
    }
}

/// Black on light swatches, white on dark ones.
fn ring_color(color: Rgb) -> Rgb {
    let luma = (299 * color.r as u32 + 587 * color.g as u32 + 114 * color.b as u32) / 1000;
    if luma > 128 {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}
