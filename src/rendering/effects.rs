//! Geometry of the list effects.
//!
//! On round screens each row is turned and pushed sideways by its distance
//! from the vertical center, so the list looks like it runs on a wheel. When
//! a swatch is picked, a disc of its color grows from the swatch until it
//! covers the whole screen.

/// Rotation and horizontal shift applied to one list row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowTransform {
    /// Degrees, around the row's right edge at mid-height
    pub rotation: f32,
    pub translation_x: f32,
}

impl RowTransform {
    pub const IDENTITY: Self = Self {
        rotation: 0.0,
        translation_x: 0.0,
    };
}

/// Signed distance between a row's center and the container's center
pub fn item_offset(top: f32, item_height: f32, container_height: f32) -> f32 {
    top - container_height / 2.0 + item_height / 2.0
}

/// Wheel transform for a row `offset` pixels from the center.
pub fn wheel_transform(offset: f32, container_height: f32, rotation_factor: f32) -> RowTransform {
    let relative = offset / container_height;
    RowTransform {
        rotation: -rotation_factor * relative,
        translation_x: ((3.0 * relative).cos() - 1.0) * -rotation_factor * 10.0,
    }
}

/// Radius that lets a disc centered at `(cx, cy)` cover the container.
///
/// The farthest of the four corners decides.
pub fn reveal_radius(cx: f32, cy: f32, width: f32, height: f32) -> f32 {
    [
        cx.hypot(cy),
        cx.hypot(height - cy),
        (width - cx).hypot(cy),
        (width - cx).hypot(height - cy),
    ]
    .into_iter()
    .fold(0.0, f32::max)
}

/// Horizontal center of the swatch in `column`.
pub fn swatch_center_x(column: usize, value_count: usize, width: f32) -> f32 {
    let cell = width / value_count as f32;
    column as f32 * cell + cell / 2.0
}
