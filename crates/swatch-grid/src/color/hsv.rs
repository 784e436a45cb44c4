//! HSV color type
//!
//! The conversions here reproduce the integer HSV arithmetic used by
//! watch platforms' graphics stacks, so that a color packed by the picker
//! and unpacked by the caller (or the other way round) lands on the same
//! bytes on both sides.

use super::rgb::Rgb;

/// Saturation at or below this is treated as grey when packing.
const SATURATION_NEARLY_ZERO: f32 = 1.0 / 4096.0;

/// A color in hue/saturation/value space.
///
/// - `h`: hue in degrees, `0.0..360.0`
/// - `s`: saturation, `0.0..=1.0`
/// - `v`: value (brightness), `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue in degrees
    pub h: f32,
    /// Saturation
    pub s: f32,
    /// Value
    pub v: f32,
}

impl Hsv {
    /// Create a new HSV color.
    #[inline]
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

impl From<Rgb> for Hsv {
    /// Unpack a color into HSV.
    ///
    /// Greys (including black) come out with hue and saturation both zero.
    fn from(color: Rgb) -> Self {
        let max = color.r.max(color.g).max(color.b);
        let min = color.r.min(color.g).min(color.b);
        let delta = f32::from(max - min);
        let v = f32::from(max) / 255.0;

        if max == min {
            return Self::new(0.0, 0.0, v);
        }

        let s = delta / f32::from(max);
        let (r, g, b) = (f32::from(color.r), f32::from(color.g), f32::from(color.b));
        let sector = if color.r == max {
            (g - b) / delta
        } else if color.g == max {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        let mut h = sector * 60.0;
        if h < 0.0 {
            h += 360.0;
        }

        Self::new(h, s, v)
    }
}

impl From<Hsv> for Rgb {
    /// Pack an HSV color.
    ///
    /// Saturation and value are clamped to `0.0..=1.0`; a hue outside
    /// `0.0..360.0` is read as 0.
    fn from(hsv: Hsv) -> Self {
        let s = hsv.s.clamp(0.0, 1.0);
        let v = round_to_byte(hsv.v.clamp(0.0, 1.0) * 255.0);

        if s <= SATURATION_NEARLY_ZERO {
            return Rgb::new(v, v, v);
        }

        let hx = if (0.0..360.0).contains(&hsv.h) {
            hsv.h / 60.0
        } else {
            0.0
        };
        let w = hx.floor();
        let f = hx - w;
        let vf = f32::from(v);
        let p = round_to_byte((1.0 - s) * vf);
        let q = round_to_byte((1.0 - s * f) * vf);
        let t = round_to_byte((1.0 - s * (1.0 - f)) * vf);

        match w as u8 {
            0 => Rgb::new(v, t, p),
            1 => Rgb::new(q, v, p),
            2 => Rgb::new(p, v, t),
            3 => Rgb::new(p, q, v),
            4 => Rgb::new(t, p, v),
            _ => Rgb::new(v, p, q),
        }
    }
}

/// Round half up and saturate into a byte.
#[inline]
fn round_to_byte(x: f32) -> u8 {
    (x + 0.5).floor() as u8
}
