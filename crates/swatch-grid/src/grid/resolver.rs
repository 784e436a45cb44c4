//! Nearest-position resolver: color to cell.
//!
//! The forward mapping is lossy (hue and saturation are bucketed, and
//! packing to bytes rounds), so there is no exact inverse. Resolution
//! runs in three steps:
//!
//! 1. A coarse row estimate that inverts the forward formula with `ceil`.
//! 2. A search of the rows within `search_radius` of that estimate, keeping
//!    the one whose hue/saturation is closest on the hue/saturation disk.
//! 3. Inversion of the value formula to pick the column.
//!
//! The result is always a valid cell. It is an approximation: on-grid
//! colors of the default dimensions resolve to their own cell, but no such
//! guarantee holds for arbitrary dimensions or search radii.

use std::f64::consts::PI;

use super::{Cell, HueSaturation, RainbowGrid};
use crate::color::{Hsv, Rgb};

/// Squared distance between two hue/saturation pairs on the color disk.
///
/// Saturation is the radius and hue the angle, so by the law of cosines
/// `d² = s1² + s2² - 2·s1·s2·cos(h1 - h2)`. Hues 359° and 1° are close, and
/// every hue coincides at saturation 0.
pub fn polar_distance_squared(a: HueSaturation, b: HueSaturation) -> f64 {
    let s1 = f64::from(a.saturation);
    let s2 = f64::from(b.saturation);
    let gamma = 2.0 * PI * (f64::from(a.hue) - f64::from(b.hue)) / 360.0;
    s1 * s1 + s2 * s2 - 2.0 * s1 * s2 * gamma.cos()
}

impl RainbowGrid {
    /// Fast row estimate for a hue/saturation pair.
    ///
    /// Returns 0 when the saturation rounds up to zero buckets. Otherwise
    /// `ceil(hue / 360 · hue_count) · saturation_count + ceil(saturation ·
    /// saturation_count)`. Float rounding can push the estimate one hue
    /// bucket off, and for hues just below 360° past the last row, so this is
    /// only a starting point for [`nearest_row`](Self::nearest_row).
    pub fn coarse_row(&self, hs: HueSaturation) -> usize {
        let saturation_count = self.dims.saturation_count();
        let saturation_buckets = (hs.saturation * saturation_count as f32).ceil() as i64;
        if saturation_buckets <= 0 {
            return 0;
        }

        let hue_bucket = (hs.hue / 360.0 * self.dims.hue_count() as f32).ceil() as i64;
        (hue_bucket.max(0) * saturation_count as i64 + saturation_buckets) as usize
    }

    /// Row whose hue/saturation is closest to `hs`.
    ///
    /// Candidates are the rows within [`search_radius`](Self::search_radius)
    /// of [`coarse_row`](Self::coarse_row), wrapped into the chromatic rows
    /// `1..row_count` so that the search crosses the 0°/360° seam instead of
    /// stepping onto the achromatic row. Ties keep the earliest candidate.
    /// A coarse estimate of 0 is returned as is.
    pub fn nearest_row(&self, hs: HueSaturation) -> usize {
        let coarse = self.coarse_row(hs) as i64;
        if coarse == 0 {
            return 0;
        }

        let chromatic = self.dims.chromatic_row_count() as i64;
        let wrap = |row: i64| ((row - 1).rem_euclid(chromatic) + 1) as usize;
        let radius = self.search_radius as i64;

        let mut nearest = wrap(coarse);
        let mut min_distance_squared = f64::INFINITY;
        for offset in -radius..=radius {
            let candidate = wrap(coarse + offset);
            let distance = polar_distance_squared(hs, self.hue_saturation_at(candidate));
            if distance < min_distance_squared {
                nearest = candidate;
                min_distance_squared = distance;
            }
        }

        nearest
    }

    /// Column whose value is closest below (or, on the achromatic row,
    /// closest above) `value`.
    ///
    /// Inverts [`value_at`](Self::value_at): `ceil(value · (value_count - 1))`
    /// on the achromatic row, `trunc((value - value_min) / (1 - value_min) ·
    /// (value_count - 1))` elsewhere. The result is clamped into
    /// `0..value_count`, so values under the floor map to the darkest column.
    pub fn column_for_value(&self, row: usize, value: f32) -> usize {
        let last = (self.value_count() - 1) as f32;
        let column = if row % self.row_count() == 0 {
            (value * last).ceil()
        } else {
            let value_min = self.dims.value_min();
            ((value - value_min) / (1.0 - value_min) * last).trunc()
        };

        // NaN saturates to 0 in the cast
        column.clamp(0.0, last) as usize
    }

    /// Cell that best represents an HSV color.
    pub fn locate_hsv(&self, hsv: Hsv) -> Cell {
        let row = self.nearest_row(HueSaturation::new(hsv.h, hsv.s));
        Cell::new(row, self.column_for_value(row, hsv.v))
    }

    /// Cell that best represents `color`, for re-opening the picker on a
    /// previously picked color.
    #[inline]
    pub fn locate(&self, color: Rgb) -> Cell {
        self.locate_hsv(Hsv::from(color))
    }
}
