//! Grid indexer: cell to color.
//!
//! Everything here is a pure function of the grid dimensions and the
//! requested cell.

use super::{GridDimensions, HueSaturation};
use crate::color::{Hsv, Rgb};

/// The algorithmic "rainbow" swatch grid.
///
/// Forward mapping (cell to color) lives in this module; the reverse,
/// approximate mapping (color to nearest cell) lives in `resolver`.
///
/// # Example
///
/// ```
/// use swatch_grid::{Cell, RainbowGrid, Rgb};
///
/// let grid = RainbowGrid::default();
///
/// // Row 0 is the achromatic row, from black to white
/// assert_eq!(grid.color_at(0, 0), Rgb::BLACK);
/// assert_eq!(grid.color_at(0, 3), Rgb::WHITE);
///
/// // On-grid colors are found again
/// let swatch = grid.color_at(42, 2);
/// assert_eq!(grid.locate(swatch), Cell::new(42, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainbowGrid {
    pub(super) dims: GridDimensions,
    pub(super) search_radius: usize,
}

impl RainbowGrid {
    /// Create a grid with the default nearest-row search radius of
    /// `2 * saturation_count` rows on each side of the coarse estimate.
    pub fn new(dims: GridDimensions) -> Self {
        Self {
            dims,
            search_radius: 2 * dims.saturation_count(),
        }
    }

    /// Override the nearest-row search radius.
    ///
    /// The radius bounds how far [`nearest_row`](Self::nearest_row) looks
    /// around the coarse estimate. It is a tuning knob, not a correctness
    /// guarantee: the default has been checked to recover every on-grid
    /// color of the default dimensions, nothing more.
    pub fn with_search_radius(mut self, radius: usize) -> Self {
        self.search_radius = radius;
        self
    }

    /// The grid dimensions.
    #[inline]
    pub fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    /// The nearest-row search radius.
    #[inline]
    pub fn search_radius(&self) -> usize {
        self.search_radius
    }

    /// Total number of rows, including the achromatic row.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.dims.row_count()
    }

    /// Number of swatches per row.
    #[inline]
    pub fn value_count(&self) -> usize {
        self.dims.value_count()
    }

    /// Hue and saturation of a row.
    ///
    /// `row` is taken modulo [`row_count`](Self::row_count). Row 0 is
    /// achromatic and yields `(0, 0)`. Otherwise `row - 1` is unwound into a
    /// hue bucket (`(row - 1) / saturation_count`) and a saturation level
    /// (`(row - 1) % saturation_count + 1`, so saturation is never 0 off the
    /// achromatic row).
    pub fn hue_saturation_at(&self, row: usize) -> HueSaturation {
        let row = row % self.row_count();
        if row == 0 {
            return HueSaturation::new(0.0, 0.0);
        }

        let index = row - 1;
        let saturation_count = self.dims.saturation_count();
        let hue_bucket = index / saturation_count;
        let saturation_level = index % saturation_count + 1;

        HueSaturation::new(
            (hue_bucket as f32 / self.dims.hue_count() as f32) * 360.0,
            saturation_level as f32 / saturation_count as f32,
        )
    }

    /// Value (brightness) of a column.
    ///
    /// The achromatic row spans the full range so it reaches pure black.
    /// Chromatic rows start at the value floor, because very dark swatches of
    /// different hues are indistinguishable on a watch screen.
    pub fn value_at(&self, row: usize, column: usize) -> f32 {
        debug_assert!(
            column < self.value_count(),
            "column {column} out of range for {} values",
            self.value_count()
        );

        let fraction = column as f32 / (self.value_count() - 1) as f32;
        if row % self.row_count() == 0 {
            fraction
        } else {
            let value_min = self.dims.value_min();
            value_min + fraction * (1.0 - value_min)
        }
    }

    /// HSV triple of the swatch at `(row, column)`.
    #[inline]
    pub fn hsv_at(&self, row: usize, column: usize) -> Hsv {
        let hs = self.hue_saturation_at(row);
        Hsv::new(hs.hue, hs.saturation, self.value_at(row, column))
    }

    /// Color of the swatch at `(row, column)`.
    ///
    /// `row` wraps. `column` must be below
    /// [`value_count`](Self::value_count); anything else is a caller bug.
    #[inline]
    pub fn color_at(&self, row: usize, column: usize) -> Rgb {
        Rgb::from(self.hsv_at(row, column))
    }

    /// All swatches of a row, darkest first.
    pub fn row_colors(&self, row: usize) -> Vec<Rgb> {
        (0..self.value_count())
            .map(|column| self.color_at(row, column))
            .collect()
    }
}

impl Default for RainbowGrid {
    fn default() -> Self {
        Self::new(GridDimensions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achromatic_row_is_zero_zero() {
        let grid = RainbowGrid::default();
        assert_eq!(grid.hue_saturation_at(0), HueSaturation::new(0.0, 0.0));
        // Wrapped multiples of row_count land on the achromatic row too
        assert_eq!(grid.hue_saturation_at(109), HueSaturation::new(0.0, 0.0));
        assert_eq!(grid.hue_saturation_at(109 * 1000), HueSaturation::new(0.0, 0.0));
    }

    #[test]
    fn test_first_rows_walk_saturation_then_hue() {
        let grid = RainbowGrid::default();
        let third = 1.0 / 3.0;

        assert_eq!(grid.hue_saturation_at(1), HueSaturation::new(0.0, third));
        assert_eq!(grid.hue_saturation_at(2), HueSaturation::new(0.0, 2.0 / 3.0));
        assert_eq!(grid.hue_saturation_at(3), HueSaturation::new(0.0, 1.0));
        assert_eq!(grid.hue_saturation_at(4), HueSaturation::new(10.0, third));
        assert_eq!(grid.hue_saturation_at(108), HueSaturation::new(350.0, 1.0));
    }

    #[test]
    fn test_every_hue_and_saturation_appears_once() {
        let grid = RainbowGrid::default();
        let mut seen = std::collections::HashSet::new();
        for row in 1..grid.row_count() {
            let hs = grid.hue_saturation_at(row);
            assert!(hs.saturation > 0.0, "row {row} lost its saturation");
            assert!(seen.insert((hs.hue.to_bits(), hs.saturation.to_bits())));
        }
        assert_eq!(seen.len(), 36 * 3);
    }

    #[test]
    fn test_first_chromatic_swatch() {
        let grid = RainbowGrid::default();
        let hsv = grid.hsv_at(1, 0);
        assert_eq!(hsv.h, 0.0);
        assert!((hsv.s - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!(hsv.v, 0.15);
        assert_eq!(grid.color_at(1, 0), Rgb::new(38, 25, 25));
    }

    #[test]
    fn test_value_axis() {
        let grid = RainbowGrid::default();

        // Achromatic row: full range
        assert_eq!(grid.value_at(0, 0), 0.0);
        assert_eq!(grid.value_at(0, 3), 1.0);
        assert_eq!(grid.row_colors(0), vec![
            Rgb::BLACK,
            Rgb::new(85, 85, 85),
            Rgb::new(170, 170, 170),
            Rgb::WHITE,
        ]);

        // Chromatic rows: floor to 1.0
        assert_eq!(grid.value_at(5, 0), 0.15);
        assert_eq!(grid.value_at(5, 3), 1.0);
        for column in 1..4 {
            assert!(grid.value_at(5, column) > grid.value_at(5, column - 1));
        }
    }

    #[test]
    fn test_pure_hues_on_full_saturation_rows() {
        let grid = RainbowGrid::default();
        // hue 0 / 120 / 240 at saturation 1 are rows 3, 39, 75
        assert_eq!(grid.color_at(3, 3), Rgb::new(255, 0, 0));
        assert_eq!(grid.color_at(39, 3), Rgb::new(0, 255, 0));
        assert_eq!(grid.color_at(75, 3), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_small_grid() {
        let dims = GridDimensions::new(4, 2, 3, 0.25).unwrap();
        let grid = RainbowGrid::new(dims);
        assert_eq!(grid.row_count(), 9);
        assert_eq!(grid.search_radius(), 4);
        assert_eq!(grid.hue_saturation_at(8), HueSaturation::new(270.0, 1.0));
        assert_eq!(grid.value_at(8, 1), 0.625);
        assert_eq!(grid.row_colors(3).len(), 3);
    }

    #[test]
    fn test_row_wraps() {
        let grid = RainbowGrid::default();
        assert_eq!(grid.color_at(42 + 109 * 7, 1), grid.color_at(42, 1));
    }
}
