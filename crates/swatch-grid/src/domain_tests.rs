//! Domain-critical regression tests for swatch-grid.
//!
//! Each test guards a property the picker relies on across modules: a
//! re-opened picker must land on the swatch the user picked, the list must
//! wrap without a seam, and fixed palettes must be validated up front.

#[cfg(test)]
mod domain_tests {
    use std::num::NonZeroUsize;

    use crate::api::SwatchSource;
    use crate::color::{Hsv, Rgb};
    use crate::grid::{Cell, GridDimensions, HueSaturation, RainbowGrid};
    use crate::palette::{FixedPalette, PaletteError};
    use crate::wrap::{middle_position, WrappingRows, VIRTUAL_ROW_COUNT};

    // ========================================================================
    // Round trip: every swatch the grid draws resolves to its own cell
    // ========================================================================

    /// If this breaks, re-opening the picker on a color it produced
    /// highlights a neighbouring swatch instead of the picked one.
    #[test]
    fn test_every_default_swatch_resolves_to_itself() {
        let grid = RainbowGrid::default();
        for row in 0..grid.row_count() {
            for column in 0..grid.value_count() {
                let color = grid.color_at(row, column);
                assert_eq!(
                    grid.locate(color),
                    Cell::new(row, column),
                    "REGRESSION: swatch {color} at ({row}, {column}) did not resolve to itself"
                );
            }
        }
    }

    /// The row round trip must hold for the exact hue/saturation pairs too,
    /// independent of RGB packing.
    #[test]
    fn test_every_row_hue_saturation_resolves_to_row() {
        let grid = RainbowGrid::default();
        for row in 0..grid.row_count() {
            assert_eq!(grid.nearest_row(grid.hue_saturation_at(row)), row);
        }
    }

    #[test]
    fn test_round_trip_on_alternate_dimensions() {
        for (hues, saturations, values) in [(12, 2, 5), (24, 4, 3), (6, 1, 2)] {
            let dims = GridDimensions::new(hues, saturations, values, 0.2).unwrap();
            let grid = RainbowGrid::new(dims);
            for row in 0..grid.row_count() {
                assert_eq!(
                    grid.nearest_row(grid.hue_saturation_at(row)),
                    row,
                    "grid {hues}x{saturations}, row {row}"
                );
            }
        }
    }

    // ========================================================================
    // Achromatic row
    // ========================================================================

    #[test]
    fn test_row_zero_is_grey() {
        let grid = RainbowGrid::default();
        assert_eq!(grid.hue_saturation_at(0), HueSaturation::new(0.0, 0.0));
        assert_eq!(grid.hue_saturation_at(grid.row_count()), HueSaturation::new(0.0, 0.0));
        for color in grid.row_colors(0) {
            assert_eq!(color.r, color.g);
            assert_eq!(color.g, color.b);
        }
    }

    /// White has hue 0 and saturation 0; it must not be mistaken for a
    /// pale red.
    #[test]
    fn test_white_resolves_to_brightest_grey() {
        let grid = RainbowGrid::default();
        assert_eq!(grid.locate(Rgb::WHITE), Cell::new(0, grid.value_count() - 1));
    }

    #[test]
    fn test_any_grey_resolves_to_grey_row() {
        let grid = RainbowGrid::default();
        for level in 0..=255u8 {
            let cell = grid.locate(Rgb::new(level, level, level));
            assert_eq!(cell.row, 0, "grey {level}");
            assert!(cell.column < grid.value_count());
        }
    }

    // ========================================================================
    // Hue wraparound
    // ========================================================================

    /// If this breaks, a color just below 360° jumps to the far end of the
    /// list instead of sitting next to its neighbour just above 0°.
    #[test]
    fn test_hues_either_side_of_zero_stay_together() {
        let grid = RainbowGrid::default();
        let chromatic = grid.row_count() - 1;
        for saturation in [0.34f32, 0.67, 1.0] {
            let below = grid.nearest_row(HueSaturation::new(359.0, saturation));
            let above = grid.nearest_row(HueSaturation::new(1.0, saturation));
            let gap = below.abs_diff(above);
            let circular_gap = gap.min(chromatic - gap);
            assert!(
                circular_gap <= grid.dimensions().saturation_count(),
                "REGRESSION: saturation {saturation}: 359° -> row {below}, 1° -> row {above}"
            );
        }
    }

    // ========================================================================
    // Totality
    // ========================================================================

    /// The resolver must return an in-range cell for every RGB input.
    #[test]
    fn test_locate_is_total_over_rgb() {
        let grid = RainbowGrid::default();
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let cell = grid.locate(Rgb::new(r, g, b));
                    assert!(cell.row < grid.row_count());
                    assert!(cell.column < grid.value_count());
                }
            }
        }
    }

    #[test]
    fn test_locate_tolerates_out_of_range_hsv() {
        let grid = RainbowGrid::default();
        for hsv in [
            Hsv::new(-30.0, 0.5, 0.5),
            Hsv::new(720.0, 1.0, 1.0),
            Hsv::new(90.0, 2.0, -1.0),
            Hsv::new(f32::NAN, f32::NAN, f32::NAN),
        ] {
            let cell = grid.locate_hsv(hsv);
            assert!(cell.row < grid.row_count(), "{hsv:?} -> {cell:?}");
            assert!(cell.column < grid.value_count(), "{hsv:?} -> {cell:?}");
        }
    }

    // ========================================================================
    // Wrapping list
    // ========================================================================

    #[test]
    fn test_middle_position_is_row_aligned() {
        for count in 1..=500 {
            let count = NonZeroUsize::new(count).unwrap();
            assert_eq!(middle_position(count) % count.get(), 0);
        }
    }

    /// Scrolling past the last valid list index must continue with the
    /// next row rather than restarting at an arbitrary one.
    #[test]
    fn test_scrolling_across_virtual_end_is_seamless() {
        let source = SwatchSource::default();
        let wrapping: WrappingRows = source.wrapping();
        let mut index = wrapping.span() - 3;
        let mut previous_row = wrapping.row_of(index);
        for _ in 0..6 {
            index = wrapping.offset(index, 1);
            let row = wrapping.row_of(index);
            assert_eq!(row, (previous_row + 1) % source.row_count());
            assert!(index < VIRTUAL_ROW_COUNT);
            previous_row = row;
        }
    }

    // ========================================================================
    // Fixed palettes
    // ========================================================================

    #[test]
    fn test_fixed_palette_length_fails_fast() {
        let colors = vec![Rgb::BLACK; 5];
        assert_eq!(
            FixedPalette::new(&colors, 4),
            Err(PaletteError::RaggedLength {
                len: 5,
                value_count: 4
            })
        );
        assert_eq!(FixedPalette::new(&colors[..4], 4).unwrap().row_count(), 1);
    }

    /// Fixed mode hands back exactly the listed colors, even those no
    /// rainbow cell produces.
    #[test]
    fn test_fixed_mode_does_not_regenerate_colors() {
        let colors = [
            Rgb::new(1, 2, 3),
            Rgb::new(250, 128, 7),
            Rgb::new(9, 9, 10),
            Rgb::new(77, 0, 77),
        ];
        let source =
            SwatchSource::from_colors(Some(&colors[..]), GridDimensions::default()).unwrap();
        let index = source.initial_list_index(Some(colors[2]));
        assert_eq!(source.row_at(index), colors.to_vec());
        assert_eq!(source.locate(colors[2]), Cell::new(0, 2));
    }

    #[test]
    fn test_documented_first_swatch() {
        let grid = RainbowGrid::default();
        let hsv = grid.hsv_at(1, 0);
        assert_eq!(hsv.h, 0.0);
        assert!((hsv.s - 1.0 / 3.0).abs() < 1e-6);
        assert!((hsv.v - 0.15).abs() < 1e-6);
    }
}
