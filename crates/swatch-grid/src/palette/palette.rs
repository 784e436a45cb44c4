//! Caller-supplied palette laid out as rows of swatches.
//!
//! A flat list of colors is cut into rows of `value_count` entries each,
//! so entry `i` is drawn at row `i / value_count`, column `i % value_count`.

use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Rgb;
use crate::grid::Cell;

/// A fixed palette grouped into rows of equal width.
///
/// # Example
///
/// ```
/// use swatch_grid::{Cell, FixedPalette, Rgb};
///
/// let colors = [
///     Rgb::BLACK,
///     Rgb::new(85, 85, 85),
///     Rgb::new(170, 170, 170),
///     Rgb::WHITE,
/// ];
/// let palette = FixedPalette::new(&colors, 4).unwrap();
///
/// assert_eq!(palette.row_count(), 1);
/// assert_eq!(palette.locate(Rgb::WHITE), Cell::new(0, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPalette {
    colors: Vec<Rgb>,
    value_count: usize,
}

impl FixedPalette {
    /// Create a palette from a flat color list.
    ///
    /// # Errors
    ///
    /// - `colors` is empty ([`PaletteError::EmptyPalette`])
    /// - `colors.len()` is not a multiple of `value_count`, or `value_count`
    ///   is zero ([`PaletteError::RaggedLength`])
    ///
    /// Duplicate colors are accepted; lookups return the first occurrence.
    pub fn new(colors: &[Rgb], value_count: usize) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if value_count == 0 || colors.len() % value_count != 0 {
            return Err(PaletteError::RaggedLength {
                len: colors.len(),
                value_count,
            });
        }

        Ok(Self {
            colors: colors.to_vec(),
            value_count,
        })
    }

    /// Create a palette from hex color strings.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] if any hex string is invalid,
    /// or the validation errors of [`FixedPalette::new`].
    ///
    /// # Example
    ///
    /// ```
    /// use swatch_grid::FixedPalette;
    ///
    /// let palette = FixedPalette::from_hex(&["#000", "#555", "#AAA", "#FFF"], 4).unwrap();
    /// assert_eq!(palette.len(), 4);
    /// ```
    pub fn from_hex(colors: &[&str], value_count: usize) -> Result<Self, PaletteError> {
        let parsed = colors
            .iter()
            .map(|s| Rgb::from_str(s).map_err(PaletteError::ParseColor))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&parsed, value_count)
    }

    /// Number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Number of swatches per row.
    #[inline]
    pub fn value_count(&self) -> usize {
        self.value_count
    }

    /// Number of rows (never zero).
    #[inline]
    pub fn row_count(&self) -> usize {
        self.colors.len() / self.value_count
    }

    /// All colors, in list order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// The swatches of a row. `row` is taken modulo [`row_count`](Self::row_count).
    pub fn row(&self, row: usize) -> &[Rgb] {
        let start = (row % self.row_count()) * self.value_count;
        &self.colors[start..start + self.value_count]
    }

    /// The color drawn at `(row, column)`.
    ///
    /// `row` wraps; `column` must be below [`value_count`](Self::value_count).
    #[inline]
    pub fn color_at(&self, row: usize, column: usize) -> Rgb {
        self.row(row)[column]
    }

    /// Cell of the first exact occurrence of `color`, if any.
    pub fn position_of(&self, color: Rgb) -> Option<Cell> {
        self.colors
            .iter()
            .position(|&c| c == color)
            .map(|idx| Cell::new(idx / self.value_count, idx % self.value_count))
    }

    /// Cell of `color`, or the first cell `(0, 0)` when it is not in the palette.
    #[inline]
    pub fn locate(&self, color: Rgb) -> Cell {
        self.position_of(color).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ParseColorError;

    /// The twelve-color list a typical watch face settings screen offers.
    fn twelve_colors() -> Vec<Rgb> {
        [
            0x000000, 0x444444, 0x888888, 0xCCCCCC, 0xFFFFFF, 0xFF0000, 0x00FF00, 0x0000FF,
            0xFFFF00, 0x00FFFF, 0xFF00FF, 0xBB00DD,
        ]
        .into_iter()
        .map(Rgb::from_packed)
        .collect()
    }

    #[test]
    fn test_rows_are_value_count_wide() {
        let palette = FixedPalette::new(&twelve_colors(), 4).unwrap();
        assert_eq!(palette.len(), 12);
        assert_eq!(palette.row_count(), 3);
        assert_eq!(palette.row(1), &twelve_colors()[4..8]);
        assert_eq!(palette.color_at(2, 3), Rgb::from_packed(0xBB00DD));
    }

    #[test]
    fn test_row_wraps() {
        let palette = FixedPalette::new(&twelve_colors(), 4).unwrap();
        assert_eq!(palette.row(3), palette.row(0));
        assert_eq!(palette.color_at(3_000_001, 0), palette.color_at(1, 0));
    }

    #[test]
    fn test_exactly_one_row() {
        let palette = FixedPalette::new(&twelve_colors()[..4], 4).unwrap();
        assert_eq!(palette.row_count(), 1);
    }

    #[test]
    fn test_empty_error() {
        assert_eq!(FixedPalette::new(&[], 4), Err(PaletteError::EmptyPalette));
    }

    #[test]
    fn test_ragged_length_error() {
        let result = FixedPalette::new(&twelve_colors()[..5], 4);
        assert_eq!(
            result,
            Err(PaletteError::RaggedLength {
                len: 5,
                value_count: 4
            })
        );

        // Fewer colors than one row
        assert!(matches!(
            FixedPalette::new(&twelve_colors()[..3], 4),
            Err(PaletteError::RaggedLength { .. })
        ));
    }

    #[test]
    fn test_zero_value_count_rejected() {
        assert!(matches!(
            FixedPalette::new(&twelve_colors(), 0),
            Err(PaletteError::RaggedLength { value_count: 0, .. })
        ));
    }

    #[test]
    fn test_locate_exact_match() {
        let palette = FixedPalette::new(&twelve_colors(), 4).unwrap();
        assert_eq!(palette.locate(Rgb::WHITE), Cell::new(1, 0));
        assert_eq!(palette.locate(Rgb::from_packed(0xFF00FF)), Cell::new(2, 2));
        assert_eq!(palette.position_of(Rgb::new(0, 0, 255)), Some(Cell::new(1, 3)));
    }

    #[test]
    fn test_locate_missing_falls_back_to_first_cell() {
        let palette = FixedPalette::new(&twelve_colors(), 4).unwrap();
        let missing = Rgb::new(1, 2, 3);
        assert_eq!(palette.position_of(missing), None);
        assert_eq!(palette.locate(missing), Cell::new(0, 0));
    }

    #[test]
    fn test_duplicates_resolve_to_first_occurrence() {
        let colors = [Rgb::WHITE, Rgb::BLACK, Rgb::BLACK, Rgb::WHITE];
        let palette = FixedPalette::new(&colors, 2).unwrap();
        assert_eq!(palette.locate(Rgb::WHITE), Cell::new(0, 0));
        assert_eq!(palette.locate(Rgb::BLACK), Cell::new(0, 1));
    }

    #[test]
    fn test_from_hex() {
        let palette = FixedPalette::from_hex(&["#000000", "#FFF"], 2).unwrap();
        assert_eq!(palette.colors(), &[Rgb::BLACK, Rgb::WHITE]);
    }

    #[test]
    fn test_from_hex_invalid() {
        let result = FixedPalette::from_hex(&["#000000", "#GG0000"], 2);
        assert_eq!(
            result,
            Err(PaletteError::ParseColor(ParseColorError::InvalidDigit('G')))
        );
    }
}
