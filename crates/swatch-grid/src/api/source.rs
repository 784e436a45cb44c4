//! SwatchSource -- what the picker list asks for, row by row.
//!
//! A [`SwatchSource`] hides whether the swatches come from the generated
//! rainbow or from a caller-supplied list. The front end only deals in
//! list indices (positions in the wrapping virtual list) and columns.

use std::num::NonZeroUsize;

use super::error::SwatchError;
use crate::color::Rgb;
use crate::grid::{Cell, GridDimensions, RainbowGrid};
use crate::palette::FixedPalette;
use crate::wrap::WrappingRows;

/// Where the picker's swatches come from.
///
/// # Example
///
/// ```
/// use swatch_grid::{Rgb, SwatchSource};
///
/// let source = SwatchSource::default();
/// assert!(source.is_rainbow());
/// assert_eq!(source.row_count(), 109);
///
/// // Re-open on a previously picked color
/// let previous = Rgb::new(0, 255, 0);
/// let index = source.initial_list_index(Some(previous));
/// assert_eq!(source.color_at(index, 3), previous);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SwatchSource {
    /// Colors generated from hue, saturation and value
    Rainbow(RainbowGrid),
    /// Colors taken verbatim from a list
    Fixed(FixedPalette),
}

impl SwatchSource {
    #[inline]
    pub fn rainbow(grid: RainbowGrid) -> Self {
        SwatchSource::Rainbow(grid)
    }

    #[inline]
    pub fn fixed(palette: FixedPalette) -> Self {
        SwatchSource::Fixed(palette)
    }

    /// Fixed mode when `colors` is given, rainbow mode otherwise.
    ///
    /// Fixed palettes are cut into rows of `dims.value_count()` colors.
    ///
    /// # Errors
    ///
    /// Returns [`SwatchError::Palette`] for an empty or ragged list.
    pub fn from_colors(colors: Option<&[Rgb]>, dims: GridDimensions) -> Result<Self, SwatchError> {
        match colors {
            Some(colors) => Ok(Self::fixed(FixedPalette::new(colors, dims.value_count())?)),
            None => Ok(Self::rainbow(RainbowGrid::new(dims))),
        }
    }

    pub fn is_rainbow(&self) -> bool {
        matches!(self, SwatchSource::Rainbow(_))
    }

    pub fn row_count(&self) -> usize {
        match self {
            SwatchSource::Rainbow(grid) => grid.row_count(),
            SwatchSource::Fixed(palette) => palette.row_count(),
        }
    }

    pub fn value_count(&self) -> usize {
        match self {
            SwatchSource::Rainbow(grid) => grid.value_count(),
            SwatchSource::Fixed(palette) => palette.value_count(),
        }
    }

    /// Index arithmetic for the virtual list over this source's rows.
    pub fn wrapping(&self) -> WrappingRows {
        // Both modes guarantee at least one row
        WrappingRows::new(NonZeroUsize::new(self.row_count()).unwrap_or(NonZeroUsize::MIN))
    }

    /// First list index to show when nothing was picked before.
    #[inline]
    pub fn middle_position(&self) -> usize {
        self.wrapping().middle()
    }

    /// Swatches of the row shown at `list_index`, darkest first.
    pub fn row_at(&self, list_index: usize) -> Vec<Rgb> {
        let row = self.wrapping().row_of(list_index);
        match self {
            SwatchSource::Rainbow(grid) => grid.row_colors(row),
            SwatchSource::Fixed(palette) => palette.row(row).to_vec(),
        }
    }

    /// Color of the swatch at `column` in the row shown at `list_index`.
    ///
    /// `column` must be below [`value_count`](Self::value_count).
    pub fn color_at(&self, list_index: usize, column: usize) -> Rgb {
        let row = self.wrapping().row_of(list_index);
        match self {
            SwatchSource::Rainbow(grid) => grid.color_at(row, column),
            SwatchSource::Fixed(palette) => palette.color_at(row, column),
        }
    }

    /// Grid cell to highlight for `color`.
    ///
    /// Rainbow mode uses the approximate nearest-cell search; fixed mode
    /// uses exact matching and falls back to `(0, 0)`.
    pub fn locate(&self, color: Rgb) -> Cell {
        match self {
            SwatchSource::Rainbow(grid) => grid.locate(color),
            SwatchSource::Fixed(palette) => palette.locate(color),
        }
    }

    /// List index to scroll to when the picker opens.
    ///
    /// The middle position, moved forward to the row of `previous` if one
    /// is given.
    pub fn initial_list_index(&self, previous: Option<Rgb>) -> usize {
        let wrapping = self.wrapping();
        match previous {
            Some(color) => wrapping.list_index_for(self.locate(color).row),
            None => wrapping.middle(),
        }
    }
}

impl Default for SwatchSource {
    fn default() -> Self {
        Self::rainbow(RainbowGrid::default())
    }
}
