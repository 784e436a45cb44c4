//! Unified error type for the swatch-grid public API.

use crate::grid::GridError;
use crate::palette::{PaletteError, ParseColorError};
use std::fmt;

/// Any error the crate can report, for `?` propagation in callers.
///
/// # Example
///
/// ```
/// use swatch_grid::{GridDimensions, Rgb, SwatchError, SwatchSource};
///
/// fn black_and_white() -> Result<SwatchSource, SwatchError> {
///     let dims = GridDimensions::new(1, 1, 2, 0.2)?;
///     let colors: [Rgb; 2] = ["#000000".parse()?, "#FFFFFF".parse()?];
///     SwatchSource::from_colors(Some(&colors[..]), dims)
/// }
///
/// assert_eq!(black_and_white().unwrap().row_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SwatchError {
    /// Invalid grid dimensions
    Grid(GridError),
    /// Fixed palette validation error
    Palette(PaletteError),
    /// Invalid hex color string
    ParseColor(ParseColorError),
}

impl fmt::Display for SwatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwatchError::Grid(err) => write!(f, "grid error: {}", err),
            SwatchError::Palette(err) => write!(f, "palette error: {}", err),
            SwatchError::ParseColor(err) => write!(f, "color parse error: {}", err),
        }
    }
}

impl std::error::Error for SwatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SwatchError::Grid(err) => Some(err),
            SwatchError::Palette(err) => Some(err),
            SwatchError::ParseColor(err) => Some(err),
        }
    }
}

impl From<GridError> for SwatchError {
    fn from(err: GridError) -> Self {
        SwatchError::Grid(err)
    }
}

impl From<PaletteError> for SwatchError {
    fn from(err: PaletteError) -> Self {
        SwatchError::Palette(err)
    }
}

impl From<ParseColorError> for SwatchError {
    fn from(err: ParseColorError) -> Self {
        SwatchError::ParseColor(err)
    }
}
