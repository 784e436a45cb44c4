//! Grid dimensions
//!
//! The bucket counts and the value floor are plain configuration so that
//! small grids can be exercised in tests and hosts can pick their own
//! density.

use super::error::GridError;
use crate::wrap::VIRTUAL_ROW_COUNT;

/// Shape of the rainbow grid.
///
/// The default is 36 hues x 3 saturation levels x 4 value levels with a
/// value floor of 0.15, which gives 109 rows of 4 swatches.
///
/// # Example
///
/// ```
/// use swatch_grid::GridDimensions;
///
/// let dims = GridDimensions::default();
/// assert_eq!(dims.row_count(), 36 * 3 + 1);
///
/// let small = GridDimensions::new(4, 2, 3, 0.2).unwrap();
/// assert_eq!(small.row_count(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridDimensions {
    hue_count: usize,
    saturation_count: usize,
    value_count: usize,
    value_min: f32,
}

impl GridDimensions {
    /// Default number of hue buckets.
    pub const DEFAULT_HUE_COUNT: usize = 36;
    /// Default number of saturation levels per hue.
    pub const DEFAULT_SATURATION_COUNT: usize = 3;
    /// Default number of swatches per row.
    pub const DEFAULT_VALUE_COUNT: usize = 4;
    /// Default value floor of chromatic rows.
    pub const DEFAULT_VALUE_MIN: f32 = 0.15;

    /// Validate and create grid dimensions.
    ///
    /// # Errors
    ///
    /// - `hue_count == 0` ([`GridError::ZeroHueCount`])
    /// - `saturation_count == 0` ([`GridError::ZeroSaturationCount`])
    /// - `value_count < 2` ([`GridError::TooFewValues`])
    /// - `value_min` not in `0.0..1.0` ([`GridError::ValueMinOutOfRange`])
    /// - more than [`VIRTUAL_ROW_COUNT`] rows ([`GridError::TooManyRows`])
    pub fn new(
        hue_count: usize,
        saturation_count: usize,
        value_count: usize,
        value_min: f32,
    ) -> Result<Self, GridError> {
        if hue_count == 0 {
            return Err(GridError::ZeroHueCount);
        }
        if saturation_count == 0 {
            return Err(GridError::ZeroSaturationCount);
        }
        if value_count < 2 {
            return Err(GridError::TooFewValues { value_count });
        }
        if !(0.0..1.0).contains(&value_min) {
            return Err(GridError::ValueMinOutOfRange { value_min });
        }
        let row_count = hue_count
            .checked_mul(saturation_count)
            .and_then(|chromatic| chromatic.checked_add(1));
        if !matches!(row_count, Some(rows) if rows <= VIRTUAL_ROW_COUNT) {
            return Err(GridError::TooManyRows {
                hue_count,
                saturation_count,
            });
        }

        Ok(Self {
            hue_count,
            saturation_count,
            value_count,
            value_min,
        })
    }

    /// Number of hue buckets.
    #[inline]
    pub fn hue_count(&self) -> usize {
        self.hue_count
    }

    /// Number of saturation levels per hue.
    #[inline]
    pub fn saturation_count(&self) -> usize {
        self.saturation_count
    }

    /// Number of swatches per row.
    #[inline]
    pub fn value_count(&self) -> usize {
        self.value_count
    }

    /// Lowest value used by chromatic rows.
    #[inline]
    pub fn value_min(&self) -> f32 {
        self.value_min
    }

    /// Number of chromatic rows (every hue at every saturation).
    #[inline]
    pub fn chromatic_row_count(&self) -> usize {
        self.hue_count * self.saturation_count
    }

    /// Total number of rows, including the achromatic row 0.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.chromatic_row_count() + 1
    }
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self {
            hue_count: Self::DEFAULT_HUE_COUNT,
            saturation_count: Self::DEFAULT_SATURATION_COUNT,
            value_count: Self::DEFAULT_VALUE_COUNT,
            value_min: Self::DEFAULT_VALUE_MIN,
        }
    }
}
