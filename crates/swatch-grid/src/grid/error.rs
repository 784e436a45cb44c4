//! Error type for grid dimension validation.

use std::fmt;

use crate::wrap::VIRTUAL_ROW_COUNT;

/// Returned when [`GridDimensions`](super::GridDimensions) are out of range.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// At least one hue is required
    ZeroHueCount,
    /// At least one saturation level is required
    ZeroSaturationCount,
    /// A row needs at least two value levels (darkest and brightest)
    TooFewValues {
        /// The rejected value count
        value_count: usize,
    },
    /// The value floor must lie in `0.0..1.0`
    ValueMinOutOfRange {
        /// The rejected floor
        value_min: f32,
    },
    /// The rows don't fit in the virtual list
    TooManyRows {
        /// The rejected hue count
        hue_count: usize,
        /// The rejected saturation count
        saturation_count: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ZeroHueCount => write!(f, "hue count must be at least 1"),
            GridError::ZeroSaturationCount => write!(f, "saturation count must be at least 1"),
            GridError::TooFewValues { value_count } => {
                write!(f, "value count must be at least 2, got {}", value_count)
            }
            GridError::ValueMinOutOfRange { value_min } => {
                write!(f, "value floor must be in [0, 1), got {}", value_min)
            }
            GridError::TooManyRows {
                hue_count,
                saturation_count,
            } => write!(
                f,
                "{} hues x {} saturations exceed {} rows",
                hue_count, saturation_count, VIRTUAL_ROW_COUNT
            ),
        }
    }
}

impl std::error::Error for GridError {}
