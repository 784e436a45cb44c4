//! The rainbow grid: coordinates, dimensions and the two-way mapping
//! between cells and colors.
//!
//! A row is a hue/saturation bucket, a column is a value (brightness)
//! bucket. Row 0 is the achromatic row (black through white); rows
//! `1..row_count` enumerate every hue with every saturation level:
//!
//! ```text
//! row 0          grey   : black ........................ white
//! row 1          hue 0  , saturation 1/S
//! row 2          hue 0  , saturation 2/S
//! ...
//! row S          hue 0  , saturation 1
//! row S+1        hue 360/H, saturation 1/S
//! ...
//! row H*S        last hue, saturation 1
//! ```

mod dimensions;
mod error;
mod indexer;
mod resolver;

pub use dimensions::GridDimensions;
pub use error::GridError;
pub use indexer::RainbowGrid;
pub use resolver::polar_distance_squared;

/// A hue/saturation pair, the coordinates of a row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HueSaturation {
    /// Hue in degrees, `0.0..360.0`
    pub hue: f32,
    /// Saturation, `0.0..=1.0`
    pub saturation: f32,
}

impl HueSaturation {
    /// Create a new hue/saturation pair.
    #[inline]
    pub fn new(hue: f32, saturation: f32) -> Self {
        Self { hue, saturation }
    }
}

/// A swatch position: the row within the grid and the column within the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    /// Row index (hue/saturation bucket, or palette row)
    pub row: usize,
    /// Column index (value bucket, or position within a palette row)
    pub column: usize,
}

impl Cell {
    /// Create a new cell.
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}
