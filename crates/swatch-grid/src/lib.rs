#![allow(clippy::module_inception)]

//! swatch-grid: color swatch grids for small-screen color pickers
//!
//! A picker on a watch shows an endless, wrapping list of rows. Each row
//! holds a handful of swatches. This crate provides the mapping between
//! list positions and colors, in both directions.
//!
//! # Quick Start
//!
//! [`SwatchSource`] is the entry point a picker front end uses:
//!
//! ```
//! use swatch_grid::{Cell, Rgb, SwatchSource};
//!
//! let source = SwatchSource::default();
//!
//! // Open on the previously picked color
//! let previous = Rgb::new(255, 0, 0);
//! let index = source.initial_list_index(Some(previous));
//! let row = source.row_at(index);
//! assert_eq!(row.len(), source.value_count());
//! assert_eq!(source.locate(previous), Cell::new(3, 3));
//! ```
//!
//! # Rainbow Mode
//!
//! [`RainbowGrid`] generates colors from [`GridDimensions`]: `hue_count`
//! hues times `saturation_count` saturation levels, plus one achromatic row
//! at index 0. Columns step through `value_count` brightness levels; every
//! row except the achromatic one starts at the `value_min` floor.
//!
//! Going back from a color to a cell is not exact. [`RainbowGrid::locate`]
//! estimates a row, searches the rows around it for the closest
//! hue/saturation on the color disk, then inverts the value formula for the
//! column. The search radius defaults to twice the saturation count. This is
//! a heuristic: it recovers every swatch of the default grid, but is not
//! proven for every grid shape. Widen it with
//! [`RainbowGrid::with_search_radius`] if a custom grid misses cells.
//!
//! # Fixed Mode
//!
//! [`FixedPalette`] takes a caller's flat list of colors and cuts it into
//! rows. Lookups are exact matches; an unknown color maps to `(0, 0)`.
//!
//! # Wrapping
//!
//! [`WrappingRows`] turns indices of the virtual list (of length
//! [`VIRTUAL_ROW_COUNT`]) into rows, with explicit modulo arithmetic that
//! stays correct at both ends of the index range.

pub mod api;
pub mod color;
pub mod grid;
pub mod palette;
pub mod wrap;

#[cfg(test)]
mod domain_tests;

pub use api::{SwatchError, SwatchSource};
pub use color::{Hsv, Rgb};
pub use grid::{Cell, GridDimensions, GridError, HueSaturation, RainbowGrid};
pub use palette::{FixedPalette, PaletteError, ParseColorError};
pub use wrap::{middle_position, WrappingRows, VIRTUAL_ROW_COUNT};
