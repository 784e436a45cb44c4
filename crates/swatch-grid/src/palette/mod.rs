//! Fixed-list palette mode
//!
//! Instead of the generated rainbow, a caller may supply its own flat list
//! of colors. This module validates that list and performs exact-match
//! lookups in it.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::FixedPalette;
