//! Color types and conversion utilities
//!
//! Two representations cover everything the picker needs:
//!
//! - **Rgb**: the packed 24-bit color that crosses the picker boundary
//!   (previous color in, picked color out, fixed palette entries).
//! - **Hsv**: hue/saturation/value, the space the rainbow grid is laid out in.
//!
//! # Example
//!
//! ```
//! use swatch_grid::{Hsv, Rgb};
//!
//! let orange: Rgb = "#FF8000".parse().unwrap();
//! let hsv = Hsv::from(orange);
//! assert!((hsv.h - 30.1).abs() < 0.1);
//!
//! // Back to packed form without loss
//! assert_eq!(Rgb::from(hsv), orange);
//! ```

mod hsv;
mod rgb;

pub use hsv::Hsv;
pub use rgb::Rgb;
