//! Public API for the swatch-grid crate.
//!
//! This module provides [`SwatchSource`], the single entry point a picker
//! front end talks to, and [`SwatchError`], the unified error type.

mod error;
mod source;

pub use error::SwatchError;
pub use source::SwatchSource;
