pub mod effects;
pub mod picker_svg;
pub mod svg_to_png;

pub use picker_svg::{PickerScene, RevealDisc};
pub use svg_to_png::SvgRenderer;
