pub mod config;
pub mod pick;
pub mod screen;

pub use config::{AppConfig, ConfigError, GridConfig, PickerConfig, ScreenConfig};
pub use pick::{PickOutcome, PickRequest, PickResult};
pub use screen::ScreenSpec;
