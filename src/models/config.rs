use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use swatch_grid::{
    FixedPalette, GridDimensions, GridError, PaletteError, RainbowGrid, SwatchSource,
};
use thiserror::Error;

use super::ScreenSpec;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Shape of the generated rainbow grid
    #[serde(default)]
    pub grid: GridConfig,

    /// List layout and effects
    #[serde(default)]
    pub picker: PickerConfig,

    /// Default screen for renders that don't specify one
    #[serde(default)]
    pub screen: ScreenConfig,

    /// Named fixed palettes (hex colors, row by row)
    #[serde(default)]
    pub palettes: HashMap<String, Vec<String>>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("Invalid palette {name:?}: {source}")]
    Palette {
        name: String,
        #[source]
        source: PaletteError,
    },

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),
}

/// Rainbow grid dimensions
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GridConfig {
    #[serde(default = "default_hue_count")]
    pub hue_count: usize,

    #[serde(default = "default_saturation_count")]
    pub saturation_count: usize,

    /// Swatches per row (also the row width of fixed palettes)
    #[serde(default = "default_value_count")]
    pub value_count: usize,

    /// Darkest value used on chromatic rows
    #[serde(default = "default_value_min")]
    pub value_min: f32,

    /// Rows searched on each side of the coarse estimate when locating a
    /// color (default: twice the saturation count)
    #[serde(default)]
    pub search_radius: Option<usize>,
}

fn default_hue_count() -> usize {
    GridDimensions::DEFAULT_HUE_COUNT
}

fn default_saturation_count() -> usize {
    GridDimensions::DEFAULT_SATURATION_COUNT
}

fn default_value_count() -> usize {
    GridDimensions::DEFAULT_VALUE_COUNT
}

fn default_value_min() -> f32 {
    GridDimensions::DEFAULT_VALUE_MIN
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            hue_count: default_hue_count(),
            saturation_count: default_saturation_count(),
            value_count: default_value_count(),
            value_min: default_value_min(),
            search_radius: None,
        }
    }
}

impl GridConfig {
    pub fn dimensions(&self) -> Result<GridDimensions, GridError> {
        GridDimensions::new(
            self.hue_count,
            self.saturation_count,
            self.value_count,
            self.value_min,
        )
    }

    pub fn rainbow(&self) -> Result<RainbowGrid, GridError> {
        let grid = RainbowGrid::new(self.dimensions()?);
        Ok(match self.search_radius {
            Some(radius) => grid.with_search_radius(radius),
            None => grid,
        })
    }
}

/// List layout and effect parameters
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PickerConfig {
    /// Height of one row of swatches in pixels
    #[serde(default = "default_list_item_height")]
    pub list_item_height: u32,

    /// Strength of the wheel effect on round screens
    #[serde(default = "default_rotation_factor")]
    pub rotation_factor: f32,

    /// Draw the picked color over the list once a session is finished
    #[serde(default = "default_reveal")]
    pub reveal: bool,

    /// Sessions kept in memory; the oldest is dropped when full
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

fn default_list_item_height() -> u32 {
    48
}

fn default_rotation_factor() -> f32 {
    20.0
}

fn default_reveal() -> bool {
    true
}

fn default_max_sessions() -> usize {
    crate::services::DEFAULT_MAX_SESSIONS
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            list_item_height: default_list_item_height(),
            rotation_factor: default_rotation_factor(),
            reveal: default_reveal(),
            max_sessions: default_max_sessions(),
        }
    }
}

/// Screen used when a request doesn't say otherwise
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScreenConfig {
    #[serde(default = "default_screen_size")]
    pub width: u32,

    #[serde(default = "default_screen_size")]
    pub height: u32,

    #[serde(default = "default_round")]
    pub round: bool,
}

fn default_screen_size() -> u32 {
    454
}

fn default_round() -> bool {
    true
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: default_screen_size(),
            height: default_screen_size(),
            round: default_round(),
        }
    }
}

impl ScreenConfig {
    /// Validated screen, falling back to the round preset when out of bounds.
    pub fn spec(&self) -> ScreenSpec {
        ScreenSpec::from_dimensions(self.width, self.height, self.round).unwrap_or_else(|e| {
            tracing::warn!(%e, "Configured screen rejected, using round 454x454");
            ScreenSpec::ROUND_454
        })
    }
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// Read and parse failures are logged and yield the defaults, so a
    /// missing file never prevents the picker from starting.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match Self::try_load(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    palettes = config.palettes.len(),
                    hues = config.grid.hue_count,
                    saturations = config.grid.saturation_count,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from a YAML file, reporting failures.
    pub fn try_load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a named palette into rows of `grid.value_count` colors.
    pub fn palette(&self, name: &str) -> Result<FixedPalette, ConfigError> {
        let colors = self
            .palettes
            .get(name)
            .ok_or_else(|| ConfigError::UnknownPalette(name.to_string()))?;
        let colors: Vec<&str> = colors.iter().map(String::as_str).collect();

        FixedPalette::from_hex(&colors, self.grid.value_count).map_err(|source| {
            ConfigError::Palette {
                name: name.to_string(),
                source,
            }
        })
    }

    /// Swatch source for an optional named palette (rainbow when `None`).
    pub fn swatch_source(&self, palette: Option<&str>) -> Result<SwatchSource, ConfigError> {
        match palette {
            Some(name) => Ok(SwatchSource::fixed(self.palette(name)?)),
            None => Ok(SwatchSource::rainbow(self.grid.rainbow()?)),
        }
    }

    /// Check the grid and every named palette up front.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.rainbow()?;
        for name in self.palettes.keys() {
            self.palette(name)?;
        }
        Ok(())
    }
}
