use crate::error::RenderError;

// Largest screen we render for
const MAX_SCREEN_WIDTH: u32 = 2000;
const MAX_SCREEN_HEIGHT: u32 = 2000;

/// Screen the picker is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSpec {
    pub width: u32,
    pub height: u32,
    /// Round screens get the wheel effect on list rows
    pub round: bool,
}

impl ScreenSpec {
    /// Common round watch: 454x454
    pub const ROUND_454: Self = Self {
        width: 454,
        height: 454,
        round: true,
    };

    /// Common square watch: 320x320
    pub const SQUARE_320: Self = Self {
        width: 320,
        height: 320,
        round: false,
    };

    /// Validate dimensions coming from a request or the config file
    pub fn from_dimensions(width: u32, height: u32, round: bool) -> Result<Self, RenderError> {
        if width == 0 || height == 0 || width > MAX_SCREEN_WIDTH || height > MAX_SCREEN_HEIGHT {
            return Err(RenderError::UnsupportedDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            round,
        })
    }

    /// Number of whole rows of `item_height` pixels that fit on screen
    pub fn lines_per_screen(&self, item_height: u32) -> usize {
        (self.height / item_height.max(1)) as usize
    }
}

impl Default for ScreenSpec {
    fn default() -> Self {
        Self::ROUND_454
    }
}
