use swatch_grid::Rgb;

/// What a caller hands the picker when opening it.
///
/// The request code is echoed back in the [`PickResult`] so a caller with
/// several pickers in flight can tell the answers apart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PickRequest {
    pub request_code: i32,
    /// Previously picked color, to scroll to and highlight
    pub old_color: Option<Rgb>,
    /// Fixed palette, row by row; the rainbow is used when absent
    pub colors: Option<Vec<Rgb>>,
}

impl PickRequest {
    pub fn new(request_code: i32) -> Self {
        Self {
            request_code,
            ..Default::default()
        }
    }

    pub fn old_color(mut self, color: Rgb) -> Self {
        self.old_color = Some(color);
        self
    }

    pub fn colors(mut self, colors: Vec<Rgb>) -> Self {
        self.colors = Some(colors);
        self
    }
}

/// How a picker session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    Picked(Rgb),
    /// Closed without a selection
    Canceled,
}

/// Answer delivered to the caller, keyed by its request code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickResult {
    pub request_code: i32,
    pub outcome: PickOutcome,
}

impl PickResult {
    pub fn picked(request_code: i32, color: Rgb) -> Self {
        Self {
            request_code,
            outcome: PickOutcome::Picked(color),
        }
    }

    pub fn canceled(request_code: i32) -> Self {
        Self {
            request_code,
            outcome: PickOutcome::Canceled,
        }
    }

    /// The picked color, or `None` if the picker was canceled
    pub fn picked_color(&self) -> Option<Rgb> {
        match self.outcome {
            PickOutcome::Picked(color) => Some(color),
            PickOutcome::Canceled => None,
        }
    }
}
