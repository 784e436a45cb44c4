use chrono::{DateTime, Utc};
use swatch_grid::{Cell, Rgb, SwatchSource};
use thiserror::Error;

use crate::models::{PickRequest, PickResult, ScreenSpec};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Picker session already finished")]
    AlreadyFinished,

    #[error("Column {column} out of range for {value_count} swatches per row")]
    ColumnOutOfRange { column: usize, value_count: usize },
}

/// One row of the virtual list as shown on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    pub list_index: usize,
    pub row: usize,
    pub colors: Vec<Rgb>,
}

/// A swatch the user tapped, kept for the reveal effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TappedSwatch {
    pub list_index: usize,
    pub column: usize,
    pub color: Rgb,
}

/// State of one open (or finished) color picker.
///
/// Everything that depends on the previous color is computed once, when the
/// session opens. The initial scroll is handed out a single time so that a
/// client re-laying out the list doesn't jump back to it.
#[derive(Debug, Clone)]
pub struct PickerSession {
    request_code: i32,
    source: SwatchSource,
    screen: ScreenSpec,
    lines_per_screen: usize,
    old_color: Option<Rgb>,
    initial_index: usize,
    first_visible_index: usize,
    highlighted: Option<Cell>,
    initial_scroll_pending: bool,
    position: usize,
    tapped: Option<TappedSwatch>,
    result: Option<PickResult>,
    opened_at: DateTime<Utc>,
}

impl PickerSession {
    pub fn new(
        request: &PickRequest,
        source: SwatchSource,
        screen: ScreenSpec,
        list_item_height: u32,
    ) -> Self {
        let lines_per_screen = screen.lines_per_screen(list_item_height);
        let initial_index = source.initial_list_index(request.old_color);
        // Center the initial row: the first visible one sits half a screen above
        let first_visible_index = initial_index.saturating_sub(lines_per_screen / 2);
        let highlighted = request.old_color.map(|color| source.locate(color));

        Self {
            request_code: request.request_code,
            source,
            screen,
            lines_per_screen,
            old_color: request.old_color,
            initial_index,
            first_visible_index,
            highlighted,
            initial_scroll_pending: true,
            position: first_visible_index,
            tapped: None,
            result: None,
            opened_at: Utc::now(),
        }
    }

    pub fn request_code(&self) -> i32 {
        self.request_code
    }

    pub fn source(&self) -> &SwatchSource {
        &self.source
    }

    pub fn screen(&self) -> ScreenSpec {
        self.screen
    }

    pub fn lines_per_screen(&self) -> usize {
        self.lines_per_screen
    }

    pub fn old_color(&self) -> Option<Rgb> {
        self.old_color
    }

    /// List index of the row holding the previous color (or the middle)
    pub fn initial_index(&self) -> usize {
        self.initial_index
    }

    pub fn first_visible_index(&self) -> usize {
        self.first_visible_index
    }

    /// Cell of the previous color, if one was given
    pub fn highlighted(&self) -> Option<Cell> {
        self.highlighted
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// The first visible index, the first time only.
    pub fn take_initial_scroll(&mut self) -> Option<usize> {
        if !self.initial_scroll_pending {
            return None;
        }
        self.initial_scroll_pending = false;
        Some(self.first_visible_index)
    }

    /// First visible list index as last scrolled to
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn scroll_to(&mut self, list_index: usize) {
        self.position = list_index;
    }

    /// `count` rows of the virtual list starting at `start`.
    pub fn rows(&self, start: usize, count: usize) -> Vec<VisibleRow> {
        let wrapping = self.source.wrapping();
        (0..count)
            .map(|i| wrapping.offset(start, i as isize))
            .map(|list_index| VisibleRow {
                list_index,
                row: wrapping.row_of(list_index),
                colors: self.source.row_at(list_index),
            })
            .collect()
    }

    pub fn tapped(&self) -> Option<TappedSwatch> {
        self.tapped
    }

    pub fn result(&self) -> Option<PickResult> {
        self.result
    }

    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    /// Pick the swatch at `column` of the row shown at `list_index`.
    pub fn tap(&mut self, list_index: usize, column: usize) -> Result<PickResult, SessionError> {
        self.ensure_open()?;
        let value_count = self.source.value_count();
        if column >= value_count {
            return Err(SessionError::ColumnOutOfRange {
                column,
                value_count,
            });
        }

        let color = self.source.color_at(list_index, column);
        self.tapped = Some(TappedSwatch {
            list_index,
            column,
            color,
        });
        Ok(self.finish(PickResult::picked(self.request_code, color)))
    }

    /// Close the picker without a selection.
    pub fn cancel(&mut self) -> Result<PickResult, SessionError> {
        self.ensure_open()?;
        Ok(self.finish(PickResult::canceled(self.request_code)))
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.is_finished() {
            Err(SessionError::AlreadyFinished)
        } else {
            Ok(())
        }
    }

    fn finish(&mut self, result: PickResult) -> PickResult {
        self.result = Some(result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PickOutcome;
    use swatch_grid::{FixedPalette, WrappingRows};

    fn rainbow_session(request: &PickRequest) -> PickerSession {
        PickerSession::new(request, SwatchSource::default(), ScreenSpec::ROUND_454, 48)
    }

    #[test]
    fn test_open_without_previous_color() {
        let session = rainbow_session(&PickRequest::new(1));
        let middle = SwatchSource::default().middle_position();

        assert_eq!(session.initial_index(), middle);
        assert_eq!(session.lines_per_screen(), 9);
        assert_eq!(session.first_visible_index(), middle - 4);
        assert_eq!(session.highlighted(), None);
        assert!(!session.is_finished());
    }

    #[test]
    fn test_open_on_previous_color() {
        let green = Rgb::new(0, 255, 0);
        let session = rainbow_session(&PickRequest::new(1).old_color(green));
        let middle = SwatchSource::default().middle_position();

        assert_eq!(session.initial_index(), middle + 39);
        assert_eq!(session.first_visible_index(), middle + 35);
        assert_eq!(session.highlighted(), Some(Cell::new(39, 3)));
        assert_eq!(session.old_color(), Some(green));
    }

    #[test]
    fn test_initial_scroll_is_one_shot() {
        let mut session = rainbow_session(&PickRequest::new(1));
        let first = session.first_visible_index();

        assert_eq!(session.take_initial_scroll(), Some(first));
        assert_eq!(session.take_initial_scroll(), None);
        assert_eq!(session.take_initial_scroll(), None);
    }

    #[test]
    fn test_rows_window() {
        let session = rainbow_session(&PickRequest::new(1));
        let start = session.initial_index();
        let rows = session.rows(start - 1, 3);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].row, 108);
        assert_eq!(rows[1].row, 0);
        assert_eq!(rows[1].list_index, start);
        assert_eq!(rows[2].row, 1);
        assert_eq!(rows[1].colors[3], Rgb::WHITE);
    }

    #[test]
    fn test_rows_wrap_at_end_of_virtual_list() {
        let session = rainbow_session(&PickRequest::new(1));
        let span = WrappingRows::new(std::num::NonZeroUsize::new(109).unwrap()).span();
        let rows = session.rows(span - 1, 2);

        assert_eq!(rows[0].row, 108);
        assert_eq!(rows[1].list_index, 0);
        assert_eq!(rows[1].row, 0);
    }

    #[test]
    fn test_tap_returns_color_and_finishes() {
        let mut session = rainbow_session(&PickRequest::new(42));
        let index = session.initial_index() + 3;

        let result = session.tap(index, 3).unwrap();
        assert_eq!(result.request_code, 42);
        assert_eq!(result.outcome, PickOutcome::Picked(Rgb::new(255, 0, 0)));
        assert!(session.is_finished());
        assert_eq!(session.result(), Some(result));
        assert_eq!(session.tapped().map(|t| t.column), Some(3));
    }

    #[test]
    fn test_tap_after_finish_fails() {
        let mut session = rainbow_session(&PickRequest::new(1));
        session.cancel().unwrap();

        assert_eq!(session.tap(0, 0), Err(SessionError::AlreadyFinished));
        assert_eq!(session.cancel(), Err(SessionError::AlreadyFinished));
        assert_eq!(session.result(), Some(PickResult::canceled(1)));
    }

    #[test]
    fn test_tap_column_out_of_range() {
        let mut session = rainbow_session(&PickRequest::new(1));
        assert_eq!(
            session.tap(0, 4),
            Err(SessionError::ColumnOutOfRange {
                column: 4,
                value_count: 4
            })
        );
        assert!(!session.is_finished());
    }

    #[test]
    fn test_fixed_palette_session() {
        let colors = vec![
            Rgb::BLACK,
            Rgb::new(85, 85, 85),
            Rgb::new(170, 170, 170),
            Rgb::WHITE,
        ];
        let palette = FixedPalette::new(&colors, 4).unwrap();
        let request = PickRequest::new(5).old_color(Rgb::new(170, 170, 170));
        let mut session = PickerSession::new(
            &request,
            SwatchSource::fixed(palette),
            ScreenSpec::SQUARE_320,
            48,
        );

        assert_eq!(session.highlighted(), Some(Cell::new(0, 2)));
        let result = session.tap(session.initial_index() + 7, 1).unwrap();
        assert_eq!(result.picked_color(), Some(Rgb::new(85, 85, 85)));
    }
}
