pub mod locate;
pub mod pick;
pub mod screen;

pub use locate::{handle_locate, LocateQuery, LocateResponse, __path_handle_locate};
pub use pick::{
    handle_cancel, handle_open, handle_result, handle_rows, handle_tap, CellResponse,
    OpenPickRequest, OpenPickResponse, PickResultResponse, RowResponse, RowsQuery, RowsResponse,
    TapRequest,
};
pub use pick::{
    __path_handle_cancel, __path_handle_open, __path_handle_result, __path_handle_rows,
    __path_handle_tap,
};
pub use screen::{handle_screen, __path_handle_screen};

use swatch_grid::Rgb;

use crate::error::ApiError;

/// Parse a hex color from a request, keeping the input for the error.
pub fn parse_color(value: &str) -> Result<Rgb, ApiError> {
    value
        .parse()
        .map_err(|e| ApiError::invalid_color(value, e))
}
