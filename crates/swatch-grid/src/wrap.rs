//! Wrap-around list indexing.
//!
//! The picker shows a finite set of rows as a list that scrolls without end
//! in both directions. The list is given a huge virtual length
//! ([`VIRTUAL_ROW_COUNT`]) and opens at [`WrappingRows::middle`], an index
//! far from both ends that maps to row 0. A list index is turned back into a
//! row with plain modulo arithmetic.
//!
//! ```
//! use std::num::NonZeroUsize;
//! use swatch_grid::WrappingRows;
//!
//! let rows = WrappingRows::new(NonZeroUsize::new(109).unwrap());
//! let start = rows.middle();
//! assert_eq!(rows.row_of(start), 0);
//! assert_eq!(rows.row_of(rows.offset(start, -1)), 108);
//! assert_eq!(rows.row_of(rows.offset(start, 110)), 1);
//! ```

use std::num::NonZeroUsize;

/// Length of the virtual list (the largest list size the platform supports).
pub const VIRTUAL_ROW_COUNT: usize = i32::MAX as usize;

/// Start index for a list of `row_count` rows.
///
/// `(VIRTUAL_ROW_COUNT / 2) - (VIRTUAL_ROW_COUNT / 2) % row_count`: close to
/// the middle of the virtual list and a multiple of `row_count`, so the
/// index maps to row 0.
pub fn middle_position(row_count: NonZeroUsize) -> usize {
    let half = VIRTUAL_ROW_COUNT / 2;
    half - half % row_count.get()
}

/// Maps indices of the virtual list onto a fixed number of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrappingRows {
    row_count: NonZeroUsize,
}

impl WrappingRows {
    /// Index arithmetic for a list of `row_count` rows.
    #[inline]
    pub fn new(row_count: NonZeroUsize) -> Self {
        Self { row_count }
    }

    /// Number of distinct rows in one cycle.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.row_count.get()
    }

    /// See [`middle_position`].
    #[inline]
    pub fn middle(&self) -> usize {
        middle_position(self.row_count)
    }

    /// Row shown at `list_index`.
    #[inline]
    pub fn row_of(&self, list_index: usize) -> usize {
        list_index % self.row_count.get()
    }

    /// List index of `row` in the cycle that starts at [`middle`](Self::middle).
    #[inline]
    pub fn list_index_for(&self, row: usize) -> usize {
        self.middle() + self.row_of(row)
    }

    /// Largest multiple of the row count not above [`VIRTUAL_ROW_COUNT`].
    ///
    /// Offsets wrap modulo this value, which keeps [`row_of`](Self::row_of)
    /// continuous across the wrap. A row count above `VIRTUAL_ROW_COUNT`
    /// has no such multiple; one cycle is used then, so the span is never 0.
    #[inline]
    pub fn span(&self) -> usize {
        let rows = self.row_count.get();
        (VIRTUAL_ROW_COUNT - VIRTUAL_ROW_COUNT % rows).max(rows)
    }

    /// Move `delta` rows from `list_index`, wrapping at both ends.
    ///
    /// The result is in `0..span()`, and
    /// `row_of(offset(i, d)) == (row_of(i) + d) mod row_count`.
    pub fn offset(&self, list_index: usize, delta: isize) -> usize {
        let span = self.span() as i128;
        (list_index as i128 + delta as i128).rem_euclid(span) as usize
    }
}
