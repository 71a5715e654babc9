//! First-fit row search.

use crate::models::RowState;

/// Seats a group (or a single overflow passenger) needs from one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowRequest {
    pub seats: usize,
    pub window_seats: usize,
}

impl RowRequest {
    pub fn new(seats: usize, window_seats: usize) -> Self {
        Self {
            seats,
            window_seats,
        }
    }
}

/// Find the first row in `rows[..=highest]` that can take `request`.
///
/// A row qualifies when it has enough free seats and, if window seats are
/// requested, enough free window seats. The window requirement is waived once
/// `highest` has reached `nominal_rows`; note that `highest` is the index of
/// the last row searched, not the number of opened rows, so during overflow
/// placement the waiver can kick in late or not at all.
pub fn find_suitable_row(
    rows: &[RowState],
    highest: usize,
    nominal_rows: usize,
    request: RowRequest,
) -> Option<usize> {
    let waive_windows = highest >= nominal_rows;

    rows.iter()
        .take(highest.saturating_add(1))
        .position(|row| {
            row.fits(request.seats)
                && (request.window_seats == 0
                    || row.fits_windows(request.window_seats)
                    || waive_windows)
        })
}
