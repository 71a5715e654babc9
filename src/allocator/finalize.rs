//! Post-placement cleanup: row trimming, window repositioning and scoring.

use crate::models::{Passenger, RowState};

/// Drop rows opened beyond the plane's nominal row count.
pub fn trim_rows(layout: &mut Vec<Vec<Passenger>>, nominal_rows: usize) {
    layout.truncate(nominal_rows);
}

/// Seat index of the `slot`-th window position in a row of `len` seats.
///
/// Window positions alternate between the two ends of the row, starting with
/// the first seat and then the last.
pub fn window_position(slot: usize, len: usize) -> usize {
    if slot % 2 == 0 {
        slot / 2
    } else {
        len - 1 - slot / 2
    }
}

/// Move window-preferring passengers into the row's window positions.
///
/// Seats are scanned left to right; each window-preferring occupant is swapped
/// into the next window position while any remain. A seat already filled this
/// way is never moved again, and a window seeker swapped into the scanned seat
/// is placed before the scan moves on. Whether the passenger was actually
/// granted a window seat during placement does not matter here.
pub fn reposition_windows(row: &mut [Passenger], window_seats: usize) {
    let len = row.len();
    let slots = window_seats.min(len);
    let mut filled: Vec<usize> = Vec::with_capacity(slots);

    for seat in 0..len {
        while filled.len() < slots && row[seat].wants_window && !filled.contains(&seat) {
            let target = window_position(filled.len(), len);
            row.swap(target, seat);
            filled.push(target);
        }
    }
}

/// Aggregate satisfaction percentage.
///
/// Row totals are summed over the nominal rows, stopping as soon as the seats
/// counted so far cover `passenger_count`. This cutoff is independent of
/// [`trim_rows`].
pub fn aggregate_satisfaction(
    rows: &[RowState],
    nominal_rows: usize,
    seats_per_row: usize,
    passenger_count: usize,
) -> f64 {
    if passenger_count == 0 {
        return 0.0;
    }

    let mut total = 0.0;
    let mut uncovered = passenger_count;
    for row in rows.iter().take(nominal_rows) {
        total += row.row_satisfaction;
        uncovered = uncovered.saturating_sub(seats_per_row);
        if uncovered == 0 {
            break;
        }
    }

    total / passenger_count as f64 * 100.0
}

/// Format a percentage with at most two decimals and at least one, e.g.
/// `100.0%`, `16.67%`, `78.75%`.
pub fn format_percentage(percent: f64) -> String {
    let rounded = format!("{:.2}", percent);
    let trimmed = rounded.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0%", trimmed)
    } else {
        format!("{}%", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passenger(id: u32, wants_window: bool) -> Passenger {
        Passenger::new(id, wants_window, true)
    }

    fn ids(row: &[Passenger]) -> Vec<u32> {
        row.iter().map(|p| p.id).collect()
    }

    fn scored_row(satisfaction: f64) -> RowState {
        let mut row = RowState::new(4, 2);
        row.add_satisfaction(satisfaction);
        row
    }

    #[test]
    fn formats_percentages() {
        assert_eq!(format_percentage(100.0), "100.0%");
        assert_eq!(format_percentage(45.0), "45.0%");
        assert_eq!(format_percentage(0.5 / 3.0 * 100.0), "16.67%");
        assert_eq!(format_percentage(78.75), "78.75%");
        assert_eq!(format_percentage(36.6), "36.6%");
        assert_eq!(format_percentage(0.0), "0.0%");
        assert_eq!(format_percentage(0.5), "0.5%");
    }

    #[test]
    fn rounds_exact_ties_to_even() {
        assert_eq!(format_percentage(3.125), "3.12%");
        assert_eq!(format_percentage(3.375), "3.38%");
    }

    #[test]
    fn window_positions_alternate_between_ends() {
        assert_eq!(window_position(0, 6), 0);
        assert_eq!(window_position(1, 6), 5);
        assert_eq!(window_position(2, 6), 1);
        assert_eq!(window_position(3, 6), 4);
    }

    #[test]
    fn moves_window_passengers_to_row_edges() {
        let mut row = vec![
            passenger(1, false),
            passenger(2, true),
            passenger(3, false),
            passenger(4, true),
        ];
        reposition_windows(&mut row, 2);
        assert_eq!(ids(&row), vec![2, 1, 3, 4]);
    }

    #[test]
    fn stops_once_window_positions_are_used() {
        let mut row = vec![passenger(7, true), passenger(6, true), passenger(5, true)];
        reposition_windows(&mut row, 2);
        assert_eq!(ids(&row), vec![7, 5, 6]);
    }

    #[test]
    fn spreads_window_passengers_over_extra_window_slots() {
        let mut row = vec![
            passenger(1, true),
            passenger(2, false),
            passenger(3, true),
            passenger(4, true),
        ];
        reposition_windows(&mut row, 4);
        assert_eq!(ids(&row), vec![1, 4, 2, 3]);
        assert!(!row[2].wants_window);
    }

    #[test]
    fn never_moves_a_placed_window_passenger_again() {
        let mut row = vec![
            passenger(1, false),
            passenger(2, true),
            passenger(3, false),
            passenger(4, true),
            passenger(5, true),
        ];
        reposition_windows(&mut row, 3);
        assert_eq!(ids(&row), vec![2, 5, 3, 1, 4]);
    }

    #[test]
    fn caps_window_slots_at_row_length() {
        let mut row = vec![passenger(1, true), passenger(2, true)];
        reposition_windows(&mut row, 6);
        assert_eq!(ids(&row), vec![1, 2]);
    }

    #[test]
    fn leaves_rows_without_window_passengers_untouched() {
        let mut row = vec![passenger(1, false), passenger(2, false)];
        reposition_windows(&mut row, 2);
        assert_eq!(ids(&row), vec![1, 2]);

        let mut empty: Vec<Passenger> = Vec::new();
        reposition_windows(&mut empty, 2);
        assert!(empty.is_empty());
    }

    #[test]
    fn trims_overbooked_rows() {
        let mut layout = vec![vec![passenger(1, false)], vec![passenger(2, false)], vec![]];
        trim_rows(&mut layout, 2);
        assert_eq!(layout.len(), 2);
    }

    #[test]
    fn aggregate_stops_once_passengers_are_covered() {
        let rows = vec![scored_row(4.0), scored_row(3.0), scored_row(2.0)];
        // 5 passengers in 4-seat rows: only the first two rows count.
        assert_eq!(aggregate_satisfaction(&rows, 3, 4, 5), 7.0 / 5.0 * 100.0);
    }

    #[test]
    fn aggregate_never_counts_rows_beyond_nominal() {
        let rows = vec![scored_row(4.0), scored_row(4.0), scored_row(4.0)];
        assert_eq!(aggregate_satisfaction(&rows, 2, 4, 12), 8.0 / 12.0 * 100.0);
    }

    #[test]
    fn aggregate_of_no_passengers_is_zero() {
        assert_eq!(aggregate_satisfaction(&[], 3, 4, 0), 0.0);
    }
}
