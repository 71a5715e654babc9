//! Greedy seat allocation.
//!
//! An allocation run goes through three phases:
//!
//! 1. **Group placement**: groups are ordered largest first (ties: more window
//!    seekers first) and each is seated whole in the first suitable row, opening
//!    rows on demand. Groups larger than a row are dissolved into an overflow pool.
//! 2. **Overflow placement**: overflow passengers, window seekers first, are
//!    seated one by one and marked as separated from their group. Rows may be
//!    opened past the plane's nominal row count.
//! 3. **Finalization**: rows beyond the nominal count are dropped from the
//!    layout, window seekers are moved to the row edges and the aggregate
//!    satisfaction is computed.
//!
//! The result is a greedy heuristic, not a global optimum.

mod finalize;
mod search;

use std::cmp::Reverse;
use std::collections::VecDeque;

pub use finalize::{
    aggregate_satisfaction, format_percentage, reposition_windows, trim_rows, window_position,
};
pub use search::{find_suitable_row, RowRequest};

use crate::config::{AllocatorConfig, SatisfactionWeights};
use crate::models::*;

/// Satisfaction awarded to `passenger` when seated in a row, and whether the
/// seat consumes one of the row's window seats.
pub fn score_seat(
    weights: &SatisfactionWeights,
    passenger: &Passenger,
    window_available: bool,
) -> (f64, bool) {
    let separated = passenger.separated_from_group;

    if !passenger.wants_window {
        let award = if separated { weights.none } else { weights.full };
        return (award, false);
    }

    if window_available {
        let award = if separated { weights.half } else { weights.full };
        (award, true)
    } else if passenger.in_group && !separated {
        (weights.half, false)
    } else {
        (weights.none, false)
    }
}

/// Order groups by size, then by number of window seekers, both descending.
///
/// The sort is stable: groups tying on both keys keep their input order.
pub fn order_groups(groups: &mut [PassengerGroup]) {
    groups.sort_by_key(|group| Reverse((group.len(), group.window_count())));
}

/// Put window-preferring passengers first, keeping input order otherwise.
pub fn order_overflow(passengers: &mut [Passenger]) {
    passengers.sort_by_key(|passenger| Reverse(passenger.wants_window));
}

/// State for a single allocation run.
///
/// [`Allocator::allocate`] consumes the allocator, so every run starts from
/// fresh row and group state.
pub struct Allocator {
    config: AllocatorConfig,
    nominal_rows: usize,
    seats_per_row: usize,
    passenger_count: usize,
    groups: Vec<PassengerGroup>,
    rows: Vec<RowState>,
    seats: Vec<Vec<Passenger>>,
}

impl Allocator {
    pub fn new(manifest: FlightManifest, config: AllocatorConfig) -> Self {
        Self {
            config,
            nominal_rows: manifest.rows,
            seats_per_row: manifest.seats_per_row,
            passenger_count: manifest.passenger_count,
            groups: manifest.groups,
            rows: Vec::new(),
            seats: Vec::new(),
        }
    }

    /// Run the allocation and return the final seating.
    pub fn allocate(mut self) -> SeatingArrangement {
        let mut groups = std::mem::take(&mut self.groups);
        order_groups(&mut groups);

        let overflow = self.seat_groups(groups);
        self.seat_overflow(overflow);
        self.finish()
    }

    fn open_row(&mut self) {
        self.rows
            .push(RowState::new(self.seats_per_row, self.config.window_seats_per_row));
        self.seats.push(Vec::new());
        tracing::debug!(row = self.rows.len() - 1, "opened row");
    }

    fn find_row(&self, highest: usize, request: RowRequest) -> Option<usize> {
        find_suitable_row(&self.rows, highest, self.nominal_rows, request)
    }

    /// Seat every group that fits a row whole. Returns the passengers of groups
    /// that never can.
    fn seat_groups(&mut self, groups: Vec<PassengerGroup>) -> Vec<Passenger> {
        let mut pending: VecDeque<PassengerGroup> = groups.into();
        let mut overflow = Vec::new();
        let mut highest = 0;

        self.open_row();

        while let Some(group) = pending.pop_front() {
            let request = RowRequest::new(group.len(), group.window_count());

            match self.find_row(highest, request) {
                Some(row) => {
                    tracing::debug!(row, size = group.len(), "seating group");
                    for passenger in group.into_passengers() {
                        self.seat(row, passenger);
                    }
                }
                None if group.len() > self.seats_per_row => {
                    tracing::debug!(size = group.len(), "group larger than a row, dissolving");
                    overflow.extend(group.into_passengers());
                }
                None => {
                    self.open_row();
                    highest += 1;
                    pending.push_front(group);
                }
            }
        }

        overflow
    }

    /// Seat overflow passengers one at a time, marking them as separated.
    fn seat_overflow(&mut self, mut overflow: Vec<Passenger>) {
        if overflow.is_empty() {
            return;
        }
        if self.seats_per_row == 0 {
            tracing::warn!(
                passengers = overflow.len(),
                "rows have no seats, overflow passengers stay unseated"
            );
            return;
        }

        order_overflow(&mut overflow);

        let mut queue: VecDeque<Passenger> = overflow.into();
        let mut highest = 0;

        while let Some(mut passenger) = queue.pop_front() {
            let request = RowRequest::new(1, usize::from(passenger.wants_window));

            match self.find_row(highest, request) {
                Some(row) => {
                    passenger.separated_from_group = true;
                    self.seat(row, passenger);
                }
                None => {
                    self.open_row();
                    highest += 1;
                    queue.push_front(passenger);
                }
            }
        }
    }

    fn seat(&mut self, row: usize, mut passenger: Passenger) {
        let weights = self.config.weights;
        let state = &mut self.rows[row];

        state.take_seat();
        let (award, takes_window) = score_seat(&weights, &passenger, state.has_window_seat());
        if takes_window {
            state.take_window_seat();
        }
        state.add_satisfaction(award);
        passenger.award(award);

        self.seats[row].push(passenger);
    }

    fn finish(self) -> SeatingArrangement {
        let opened_rows = self.rows.len();
        let window_seats = self.config.window_seats_per_row;

        let mut layout = self.seats;
        trim_rows(&mut layout, self.nominal_rows);
        for row in &mut layout {
            reposition_windows(row, window_seats);
        }

        let satisfaction = aggregate_satisfaction(
            &self.rows,
            self.nominal_rows,
            self.seats_per_row,
            self.passenger_count,
        );

        tracing::info!(
            opened_rows,
            nominal_rows = self.nominal_rows,
            satisfaction = %format_percentage(satisfaction),
            "allocation complete"
        );

        SeatingArrangement {
            rows: layout,
            satisfaction,
            passenger_count: self.passenger_count,
            opened_rows,
        }
    }
}

/// Allocate seats for `manifest` with `config`.
pub fn allocate(manifest: FlightManifest, config: AllocatorConfig) -> SeatingArrangement {
    Allocator::new(manifest, config).allocate()
}
